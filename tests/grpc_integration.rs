//! gRPC integration tests — real server on an ephemeral port, generated client.

use order_management::orders::OrderStore;
use order_management::proto::order_management_client::OrderManagementClient;
use order_management::proto::Order;
use order_management::server::GrpcServer;
use order_management::types::ServerConfig;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tokio::sync::Mutex;
use tonic::transport::Channel;
use tonic::Code;

// =============================================================================
// Test Helpers
// =============================================================================

struct TestServer {
    server: Arc<GrpcServer>,
    handle: tokio::task::JoinHandle<order_management::Result<()>>,
    client: OrderManagementClient<Channel>,
}

impl TestServer {
    async fn shutdown(self) {
        let TestServer {
            server,
            handle,
            client,
        } = self;
        drop(client);
        server.shutdown();
        handle.await.unwrap().unwrap();
    }
}

/// Spin up a seeded server on a random port and connect a client to it.
async fn start_test_server() -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(Mutex::new(OrderStore::with_sample_data().unwrap()));
    let server = Arc::new(GrpcServer::new(store, ServerConfig::default()));

    let handle = {
        let server = server.clone();
        tokio::spawn(async move { server.serve_listener(listener).await })
    };

    let client = OrderManagementClient::connect(format!("http://{}", addr))
        .await
        .unwrap();

    TestServer {
        server,
        handle,
        client,
    }
}

fn order(id: &str, items: &[&str], destination: &str, price: f32) -> Order {
    Order {
        id: id.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
        destination: destination.to_string(),
        price,
    }
}

// =============================================================================
// Seed Data
// =============================================================================

#[tokio::test]
async fn test_seeded_orders_are_served() {
    let mut ts = start_test_server().await;

    let resp = ts.client.get_order("102".to_string()).await.unwrap().into_inner();
    assert_eq!(
        resp,
        order(
            "102",
            &["Google Pixel 3A", "Mac Book Pro"],
            "Mountain View, CA",
            1800.00
        )
    );

    let resp = ts.client.get_order("105".to_string()).await.unwrap().into_inner();
    assert_eq!(resp, order("105", &["Amazon Echo"], "San Jose, CA", 30.00));

    ts.shutdown().await;
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let mut ts = start_test_server().await;

    let status = ts.client.get_order("999".to_string()).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "Order does not exist: 999");

    ts.shutdown().await;
}

#[tokio::test]
async fn test_get_with_empty_id_is_not_found() {
    let mut ts = start_test_server().await;

    let status = ts.client.get_order(String::new()).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "Order does not exist: ");

    ts.shutdown().await;
}

// =============================================================================
// Add / Replace
// =============================================================================

#[tokio::test]
async fn test_add_then_get_round_trip() {
    let mut ts = start_test_server().await;
    let new_order = order("300", &["Pixel Watch"], "Sunnyvale, CA", 349.0);

    let confirmation = ts
        .client
        .add_order(new_order.clone())
        .await
        .unwrap()
        .into_inner();
    assert_eq!(confirmation, "Order Added: 300");

    let fetched = ts.client.get_order("300".to_string()).await.unwrap().into_inner();
    assert_eq!(fetched, new_order);

    ts.shutdown().await;
}

#[tokio::test]
async fn test_add_existing_id_replaces_without_merge() {
    let mut ts = start_test_server().await;

    ts.client
        .add_order(order("106", &["Kindle"], "", 0.0))
        .await
        .unwrap();

    let fetched = ts.client.get_order("106".to_string()).await.unwrap().into_inner();
    assert_eq!(fetched, order("106", &["Kindle"], "", 0.0));
    assert!(!fetched.items.iter().any(|item| item == "Apple iPhone XS"));

    ts.shutdown().await;
}

#[tokio::test]
async fn test_add_with_empty_id_is_invalid() {
    let mut ts = start_test_server().await;

    let status = ts
        .client
        .add_order(order("", &["Orphan"], "Nowhere", 1.0))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    ts.shutdown().await;
}

// =============================================================================
// Startup Introspection
// =============================================================================

#[cfg(feature = "introspection")]
#[tokio::test]
async fn test_service_catalog_available_while_serving() {
    let mut ts = start_test_server().await;

    // A completed call means serve_listener is past startup.
    ts.client.get_order("102".to_string()).await.unwrap();

    let catalog = ts.server.service_catalog().unwrap();
    assert_eq!(catalog.methods.len(), 2);
    assert!(catalog.methods.get("/ecommerce.OrderManagement/addOrder").is_some());
    assert!(catalog.methods.get("/ecommerce.OrderManagement/getOrder").is_some());

    let provider = catalog.oauth2_provider.as_ref().unwrap();
    assert_eq!(provider.url, "https://accounts.example.com/o/oauth2/auth");

    ts.shutdown().await;
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_concurrent_clients_share_store() {
    let ts = start_test_server().await;

    let mut handles = Vec::new();
    for i in 0..16 {
        let mut client = ts.client.clone();
        handles.push(tokio::spawn(async move {
            let id = format!("bulk-{i}");
            client
                .add_order(order(&id, &["Widget"], "Reno, NV", i as f32))
                .await
                .unwrap();
            client.get_order(id).await.unwrap().into_inner()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let fetched = handle.await.unwrap();
        assert_eq!(fetched.id, format!("bulk-{i}"));
        assert_eq!(fetched.price, i as f32);
    }

    ts.shutdown().await;
}
