use super::Order;
use crate::types::{Error, OrderId, Result};

fn sample(id: &str, items: &[&str], destination: &str, price: f32) -> Result<Order> {
    let id = OrderId::from_string(id.to_string()).map_err(Error::internal)?;
    Ok(Order::new(id, items.iter().copied(), destination, price))
}

/// Orders loaded into the store at startup.
pub fn sample_orders() -> Result<Vec<Order>> {
    Ok(vec![
        sample(
            "102",
            &["Google Pixel 3A", "Mac Book Pro"],
            "Mountain View, CA",
            1800.00,
        )?,
        sample("103", &["Apple Watch S4"], "San Jose, CA", 400.00)?,
        sample(
            "104",
            &["Google Home Mini", "Google Nest Hub"],
            "Mountain View, CA",
            400.00,
        )?,
        sample("105", &["Amazon Echo"], "San Jose, CA", 30.00)?,
        sample(
            "106",
            &["Amazon Echo", "Apple iPhone XS"],
            "Mountain View, CA",
            300.00,
        )?,
    ])
}
