use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_dir = "proto";
    let proto_file = "proto/ecommerce/order_management.proto";

    println!("cargo:rerun-if-changed={}", proto_file);

    // The descriptor set keeps custom options (oauth2_provider, sensitive)
    // that prost codegen drops; introspection decodes it at runtime.
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("ecommerce_descriptor.bin"))
        .compile_protos(&[proto_file], &[proto_dir])?;

    Ok(())
}
