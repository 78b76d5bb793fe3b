//! Build script for remoteuac-proto
//!
//! Compiles protobuf definitions using tonic-build.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_root = "../../proto";

    let protos = [
        "remoteuac/v1/install_request.proto",
        "remoteuac/v1/health.proto",
    ];

    let proto_paths: Vec<_> = protos
        .iter()
        .map(|p| format!("{}/{}", proto_root, p))
        .collect();

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&proto_paths, &[proto_root.to_string()])?;

    Ok(())
}
