fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Point prost at a vendored protoc so the build does not depend on a
    // system-installed protobuf compiler.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }
    tonic_prost_build::configure().compile_protos(&["proto/veilfs.proto"], &["proto"])?;
    Ok(())
}
