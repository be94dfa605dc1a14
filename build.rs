fn main() -> std::io::Result<()> {
    // Point tonic-build at a vendored protoc binary when one is not available
    // on the host; leaves an explicitly-set PROTOC untouched.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(path) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", path);
        }
    }

    tonic_build::configure().compile(
        &["proto/greeter.proto", "proto/calculator.proto"],
        &["proto"],
    )?;

    Ok(())
}
