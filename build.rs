/// disable-peek build script.
///
/// Wires up the Node-API linker flags when the `napi` feature is on, and
/// warns when the target has no Desktop Window Manager to talk to.
fn main() {
    // Soft gate: the addon still builds elsewhere (every compositor call
    // reports `Unsupported`), but nothing useful happens off Windows.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=disable-peek targets Windows; building a no-op \
             addon for {target_os:?}"
        );
    }

    println!("cargo:rerun-if-changed=build.rs");

    // Cargo exposes enabled features to build scripts as CARGO_FEATURE_*.
    if std::env::var_os("CARGO_FEATURE_NAPI").is_some() {
        napi_build::setup();
    }
}
