#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Lumen UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    lumen_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{NATIVE_NOTICE}")
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "lumen-ui renders into a browser document and has nothing to show natively; \
compile it for wasm32-unknown-unknown and serve the bundle (for example with `trunk serve`).";
