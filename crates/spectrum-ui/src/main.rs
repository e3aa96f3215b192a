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
//! Email preferences panel entry point.
//!
//! In the browser this mounts the settings app; natively it only explains how
//! to build the wasm bundle and where the panel expects its GraphQL API.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    spectrum_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "spectrum-ui renders the email preferences panel in the browser only.
Build the bundle with `trunk build` (target wasm32-unknown-unknown) and serve it next to the
Spectrum API; the panel posts GraphQL to `<page origin>/api`, with dev port 3000 mapped to 3001.
";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_NOTICE.as_bytes())
}
