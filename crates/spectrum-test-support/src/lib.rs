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

//! Shared test helpers for the email preferences crates.
//! Layout: fixtures.rs (snapshots and payloads), mocks.rs (fake mutations and toast sinks), logging.rs (test tracing).

pub mod fixtures;
pub mod logging;
pub mod mocks;
