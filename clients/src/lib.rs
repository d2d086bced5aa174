//! Shared plumbing for the `ddat-*` binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod logging;
pub mod pipeline;
pub mod settings;
