#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc, // Internal API
    clippy::missing_panics_doc, // Internal API
    clippy::must_use_candidate, // Annotated selectively on critical APIs
    clippy::doc_markdown        // Internal API
)]

pub mod app;
pub mod level;
pub mod logger;
pub mod record;

// Re-export main types for easy access
pub use level::Level;
pub use logger::Logger;
pub use record::Properties;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
