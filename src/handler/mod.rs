//! Request handling
//!
//! Dispatches incoming requests onto the static file tree.

pub mod listing;
pub mod router;
pub mod static_files;

pub use router::handle_request;
