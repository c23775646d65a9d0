//! HTTP protocol layer
//!
//! Protocol plumbing shared by the request handlers, independent of any
//! filesystem logic.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

pub use range::{evaluate_range, RangeOutcome};
pub use response::{
    file_response, html_response, method_not_allowed, moved_permanently, not_found, not_modified,
    options_response, partial_response, range_not_satisfiable,
};
