//! Heuristic evaluators.
//!
//! Both evaluators are pure functions of their input string: no I/O, no
//! shared state, safe to call concurrently from any thread.

pub mod html;
pub mod url;

pub use html::{evaluate_html, evaluate_html_with_origin};
pub use url::evaluate_url;
