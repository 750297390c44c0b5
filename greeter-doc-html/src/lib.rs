//! # greeter-doc-html
//!
//! Renders a `Form` as a self-contained HTML page: one widget per field, a
//! submit button, and an output area that can be pre-filled with a result.
//!
//! ```rust
//! use greeter::{GreetingRequest, greet};
//! use greeter_doc_html::{HtmlOptions, Outcome, to_html_with_outcome};
//!
//! let outcome = Outcome::from_result(greet("<b>Ann</b>", 1));
//! let html = to_html_with_outcome::<GreetingRequest>(HtmlOptions::new(), &outcome);
//!
//! assert!(html.contains("Hello, &lt;b&gt;Ann&lt;/b&gt;!"));
//! assert!(!html.contains("<b>Ann"));
//! ```

mod generator;

pub use generator::{HtmlOptions, Outcome, to_html, to_html_with_options, to_html_with_outcome};
