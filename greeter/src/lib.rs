//! # greeter
//!
//! Builds a sanitized, repeated greeting, and describes the form that asks
//! for its inputs without tying it to any particular UI.
//!
//! ## Usage
//!
//! ```rust
//! assert_eq!(greeter::greet("Alice", 2).unwrap(), "Hello, Alice!Hello, Alice!");
//! assert_eq!(greeter::greet("<b>", 1).unwrap(), "Hello, &lt;b&gt;!");
//! assert!(greeter::greet("Bob", 0).is_err());
//! ```
//!
//! Through a backend:
//!
//! ```rust
//! use greeter::{GreetingRequest, TestBackend};
//!
//! let request = GreetingRequest::builder()
//!     .run(
//!         TestBackend::new()
//!             .with_text("name", "Alice")
//!             .with_int("repetitions", 3),
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     request.respond().unwrap(),
//!     "Hello, Alice!Hello, Alice!Hello, Alice!"
//! );
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `FormBackend`:
//! - `greeter-wizard-dialoguer` - CLI prompts via dialoguer
//! - `greeter-doc-html` - renders the form as an HTML page

pub use greeter_types::*;

mod escape;
pub use escape::escape_html;

mod greet;
pub use greet::{GreetError, greet};

mod request;
pub use request::GreetingRequest;

mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
