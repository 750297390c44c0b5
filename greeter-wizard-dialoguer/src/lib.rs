//! # greeter-wizard-dialoguer
//!
//! Dialoguer wizard backend for greeter.
//!
//! Fields are asked one after another on the terminal. Sliders become integer
//! prompts that re-ask until the answer is within bounds.
//!
//! ## Example
//!
//! ```rust,ignore
//! use greeter::GreetingRequest;
//! use greeter_wizard_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let request = GreetingRequest::builder().run(DialoguerBackend::new())?;
//!     println!("{}", request.respond()?);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
