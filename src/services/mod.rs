//! External collaborators of the booking form.
//!
//! # Services
//!
//! - [`submit`] - Final submission: booking reference, console log, latency
//!
//! Navigation to the confirmation page stays in the form controller, since
//! the router's navigate capability has to be taken in component scope.

pub mod submit;

pub use submit::*;
