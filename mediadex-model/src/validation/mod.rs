//! Validation outcome model shared by every validator and service.
//!
//! Validators report [`Event`]s into a [`ValidationResult`]; the result's
//! [`Status`] is promoted to the highest [`Severity`] seen so far and never
//! goes back down. Results from independent checks are combined with
//! [`ValidationResult::merge`] or [`merge_results!`](crate::merge_results),
//! so a single `Error` anywhere makes the whole outcome an error regardless
//! of merge order.

mod event;
mod result;
mod severity;

pub use event::Event;
pub use result::ValidationResult;
pub use severity::{Severity, Status, promote};
