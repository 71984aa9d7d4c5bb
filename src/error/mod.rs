//! Error handling for covtrack.
//!
//! - **Fetch errors**: transport failure or non-2xx status
//! - **Parse errors**: malformed JSON or a payload missing required fields
//! - **Unified type**: [`TrackerError`] wraps both and is what the API
//!   client returns
//! - **Categories**: [`ErrorCategory`] for logging and status-line hints
//!
//! Errors never reach the render loop. A failed fetch comes back to the
//! reducer as `Event::FetchFailed`, is logged and leaves prior state in place.
//!
//! | Category | Source | Transient |
//! |----------|--------|-----------|
//! | Network | connect, DNS, timeout | Yes |
//! | Server | HTTP 5xx | Yes |
//! | Client | HTTP 4xx | No |
//! | Data | schema mismatch | No |

mod category;
mod fetch;
mod parse;
mod tracker_error;

pub use category::ErrorCategory;
pub use fetch::FetchError;
pub use parse::ParseError;
pub use tracker_error::{TrackerError, TrackerResult};
