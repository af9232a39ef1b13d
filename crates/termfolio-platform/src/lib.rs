//! Platform services for termfolio.
//!
//! Commands never read the system clock directly; they go through
//! [`TimeService`] so tests can pin the time.

mod services;

pub use services::{DesktopClock, SystemTime, TimeService};
