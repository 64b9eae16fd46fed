//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod account;
mod stat;

pub use account::AccountDisplay;
pub use stat::{AccountStatDisplay, DailyStatDisplay};
