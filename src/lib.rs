//! Display layout profiles and notification messages for the MessageBox and
//! send-hugs devices.
//!
//! This crate is pure configuration data plus the arithmetic that derives
//! secondary layout values from it:
//!
//! - [`config`]: `DisplayProfile` and the two device instances
//! - [`notifications`]: the send-hugs wake-up message catalog
//! - [`paging`]: scroll chunk and page-fraction helpers
//! - [`errors`]: construction and lookup errors
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while firmware consumers
//! link the crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

#[macro_use]
mod log;

pub mod config;
pub mod errors;
pub mod notifications;
pub mod paging;

// Re-export commonly used items
pub use config::{DisplayProfile, MESSAGE_BOX, PrimaryAttributes, SEND_HUGS};
pub use errors::{CatalogError, ProfileError};
pub use notifications::{NOTIFICATION_COUNT, NOTIFICATIONS, NotificationCatalog};
