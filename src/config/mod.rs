//! Display configuration.
//!
//! - `profile`: the `DisplayProfile` type and its derivation
//! - `devices`: the MessageBox and send-hugs profiles

pub mod devices;
pub mod profile;

// Re-export at config level for convenience
pub use devices::{MESSAGE_BOX, MESSAGE_BOX_ATTRIBUTES, SEND_HUGS, SEND_HUGS_ATTRIBUTES};
pub use profile::{DisplayProfile, PrimaryAttributes};
