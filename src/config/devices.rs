//! Display profiles for the two devices.
//!
//! Both target ST7735-class panels and share the derivation in
//! [`DisplayProfile::new`]; only the primary values differ. Profiles are
//! evaluated at compile time, and the `const` assertions below pin the derived
//! values so an edit to a primary constant that shifts the layout is caught
//! by the build.

use super::profile::{DisplayProfile, PrimaryAttributes};

/// Unwrap a profile in const context. An invalid primary set is a build error.
const fn validated(primary: PrimaryAttributes) -> DisplayProfile {
    match DisplayProfile::new(primary) {
        Ok(profile) => profile,
        Err(_) => panic!("invalid display profile"),
    }
}

// =============================================================================
// MessageBox (ST7735, 160x128)
// =============================================================================

/// Primary layout constants for the MessageBox display.
pub const MESSAGE_BOX_ATTRIBUTES: PrimaryAttributes = PrimaryAttributes {
    screen_width: 160,
    screen_height: 128,
    margin: 10,
    bubble_padding: 10,
    char_width: 6,
    char_height: None,
    emoji_size: 16,
    emoji_padding: 4,
    line_height: 16, // Match emoji height
    corner_radius: 10,
    lines_per_screen: 6,
    max_lines_per_chunk: 5,
    ellipsis_height: 8,
    fraction_margin: Some(5),
};

/// MessageBox display profile.
pub const MESSAGE_BOX: DisplayProfile = validated(MESSAGE_BOX_ATTRIBUTES);

const _: () = assert!(MESSAGE_BOX.effective_width() == 140);
const _: () = assert!(MESSAGE_BOX.chars_per_line() == 20);
const _: () = assert!(MESSAGE_BOX.available_height() == 100);

// =============================================================================
// send-hugs (ST7735, 240x135)
// =============================================================================

/// Primary layout constants for the send-hugs display.
pub const SEND_HUGS_ATTRIBUTES: PrimaryAttributes = PrimaryAttributes {
    screen_width: 240,
    screen_height: 135,
    margin: 7,
    bubble_padding: 7,
    char_width: 12,
    char_height: Some(16),
    emoji_size: 16,
    emoji_padding: 4,
    line_height: 18,
    corner_radius: 5,
    lines_per_screen: 4,
    max_lines_per_chunk: 3,
    ellipsis_height: 9,
    fraction_margin: None,
};

/// send-hugs display profile.
pub const SEND_HUGS: DisplayProfile = validated(SEND_HUGS_ATTRIBUTES);

const _: () = assert!(SEND_HUGS.effective_width() == 226);
const _: () = assert!(SEND_HUGS.chars_per_line() == 17);
const _: () = assert!(SEND_HUGS.available_height() == 112);

// =============================================================================
// Unit Tests
// =============================================================================
