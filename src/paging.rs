//! Scroll paging helpers derived from the profile constants.
//!
//! Long messages are shown in chunks of `max_lines_per_chunk` lines. Profiles
//! with a `fraction_margin` show a "page/total" label in the bottom-right
//! corner; this module builds that label and its bounds without allocating.

use core::fmt::Write;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::config::DisplayProfile;

/// Capacity of a fraction label: two `u32` values and the separator.
pub const FRACTION_LABEL_LEN: usize = 21;

/// Build the 1-based `"page/total"` label.
///
/// Returns `None` when `page` is zero or past `total`.
pub fn fraction_label(
    page: u32,
    total: u32,
) -> Option<String<FRACTION_LABEL_LEN>> {
    if page == 0 || page > total {
        return None;
    }
    let mut label = String::new();
    // Capacity covers the widest pair of u32 values
    write!(label, "{page}/{total}").ok()?;
    Some(label)
}

/// Bounds of a `label_len`-character fraction label, inset from the
/// bottom-right corner by the profile's fraction margin.
///
/// Height is the glyph height when the profile has one, else the line height.
/// Returns `None` for profiles without a fraction margin or labels that don't
/// fit on screen.
pub fn fraction_bounds(
    profile: &DisplayProfile,
    label_len: usize,
) -> Option<Rectangle> {
    let inset = profile.fraction_margin()?;
    let width = u32::try_from(label_len).ok()?.checked_mul(profile.char_width())?;
    let height = profile.char_height().unwrap_or(profile.line_height());

    let x = profile.screen_width().checked_sub(inset)?.checked_sub(width)?;
    let y = profile.screen_height().checked_sub(inset)?.checked_sub(height)?;

    let top_left = Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?);
    Some(Rectangle::new(top_left, Size::new(width, height)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MESSAGE_BOX, MESSAGE_BOX_ATTRIBUTES, PrimaryAttributes, SEND_HUGS};

    #[test]
    fn test_fraction_label() {
        assert_eq!(fraction_label(2, 5).unwrap().as_str(), "2/5");
        assert_eq!(fraction_label(1, 1).unwrap().as_str(), "1/1");
        assert_eq!(fraction_label(10, 12).unwrap().as_str(), "10/12");
    }

    #[test]
    fn test_fraction_label_limits() {
        assert!(fraction_label(0, 3).is_none());
        assert!(fraction_label(4, 3).is_none());
        assert!(fraction_label(1, 0).is_none());

        let widest = fraction_label(u32::MAX, u32::MAX).unwrap();
        assert_eq!(widest.as_str(), "4294967295/4294967295");
        assert_eq!(widest.len(), FRACTION_LABEL_LEN);
    }

    #[test]
    fn test_fraction_bounds_message_box() {
        let label = fraction_label(1, 3).unwrap();
        let bounds = fraction_bounds(&MESSAGE_BOX, label.len()).unwrap();
        // 3 chars * 6px wide, line height 16, inset 5 from 160x128
        assert_eq!(bounds, Rectangle::new(Point::new(137, 107), Size::new(18, 16)));
    }

    #[test]
    fn test_fraction_bounds_without_margin() {
        assert!(fraction_bounds(&SEND_HUGS, 3).is_none());
    }

    #[test]
    fn test_fraction_bounds_too_wide() {
        // 26 * 6 = 156px does not fit in 160 - 5
        assert!(fraction_bounds(&MESSAGE_BOX, 26).is_none());
        assert!(fraction_bounds(&MESSAGE_BOX, 25).is_some());
    }

    #[test]
    fn test_fraction_bounds_on_widest_screen() {
        let profile = DisplayProfile::new(PrimaryAttributes {
            screen_width: i32::MAX as u32,
            ..MESSAGE_BOX_ATTRIBUTES
        })
        .unwrap();
        let bounds = fraction_bounds(&profile, 3).unwrap();
        assert_eq!(bounds.top_left, Point::new(i32::MAX - 5 - 18, 107));
    }

    #[test]
    fn test_chunk_pages_label() {
        // 12 wrapped lines on send-hugs: 3 lines per chunk
        let total = SEND_HUGS.chunk_count(12);
        assert_eq!(total, 4);
        assert_eq!(fraction_label(total, total).unwrap().as_str(), "4/4");
    }
}
