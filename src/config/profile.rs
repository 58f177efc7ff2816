//! Display profile: primary layout constants plus the values derived from them.
//!
//! # Derived Constants
//!
//! Three values are computed from the primary set when a profile is built and
//! can't be supplied any other way:
//!
//! ```text
//! effective_width  = screen_width - 2 * margin
//! chars_per_line   = (effective_width - 2 * bubble_padding) / char_width
//! available_height = screen_height - 2 * bubble_padding - ellipsis_height
//! ```
//!
//! [`DisplayProfile::new`] is a `const fn`, so device profiles are evaluated
//! at compile time and a degenerate primary set fails the build instead of
//! producing a wrapped or divided-by-zero value on the device.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::errors::ProfileError;

// =============================================================================
// Primary Attributes
// =============================================================================

/// Layout constants supplied per device. All values are pixels unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PrimaryAttributes {
    /// Display width.
    pub screen_width: u32,
    /// Display height.
    pub screen_height: u32,
    /// Side margin on each side of the screen.
    pub margin: u32,
    /// Padding inside message bubbles.
    pub bubble_padding: u32,
    /// Horizontal advance of a single character.
    pub char_width: u32,
    /// Glyph height, for profiles that draw with a taller font.
    pub char_height: Option<u32>,
    /// Width and height of an emoji.
    pub emoji_size: u32,
    /// Gap after an emoji.
    pub emoji_padding: u32,
    /// Vertical pitch of one text line, matched to the emoji height.
    pub line_height: u32,
    /// Bubble corner radius.
    pub corner_radius: u32,
    /// Maximum lines that fit on screen (lines).
    pub lines_per_screen: u32,
    /// Maximum lines per scroll chunk (lines).
    pub max_lines_per_chunk: u32,
    /// Height of the ellipsis dots under a chunk.
    pub ellipsis_height: u32,
    /// Inset of the page fraction label, for profiles that show one.
    pub fraction_margin: Option<u32>,
}

impl PrimaryAttributes {
    /// Take character metrics from the monospace font used to draw text.
    ///
    /// The advance is glyph width plus inter-character spacing.
    pub const fn with_font(
        mut self,
        font: &MonoFont<'_>,
    ) -> Self {
        self.char_width = font.character_size.width + font.character_spacing;
        self.char_height = Some(font.character_size.height);
        self
    }
}

// =============================================================================
// Display Profile
// =============================================================================

/// A validated set of primary attributes together with its derived values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayProfile {
    primary: PrimaryAttributes,
    effective_width: u32,
    chars_per_line: u32,
    available_height: u32,
}

impl DisplayProfile {
    /// Validate `primary` and derive the secondary constants.
    ///
    /// Fails when any derived dimension would be zero or negative, when a
    /// line count is zero, when a screen dimension doesn't fit an `i32`
    /// drawing coordinate, or when the arithmetic overflows `u32`.
    pub const fn new(primary: PrimaryAttributes) -> Result<Self, ProfileError> {
        if primary.char_width == 0 {
            return Err(ProfileError::ZeroCharWidth);
        }
        if primary.lines_per_screen == 0 || primary.max_lines_per_chunk == 0 {
            return Err(ProfileError::ZeroLines);
        }
        if primary.max_lines_per_chunk > primary.lines_per_screen {
            return Err(ProfileError::ChunkExceedsScreen {
                max_lines_per_chunk: primary.max_lines_per_chunk,
                lines_per_screen: primary.lines_per_screen,
            });
        }

        if primary.screen_width > i32::MAX as u32 || primary.screen_height > i32::MAX as u32 {
            return Err(ProfileError::ScreenTooLarge {
                screen_width: primary.screen_width,
                screen_height: primary.screen_height,
            });
        }

        // Horizontal
        let Some(margins) = primary.margin.checked_mul(2) else {
            return Err(ProfileError::Overflow);
        };
        if margins >= primary.screen_width {
            return Err(ProfileError::MarginTooWide {
                margin: primary.margin,
                screen_width: primary.screen_width,
            });
        }
        let effective_width = primary.screen_width - margins;

        let Some(paddings) = primary.bubble_padding.checked_mul(2) else {
            return Err(ProfileError::Overflow);
        };
        if paddings >= effective_width {
            return Err(ProfileError::PaddingTooWide {
                bubble_padding: primary.bubble_padding,
                effective_width,
            });
        }
        let text_width = effective_width - paddings;
        let chars_per_line = text_width / primary.char_width;
        if chars_per_line == 0 {
            return Err(ProfileError::NoTextColumns {
                text_width,
                char_width: primary.char_width,
            });
        }

        // Vertical
        let Some(reserved) = paddings.checked_add(primary.ellipsis_height) else {
            return Err(ProfileError::Overflow);
        };
        if reserved >= primary.screen_height {
            return Err(ProfileError::HeightExhausted {
                screen_height: primary.screen_height,
            });
        }
        let available_height = primary.screen_height - reserved;

        Ok(Self {
            primary,
            effective_width,
            chars_per_line,
            available_height,
        })
    }

    /// The primary attributes this profile was built from.
    #[inline]
    pub const fn primary(&self) -> PrimaryAttributes { self.primary }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Screen width minus the side margins.
    #[inline]
    pub const fn effective_width(&self) -> u32 { self.effective_width }

    /// Whole characters that fit on one bubble line.
    #[inline]
    pub const fn chars_per_line(&self) -> u32 { self.chars_per_line }

    /// Vertical space for text once bubble padding and the ellipsis are reserved.
    #[inline]
    pub const fn available_height(&self) -> u32 { self.available_height }

    /// Width inside the bubble padding.
    #[inline]
    pub const fn text_width(&self) -> u32 { self.effective_width - 2 * self.primary.bubble_padding }

    /// Horizontal space consumed by one emoji and its trailing gap.
    #[inline]
    pub const fn emoji_advance(&self) -> u32 { self.primary.emoji_size.saturating_add(self.primary.emoji_padding) }

    /// Number of scroll chunks needed for `total_lines` of wrapped text.
    #[inline]
    pub const fn chunk_count(
        &self,
        total_lines: u32,
    ) -> u32 {
        total_lines.div_ceil(self.primary.max_lines_per_chunk)
    }

    /// Full display size.
    #[inline]
    pub const fn screen_size(&self) -> Size { Size::new(self.primary.screen_width, self.primary.screen_height) }

    /// Text area inside the bubble: inset by margin and padding horizontally,
    /// `available_height` tall starting below the top padding.
    pub const fn content_area(&self) -> Rectangle {
        let left = self.primary.margin + self.primary.bubble_padding;
        Rectangle::new(
            Point::new(left as i32, self.primary.bubble_padding as i32),
            Size::new(self.text_width(), self.available_height),
        )
    }

    // -------------------------------------------------------------------------
    // Primary values
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn screen_width(&self) -> u32 { self.primary.screen_width }

    #[inline]
    pub const fn screen_height(&self) -> u32 { self.primary.screen_height }

    #[inline]
    pub const fn margin(&self) -> u32 { self.primary.margin }

    #[inline]
    pub const fn bubble_padding(&self) -> u32 { self.primary.bubble_padding }

    #[inline]
    pub const fn char_width(&self) -> u32 { self.primary.char_width }

    #[inline]
    pub const fn char_height(&self) -> Option<u32> { self.primary.char_height }

    #[inline]
    pub const fn emoji_size(&self) -> u32 { self.primary.emoji_size }

    #[inline]
    pub const fn emoji_padding(&self) -> u32 { self.primary.emoji_padding }

    #[inline]
    pub const fn line_height(&self) -> u32 { self.primary.line_height }

    #[inline]
    pub const fn corner_radius(&self) -> u32 { self.primary.corner_radius }

    #[inline]
    pub const fn lines_per_screen(&self) -> u32 { self.primary.lines_per_screen }

    #[inline]
    pub const fn max_lines_per_chunk(&self) -> u32 { self.primary.max_lines_per_chunk }

    #[inline]
    pub const fn ellipsis_height(&self) -> u32 { self.primary.ellipsis_height }

    #[inline]
    pub const fn fraction_margin(&self) -> Option<u32> { self.primary.fraction_margin }
}

impl TryFrom<PrimaryAttributes> for DisplayProfile {
    type Error = ProfileError;

    /// Runtime construction; same checks as [`DisplayProfile::new`], with the
    /// rejection logged.
    fn try_from(primary: PrimaryAttributes) -> Result<Self, Self::Error> {
        let profile = Self::new(primary).inspect_err(|err| warn!("display profile rejected: {}", err))?;
        debug!(
            "display profile {}x{}: {} chars/line, {}px available",
            profile.screen_width(),
            profile.screen_height(),
            profile.chars_per_line(),
            profile.available_height()
        );
        Ok(profile)
    }
}

// =============================================================================
// Tests
// =============================================================================
