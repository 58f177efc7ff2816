//! Error types for profile construction and catalog lookup.

use thiserror::Error;

/// A primary attribute set that would produce a degenerate layout.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileError {
    #[error("character width must be non-zero")]
    ZeroCharWidth,
    #[error("screen {screen_width}x{screen_height} exceeds the drawing coordinate range")]
    ScreenTooLarge { screen_width: u32, screen_height: u32 },
    #[error("margin {margin}px on both sides leaves no width on a {screen_width}px screen")]
    MarginTooWide { margin: u32, screen_width: u32 },
    #[error("bubble padding {bubble_padding}px on both sides leaves no text width inside {effective_width}px")]
    PaddingTooWide { bubble_padding: u32, effective_width: u32 },
    #[error("text width {text_width}px fits no {char_width}px characters")]
    NoTextColumns { text_width: u32, char_width: u32 },
    #[error("padding and ellipsis leave no height on a {screen_height}px screen")]
    HeightExhausted { screen_height: u32 },
    #[error("line counts must be non-zero")]
    ZeroLines,
    #[error("chunk of {max_lines_per_chunk} lines exceeds {lines_per_screen} lines per screen")]
    ChunkExceedsScreen { max_lines_per_chunk: u32, lines_per_screen: u32 },
    #[error("layout arithmetic overflowed")]
    Overflow,
}

/// Catalog lookup failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// Index was negative or not below the catalog's count.
    #[error("message index out of range (catalog holds {count} messages)")]
    IndexOutOfRange { count: usize },
}
