//! Wake-up notification messages for the send-hugs device.
//!
//! The message table is fixed at build time. Its count is taken from the
//! table itself so the two can't drift apart after an edit.
//!
//! # Usage
//!
//! ```ignore
//! use message_box_layout::NOTIFICATIONS;
//!
//! // Random selection from an external RNG value
//! let text = NOTIFICATIONS.pick(rng.next_u32()).unwrap_or_default();
//!
//! // Sequential selection
//! let text = NOTIFICATIONS.get(shown % NOTIFICATIONS.count())?;
//! ```

use core::slice;

use crate::errors::CatalogError;

// =============================================================================
// Message Table
// =============================================================================

/// Notification texts shown when a new message arrives.
pub const NOTIFICATION_MESSAGES: &[&str] = &[
    "Hey! You've got a new message waiting!",
    "Knock knock! Someone sent you a message!",
    "📫 New message alert! Give me a shake to read it!",
    "Something special just arrived for you!",
    "Your message box is feeling chatty... Shake it up!",
    "Peek inside! You've got mail!",
    "Ding dong! Message delivery!",
    "Someone's thinking of you - new message!",
    "💌 Message incoming! Shake to reveal!",
    "A little note just flew in!",
    "Your message box has a surprise for you!",
    "Special delivery! Shake to open!",
    "🦋 A new message has landed!",
    "Time to check your messages!",
    "Someone left you a note!",
    "Message in a box! Shake to read!",
    "💝 You've got a lovely new message!",
    "Psst... there's a message waiting!",
    "New message, just for you!",
    "Someone sent you something special!",
];

/// Number of notification messages.
pub const NOTIFICATION_COUNT: usize = NOTIFICATION_MESSAGES.len();

const _: () = assert!(NOTIFICATION_COUNT > 0);

/// Catalog over [`NOTIFICATION_MESSAGES`].
pub const NOTIFICATIONS: NotificationCatalog = NotificationCatalog::new(NOTIFICATION_MESSAGES);

// =============================================================================
// Catalog
// =============================================================================

/// Read-only, indexed view over a static message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationCatalog {
    messages: &'static [&'static str],
}

impl NotificationCatalog {
    pub const fn new(messages: &'static [&'static str]) -> Self { Self { messages } }

    /// Number of messages, always the length of the backing table.
    #[inline]
    pub const fn count(&self) -> usize { self.messages.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.messages.is_empty() }

    /// Message at `index`.
    ///
    /// Accepts any integer type; negative indices and indices at or past
    /// [`count`](Self::count) fail with [`CatalogError::IndexOutOfRange`].
    pub fn get<I>(
        &self,
        index: I,
    ) -> Result<&'static str, CatalogError>
    where
        I: TryInto<usize>,
    {
        index
            .try_into()
            .ok()
            .and_then(|i| self.messages.get(i).copied())
            .ok_or_else(|| {
                warn!("notification index out of range (count {})", self.count());
                CatalogError::IndexOutOfRange { count: self.count() }
            })
    }

    /// Map an externally supplied random value onto a message.
    ///
    /// Returns `None` only for an empty catalog.
    pub fn pick(
        &self,
        seed: u32,
    ) -> Option<&'static str> {
        if self.is_empty() {
            return None;
        }
        let index = seed as usize % self.count();
        self.messages.get(index).copied()
    }

    /// Iterate over messages in table order.
    pub fn iter(&self) -> core::iter::Copied<slice::Iter<'static, &'static str>> { self.messages.iter().copied() }
}

impl IntoIterator for NotificationCatalog {
    type Item = &'static str;
    type IntoIter = core::iter::Copied<slice::Iter<'static, &'static str>>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// =============================================================================
// Tests
// =============================================================================
