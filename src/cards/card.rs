//! Tagged flashcards - immutable question/answer values.
//!
//! `TaggedCard` holds one question/answer pair plus its tags. Cards are
//! plain values: building a deck, requeueing a missed card, or keeping
//! an old deck state around all copy cards wholesale, so the type stays
//! small and never exposes interior mutation.
//!
//! ## File format
//!
//! A card serializes to a single line:
//!
//! ```text
//! <front>|<back>|<tag1>,<tag2>,...
//! ```
//!
//! The format has no escaping. Field values and tags must not contain
//! the separator characters; that invariant belongs to whoever produces
//! the card data.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Separator between the front, back, and tag-list fields.
pub const FIELD_SEPARATOR: &str = "|";

/// Separator between individual tags inside the tag-list field.
pub const TAG_SEPARATOR: &str = ",";

/// A flashcard with a question side, an answer side, and tags.
///
/// Tags keep their insertion order and may repeat.
///
/// ## Example
///
/// ```
/// use flashdeck::cards::TaggedCard;
///
/// let card = TaggedCard::new("What is the capital of Italy?", "Rome", ["country", "capital"]);
///
/// assert!(card.has_tag("capital"));
/// assert_eq!(
///     card.file_format(),
///     "What is the capital of Italy?|Rome|country,capital",
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedCard {
    front: String,
    back: String,
    tags: SmallVec<[String; 4]>,
}

impl TaggedCard {
    /// Create a card with tags.
    #[must_use]
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a card with no tags.
    #[must_use]
    pub fn untagged(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            tags: SmallVec::new(),
        }
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// The question side.
    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    /// The answer side.
    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    /// All tags, in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Check whether the card carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Serialize to the `front|back|tag1,tag2,...` line format.
    ///
    /// An empty tag list keeps the trailing field separator: `front|back|`.
    #[must_use]
    pub fn file_format(&self) -> String {
        format!(
            "{front}{sep}{back}{sep}{tags}",
            front = self.front,
            back = self.back,
            sep = FIELD_SEPARATOR,
            tags = self.tags.join(TAG_SEPARATOR),
        )
    }
}

impl std::fmt::Display for TaggedCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_format())
    }
}
