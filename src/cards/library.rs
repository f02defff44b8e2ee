//! Card library for assembling study decks.
//!
//! The `CardLibrary` holds cards in insertion order and indexes them by
//! tag, so callers can slice out a themed subset and feed it to a deck.
//! The library itself never builds decks; it only hands out cards.

use rustc_hash::FxHashMap;

use super::card::TaggedCard;

/// Insertion-ordered collection of cards with tag lookup.
///
/// ## Example
///
/// ```
/// use flashdeck::cards::{CardLibrary, TaggedCard};
///
/// let mut library = CardLibrary::new();
/// library.add(TaggedCard::new("Who is the 11th president of the U.S?", "James Polk", ["president"]));
/// library.add(TaggedCard::new("Which team won the Fifa World Cup in 2022?", "Argentina", ["soccer"]));
///
/// let presidents: Vec<_> = library.find_by_tag("president").collect();
/// assert_eq!(presidents.len(), 1);
/// assert_eq!(presidents[0].back(), "James Polk");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    cards: Vec<TaggedCard>,
    by_tag: FxHashMap<String, Vec<usize>>,
}

impl CardLibrary {
    /// Create a new empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A starter library of trivia cards.
    #[must_use]
    pub fn sample() -> Self {
        [
            TaggedCard::new(
                "What is the capital of Italy?",
                "Rome",
                ["country", "capital"],
            ),
            TaggedCard::new(
                "Who is the 11th president of the U.S?",
                "James Polk",
                ["president"],
            ),
            TaggedCard::new(
                "Which team won the Fifa World Cup in 2022?",
                "Argentina",
                ["soccer", "teams"],
            ),
            TaggedCard::new(
                "Who is the 16th president of the U.S?",
                "Abraham Lincoln",
                ["president"],
            ),
        ]
        .into_iter()
        .collect()
    }

    /// Add a card, keeping insertion order.
    pub fn add(&mut self, card: TaggedCard) {
        let index = self.cards.len();
        for tag in card.tags() {
            let entries = self.by_tag.entry(tag.clone()).or_default();
            // a card tagged "x,x" is still listed once under "x"
            if entries.last() != Some(&index) {
                entries.push(index);
            }
        }
        self.cards.push(card);
    }

    /// Number of cards in the library.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TaggedCard> {
        self.cards.iter()
    }

    /// Cards carrying the given tag, in insertion order.
    pub fn find_by_tag(&self, tag: &str) -> impl Iterator<Item = &TaggedCard> {
        self.by_tag
            .get(tag)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|&index| &self.cards[index])
    }

    /// Cards matching a predicate, in insertion order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &TaggedCard>
    where
        F: Fn(&TaggedCard) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Distinct tags across the library, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.by_tag.keys().map(String::as_str)
    }
}

impl FromIterator<TaggedCard> for CardLibrary {
    fn from_iter<I: IntoIterator<Item = TaggedCard>>(iter: I) -> Self {
        let mut library = Self::new();
        for card in iter {
            library.add(card);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_iterate() {
        let mut library = CardLibrary::new();
        assert!(library.is_empty());

        library.add(TaggedCard::untagged("Q1", "A1"));
        library.add(TaggedCard::untagged("Q2", "A2"));

        assert_eq!(library.len(), 2);
        let fronts: Vec<_> = library.iter().map(TaggedCard::front).collect();
        assert_eq!(fronts, ["Q1", "Q2"]);
    }

    #[test]
    fn test_find_by_tag_preserves_order() {
        let mut library = CardLibrary::new();
        library.add(TaggedCard::new("Q1", "A1", ["a"]));
        library.add(TaggedCard::new("Q2", "A2", ["b"]));
        library.add(TaggedCard::new("Q3", "A3", ["a", "b"]));

        let tagged_a: Vec<_> = library.find_by_tag("a").map(TaggedCard::front).collect();
        assert_eq!(tagged_a, ["Q1", "Q3"]);

        let tagged_b: Vec<_> = library.find_by_tag("b").map(TaggedCard::front).collect();
        assert_eq!(tagged_b, ["Q2", "Q3"]);

        assert_eq!(library.find_by_tag("missing").count(), 0);
    }

    #[test]
    fn test_duplicate_tag_on_one_card_listed_once() {
        let mut library = CardLibrary::new();
        library.add(TaggedCard::new("Q", "A", ["x", "x"]));

        assert_eq!(library.find_by_tag("x").count(), 1);
    }

    #[test]
    fn test_find_with_predicate() {
        let mut library = CardLibrary::new();
        library.add(TaggedCard::untagged("short", "A"));
        library.add(TaggedCard::untagged("a much longer question", "A"));

        let long: Vec<_> = library.find(|c| c.front().len() > 10).collect();
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].front(), "a much longer question");
    }

    #[test]
    fn test_tags_distinct() {
        let mut library = CardLibrary::new();
        library.add(TaggedCard::new("Q1", "A1", ["a", "b"]));
        library.add(TaggedCard::new("Q2", "A2", ["b"]));

        let mut tags: Vec<_> = library.tags().collect();
        tags.sort_unstable();
        assert_eq!(tags, ["a", "b"]);
    }

    #[test]
    fn test_sample_library() {
        let library = CardLibrary::sample();

        assert_eq!(library.len(), 4);
        assert_eq!(library.find_by_tag("president").count(), 2);
        assert_eq!(library.find_by_tag("capital").count(), 1);
    }
}
