//! Deck backed by an explicit card list.
//!
//! Where the squares deck generates its items, this variant drills a
//! caller-supplied sequence of `TaggedCard`s in order.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Deck, DeckState};
use crate::cards::TaggedCard;

/// Deck over an ordered sequence of tagged cards.
///
/// ## Example
///
/// ```
/// use flashdeck::cards::CardLibrary;
/// use flashdeck::deck::{CardListDeck, Deck};
///
/// let library = CardLibrary::sample();
/// let deck = CardListDeck::new(library.find_by_tag("president").cloned());
///
/// assert_eq!(deck.size(), 2);
/// assert_eq!(deck.text().as_deref(), Some("Who is the 11th president of the U.S?"));
/// assert_eq!(deck.flip().text().as_deref(), Some("James Polk"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardListDeck {
    initial_len: usize,
    showing_front: bool,
    remaining: Vector<TaggedCard>,
}

impl CardListDeck {
    /// Deck over the given cards, drilled in order, starting on the
    /// question side of the first card.
    ///
    /// An empty sequence builds an already-exhausted deck.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = TaggedCard>) -> Self {
        let remaining: Vector<TaggedCard> = cards.into_iter().collect();
        Self {
            initial_len: remaining.len(),
            showing_front: true,
            remaining,
        }
    }

    /// Start on the answer side instead of the question side.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.showing_front = false;
        self
    }

    /// The card currently at the front, if any.
    #[must_use]
    pub fn current(&self) -> Option<&TaggedCard> {
        self.remaining.front()
    }

    /// Cards still pending, front of the queue first.
    pub fn pending(&self) -> impl Iterator<Item = &TaggedCard> {
        self.remaining.iter()
    }

    /// Number of cards still pending, counting requeued ones.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.remaining.len()
    }
}

impl Deck for CardListDeck {
    fn state(&self) -> DeckState {
        match self.remaining.front() {
            None => DeckState::Exhausted,
            Some(_) if self.showing_front => DeckState::Question,
            Some(_) => DeckState::Answer,
        }
    }

    fn text(&self) -> Option<String> {
        let card = self.remaining.front()?;
        if self.showing_front {
            Some(card.front().to_string())
        } else {
            Some(card.back().to_string())
        }
    }

    /// The number of cards the deck was built with. Requeued cards
    /// never change it; `pending_len` reports the live count.
    fn size(&self) -> usize {
        self.initial_len
    }

    fn flip(&self) -> Self {
        if self.state() != DeckState::Question {
            return self.clone();
        }
        let mut flipped = self.clone();
        flipped.showing_front = false;
        flipped
    }

    fn next(&self, correct: bool) -> Self {
        if self.state() != DeckState::Answer {
            return self.clone();
        }
        let mut remaining = self.remaining.clone();
        let front = remaining
            .pop_front()
            .expect("answer state implies a pending card");
        if !correct {
            remaining.push_back(front);
        }
        Self {
            initial_len: self.initial_len,
            showing_front: true,
            remaining,
        }
    }
}
