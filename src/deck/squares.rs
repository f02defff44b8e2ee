//! Perfect-squares drill deck.
//!
//! Generates its question/answer pairs procedurally instead of storing
//! cards: the pending item `n` asks `"n^2 = ?"` and answers with the
//! decimal value of `n*n`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Deck, DeckState};

/// Number of roots a squares deck drills by default.
pub const DEFAULT_COUNT: u32 = 10;

/// Deck that quizzes the squares of `1..=count`.
///
/// ## Example
///
/// ```
/// use flashdeck::deck::{Deck, DeckState, SquaresDeck};
///
/// let deck = SquaresDeck::new(2);
/// assert_eq!(deck.state(), DeckState::Question);
/// assert_eq!(deck.text().as_deref(), Some("1^2 = ?"));
///
/// let deck = deck.flip();
/// assert_eq!(deck.state(), DeckState::Answer);
/// assert_eq!(deck.text().as_deref(), Some("1"));
///
/// let deck = deck.next(true);
/// assert_eq!(deck.text().as_deref(), Some("2^2 = ?"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquaresDeck {
    count: u32,
    showing_front: bool,
    remaining: Vector<u32>,
}

impl SquaresDeck {
    /// Deck over the squares of `1..=count`, starting on the question
    /// side of the first root.
    ///
    /// `count` of zero builds an already-exhausted deck.
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self {
            count,
            showing_front: true,
            remaining: (1..=count).collect(),
        }
    }

    /// Start on the answer side instead of the question side.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.showing_front = false;
        self
    }

    /// Roots still pending, front of the queue first.
    pub fn pending(&self) -> impl Iterator<Item = u32> + '_ {
        self.remaining.iter().copied()
    }

    /// Number of roots still pending, counting requeued ones.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.remaining.len()
    }
}

impl Default for SquaresDeck {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT)
    }
}

impl Deck for SquaresDeck {
    fn state(&self) -> DeckState {
        match self.remaining.front() {
            None => DeckState::Exhausted,
            Some(_) if self.showing_front => DeckState::Question,
            Some(_) => DeckState::Answer,
        }
    }

    fn text(&self) -> Option<String> {
        let root = *self.remaining.front()?;
        if self.showing_front {
            Some(format!("{root}^2 = ?"))
        } else {
            // widen before squaring so large roots cannot overflow
            Some((u64::from(root) * u64::from(root)).to_string())
        }
    }

    fn size(&self) -> usize {
        self.count as usize
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
            .expect("answer state implies a pending item");
        if !correct {
            remaining.push_back(front);
        }
        Self {
            count: self.count,
            showing_front: true,
            remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deck_counts_up_from_one() {
        let deck = SquaresDeck::new(3);

        assert_eq!(deck.state(), DeckState::Question);
        assert_eq!(deck.size(), 3);
        assert_eq!(deck.pending().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_default_count() {
        let deck = SquaresDeck::default();

        assert_eq!(deck.size(), DEFAULT_COUNT as usize);
        assert_eq!(deck.pending_len(), 10);
    }

    #[test]
    fn test_question_and_answer_text() {
        let deck = SquaresDeck::new(5);
        assert_eq!(deck.text().as_deref(), Some("1^2 = ?"));

        let deck = deck.flip();
        assert_eq!(deck.text().as_deref(), Some("1"));

        let deck = deck.next(true).flip();
        assert_eq!(deck.text().as_deref(), Some("4"));
    }

    #[test]
    fn test_zero_count_is_exhausted() {
        let deck = SquaresDeck::new(0);

        assert_eq!(deck.state(), DeckState::Exhausted);
        assert!(deck.is_exhausted());
        assert_eq!(deck.text(), None);
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn test_flipped_starts_on_answer() {
        let deck = SquaresDeck::new(2).flipped();

        assert_eq!(deck.state(), DeckState::Answer);
        assert_eq!(deck.text().as_deref(), Some("1"));
    }

    #[test]
    fn test_transitions_leave_receiver_untouched() {
        let deck = SquaresDeck::new(2);
        let _ = deck.flip().next(false);

        // the original value is still on its first question
        assert_eq!(deck.state(), DeckState::Question);
        assert_eq!(deck.pending().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_large_root_answer_does_not_overflow() {
        // discard up to root 70_000, whose square exceeds u32
        let mut deck = SquaresDeck::new(70_000);
        for _ in 0..69_999 {
            deck = deck.flip().next(true);
        }

        assert_eq!(deck.text().as_deref(), Some("70000^2 = ?"));
        assert_eq!(deck.flip().text().as_deref(), Some("4900000000"));
    }

    #[test]
    fn test_serialization() {
        let deck = SquaresDeck::new(3).flip().next(false);

        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: SquaresDeck = serde_json::from_str(&json).unwrap();

        assert_eq!(deck, deserialized);
    }
}
