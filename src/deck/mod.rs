//! Deck state machines.
//!
//! A deck walks an ordered set of question/answer items through a study
//! drill. At any moment it is in exactly one of three states, derived
//! from its pending items and which side is showing, never stored on
//! its own:
//!
//! - `Question`: the front of the current item is showing
//! - `Answer`: the back of the current item is showing
//! - `Exhausted`: no items remain; the drill is over
//!
//! ## Transitions
//!
//! - `flip` moves `Question` to `Answer`.
//! - `next(true)` discards the current item and shows the next
//!   question, or exhausts the deck on the last item.
//! - `next(false)` requeues the current item at the back of the deck
//!   and shows the next question.
//! - `Exhausted` is terminal; nothing leaves it.
//!
//! Calls that do not apply to the current state return the deck
//! unchanged rather than failing.
//!
//! Every transition returns a new deck value. Pending items live in
//! persistent vectors, so the copy is O(1) and callers can retain
//! earlier deck states (history, undo) for free.

pub mod list;
pub mod squares;

pub use list::CardListDeck;
pub use squares::SquaresDeck;

use serde::{Deserialize, Serialize};

/// Study state of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckState {
    /// The current item is showing its question side.
    Question,
    /// The current item is showing its answer side.
    Answer,
    /// No items remain.
    Exhausted,
}

impl std::fmt::Display for DeckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeckState::Question => "question",
            DeckState::Answer => "answer",
            DeckState::Exhausted => "exhausted",
        };
        write!(f, "{name}")
    }
}

/// Common contract for deck variants.
///
/// Drivers (a CLI, a UI loop) hold a deck, show `text()`, and advance
/// it with `flip`/`next`; everything they need goes through this trait.
///
/// ## Implementation Notes
///
/// - `state`: derive from pending items + showing side, never store it
/// - `flip`/`next`: return a new value; out-of-state calls return a
///   value equal to the receiver
/// - `size`: the cardinality fixed at construction, not the pending
///   count — requeued items never change it
pub trait Deck: Sized {
    /// Current state of the deck.
    fn state(&self) -> DeckState;

    /// Visible text for the current item.
    ///
    /// The question text in `Question` state, the answer text in
    /// `Answer` state, `None` once exhausted.
    fn text(&self) -> Option<String>;

    /// Number of question/answer pairs the deck was built with.
    ///
    /// Reports the original cardinality even after items are discarded
    /// or requeued.
    fn size(&self) -> usize;

    /// Reveal the answer side of the current item.
    ///
    /// No-op unless the deck is showing a question.
    #[must_use]
    fn flip(&self) -> Self;

    /// Advance past the current item once its answer is showing.
    ///
    /// `correct` discards the item; otherwise it is requeued at the
    /// back for another pass. Either way the next pending item shows
    /// its question side. No-op unless the deck is showing an answer.
    #[must_use]
    fn next(&self, correct: bool) -> Self;

    /// Whether the drill is over.
    fn is_exhausted(&self) -> bool {
        self.state() == DeckState::Exhausted
    }
}
