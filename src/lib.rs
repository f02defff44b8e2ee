//! # flashdeck
//!
//! Immutable deck state machines for flashcard drills.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `flip` and `next` return new deck values.
//!    Nothing is mutated in place, so earlier states stay valid and
//!    concurrent readers need no locking.
//!
//! 2. **Structural State**: whether a deck is showing a question, an
//!    answer, or is exhausted is derived from its pending items and
//!    showing side on every call, never cached.
//!
//! 3. **Graceful No-Ops**: transitions that do not apply to the current
//!    state return the deck unchanged instead of failing. No operation
//!    in the crate can error.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: pending items live in `im`
//!   vectors, so every transition is an O(1) structural copy.
//!
//! - **One Contract, Two Decks**: the `Deck` trait is the whole
//!   interface drivers see. `SquaresDeck` generates its items
//!   procedurally; `CardListDeck` drills a supplied card list.
//!
//! ## Modules
//!
//! - `cards`: tagged cards, their line format, and the card library
//! - `deck`: the `Deck` contract, deck states, and the two variants

pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::cards::{CardLibrary, TaggedCard, FIELD_SEPARATOR, TAG_SEPARATOR};

pub use crate::deck::{CardListDeck, Deck, DeckState, SquaresDeck};
