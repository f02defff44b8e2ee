//! Card system: tagged cards and the library that holds them.
//!
//! ## Key Types
//!
//! - `TaggedCard`: immutable question/answer pair with ordered tags
//! - `CardLibrary`: insertion-ordered card collection with tag lookup
//!
//! Cards serialize to a single pipe-separated line (`front|back|tags`);
//! see `TaggedCard::file_format`. Decks consume cards by value and are
//! defined in the `deck` module; the two sides only meet through
//! iterators of `TaggedCard`.

pub mod card;
pub mod library;

pub use card::{TaggedCard, FIELD_SEPARATOR, TAG_SEPARATOR};
pub use library::CardLibrary;
