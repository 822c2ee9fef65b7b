//! Card system: ranks, suits, cards, and the shared deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable rank + suit value object
//! - `Rank`: Determines the card's value (2..=14)
//! - `Deck`: Shuffled, pop-from-the-end card pile shared by the whole match

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, STANDARD_DECK_SIZE};
