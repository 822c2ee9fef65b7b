//! Player roles and per-player data storage.
//!
//! ## Role
//!
//! A match always has exactly two sides: the home team (non-dealer) and
//! the away team (dealer). The role fixes deal order and attacker bias.
//!
//! ## RoleMap
//!
//! Two-slot storage indexable by `Role`, in the spirit of a per-player map.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::Card;

/// One side of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Home team. Attacks in battles 1 and 2, kicks first in the shootout.
    NonDealer,
    /// Away team. Deals and is dealt first.
    Dealer,
}

impl Role {
    /// Both roles, non-dealer first.
    pub const BOTH: [Role; 2] = [Role::NonDealer, Role::Dealer];

    /// The opposing role.
    #[must_use]
    pub const fn other(self) -> Role {
        match self {
            Role::NonDealer => Role::Dealer,
            Role::Dealer => Role::NonDealer,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::NonDealer => 0,
            Role::Dealer => 1,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::NonDealer => f.write_str("Home Team (Non-Dealer)"),
            Role::Dealer => f.write_str("Away Team (Dealer)"),
        }
    }
}

/// Per-role data storage with O(1) access.
///
/// ```
/// use football_ccg::core::{Role, RoleMap};
///
/// let mut points: RoleMap<u32> = RoleMap::default();
/// points[Role::Dealer] += 1;
/// assert_eq!(points[Role::Dealer], 1);
/// assert_eq!(points[Role::NonDealer], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    pub non_dealer: T,
    pub dealer: T,
}

impl<T> RoleMap<T> {
    pub fn new(non_dealer: T, dealer: T) -> Self {
        Self { non_dealer, dealer }
    }

    /// Build both entries from a factory.
    pub fn from_fn(mut factory: impl FnMut(Role) -> T) -> Self {
        let non_dealer = factory(Role::NonDealer);
        let dealer = factory(Role::Dealer);
        Self { non_dealer, dealer }
    }

    #[must_use]
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::NonDealer => &self.non_dealer,
            Role::Dealer => &self.dealer,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::NonDealer => &mut self.non_dealer,
            Role::Dealer => &mut self.dealer,
        }
    }

    /// Mutable access to both sides at once, in (role, other) order.
    pub fn pair_mut(&mut self, role: Role) -> (&mut T, &mut T) {
        match role {
            Role::NonDealer => (&mut self.non_dealer, &mut self.dealer),
            Role::Dealer => (&mut self.dealer, &mut self.non_dealer),
        }
    }

    /// Iterate over (Role, &T), non-dealer first.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        [(Role::NonDealer, &self.non_dealer), (Role::Dealer, &self.dealer)].into_iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> RoleMap<U> {
        RoleMap {
            non_dealer: f(&self.non_dealer),
            dealer: f(&self.dealer),
        }
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        self.get_mut(role)
    }
}

/// Substitute pool. Three cards in a normal match, so no heap allocation.
pub type Substitutes = SmallVec<[Card; 3]>;

/// A participant: identity, dealt cards, and running points.
///
/// The lineup holds one card per position in battle order. A card belongs
/// to exactly one lineup slot or substitute pool until it is played or
/// replaced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub lineup: Vec<Card>,
    pub substitutes: Substitutes,
    pub points: u32,
}

impl Player {
    /// A player with no cards dealt yet.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            lineup: Vec::new(),
            substitutes: Substitutes::new(),
            points: 0,
        }
    }

    /// Lineup card for a 1-based battle index.
    #[must_use]
    pub fn card_at(&self, battle: usize) -> Option<Card> {
        battle.checked_sub(1).and_then(|i| self.lineup.get(i)).copied()
    }

    #[must_use]
    pub fn substitutes_remaining(&self) -> usize {
        self.substitutes.len()
    }
}
