use std::fmt::Debug;
use std::hash::Hash;

/// Marker for values that can key a search tree node.
///
/// Two states are equal iff their boards and player to move are equal, so the
/// `Hash`/`Eq` impls must ignore any derived bookkeeping a state carries.
pub trait GameState: Hash + Eq + Clone + Debug {}

impl<T> GameState for T where T: Hash + Eq + Clone + Debug {}
