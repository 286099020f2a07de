pub mod edge;
pub mod error;
pub mod mcts;
pub mod node;
pub mod node_arena;
pub mod observer;
pub mod options;
pub mod prune;
pub mod tree;
pub mod uct;

#[cfg(test)]
mod counting_game;

pub use crate::mcts::*;
pub use edge::*;
pub use error::*;
pub use node::*;
pub use node_arena::*;
pub use observer::*;
pub use options::*;
pub use prune::*;
pub use tree::*;
pub use uct::*;
