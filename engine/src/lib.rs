pub mod engine;
pub mod error;
pub mod game_state;
pub mod players;

pub use crate::engine::*;
pub use crate::error::*;
pub use crate::game_state::*;
pub use crate::players::*;
