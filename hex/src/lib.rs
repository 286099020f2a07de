pub mod action;
pub mod connectivity;
pub mod engine;
pub mod game_state;
pub mod options;
pub mod symmetries;

mod board;

pub use action::*;
pub use connectivity::*;
pub use engine::*;
pub use game_state::*;
pub use options::*;
pub use symmetries::*;
