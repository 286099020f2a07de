pub mod game_record;
pub mod options;
pub mod play_self_one;
pub mod self_play;
pub mod self_play_persistance;

pub use game_record::*;
pub use options::*;
pub use play_self_one::*;
pub use self_play::*;
pub use self_play_persistance::*;
