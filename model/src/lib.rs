pub mod policy;
pub mod replay_buffer;
pub mod symmetries;
pub mod training_case;
pub mod uniform;

pub use policy::*;
pub use replay_buffer::*;
pub use symmetries::*;
pub use training_case::*;
pub use uniform::*;
