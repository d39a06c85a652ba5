pub mod collision;
pub mod input;
pub mod movement;
pub mod pockets;
pub mod turn;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use pockets::*;
pub use turn::*;
