pub mod graph;
pub mod player;
pub mod server;

pub use graph::*;
pub use player::*;
pub use server::*;
