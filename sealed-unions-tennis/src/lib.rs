//! Tennis game scoring expressed as compositions of sealed unions.

mod error;
pub mod graph;
mod parse;
mod player;
mod player_points;
mod score;
mod scoring;

pub use error::*;
pub use player::*;
pub use player_points::*;
pub use score::*;
pub use scoring::*;
