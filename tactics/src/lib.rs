pub use assets::*;
pub use board_view::*;
pub use definition::*;
pub use errors::*;
pub use formations::*;
pub use positions::*;
pub use slot::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod assets;
mod board_view;
mod definition;
mod errors;
mod formations;
mod positions;
mod slot;
mod visualization;
