//! Space-delimited splitting and joining.

mod join;
mod split;

pub use join::join;
pub use split::split;
