pub mod cell;
pub mod normalize;
