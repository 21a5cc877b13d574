pub mod error;
pub mod input;
pub mod json;
pub mod matrix;
pub mod objective;
pub mod solver;
mod utils;
pub mod vertex;
pub mod weight;

#[cfg(test)]
pub(crate) mod test_utils;
