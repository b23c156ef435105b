//! Pure data structures written by the feeder.

pub mod item;
pub mod order;

pub use item::*;
pub use order::*;
