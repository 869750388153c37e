//! Intersection finding between two expressions

pub mod constants;
mod core;
mod point;

pub use core::find_intersections;
pub use point::Point;
