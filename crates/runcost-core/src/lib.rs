//! **runcost-core**: core types for run-charged grid path search.
//!
//! This crate provides the foundational types shared by the search engine
//! and the loader: geometry primitives, the ordered table of the eight
//! Moore-neighbourhood directions, and the immutable cost grid.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Point};
pub use grid::{Cost, CostGrid, GridError};
