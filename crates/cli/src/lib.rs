//! Demonstration driver: builds the sample packages, clones one through the catalog
//! and shows that the clone keeps its prices when the source changes.

pub mod config;
pub mod demo;
pub mod render;
