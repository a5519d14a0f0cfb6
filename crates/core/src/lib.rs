//! `packforge-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the service and package
//! crates (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod tariff;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use tariff::Tariff;
pub use value_object::ValueObject;
