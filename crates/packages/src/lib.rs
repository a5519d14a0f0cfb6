//! Service packages and the package catalog.
//!
//! A package bundles at most one service per variant and can be cloned into an
//! independent copy under a new name. The catalog keeps packages in insertion order and
//! hands out clones of them by name.

pub mod catalog;
pub mod package;
pub mod statement;

pub use catalog::PackageCatalog;
pub use package::{CLONE_SUFFIX, ServicePackage};
pub use statement::{PriceStatement, StatementLine};
