//! Core Kernel - Foundational types and utilities for the loan simulator
//!
//! This crate provides the fundamental building blocks used across the
//! simulator domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Localized display labels for form rendering

pub mod money;
pub mod identifiers;
pub mod localization;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::FormId;
pub use localization::LabelCatalog;
pub use error::CoreError;
