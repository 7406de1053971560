//! `botica-core` — domain foundation building blocks.
//!
//! Pure display-path and validation primitives shared by the catalog,
//! sales and alerts crates. No infrastructure concerns.

pub mod config;
pub mod dates;
pub mod error;
pub mod money;
pub mod telemetry;

pub use config::AlertConfig;
pub use error::{DomainError, DomainResult, ServiceError};
