//! `botica-alerts` — inventory alert aggregation.
//!
//! Scans the visible catalog rows and derives stock/expiry notifications.
//! Notifications are values: recomputed on demand, never persisted, with
//! deterministic identifiers so repeated passes over an unchanged catalog
//! are byte-for-byte identical (stable list diffing in the UI depends on
//! this).

pub mod aggregator;
pub mod notification;

pub use aggregator::{build_alerts, unread_count};
pub use notification::{AlertKind, Notification, Severity};
