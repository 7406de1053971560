//! Alerting thresholds.

use serde::{Deserialize, Serialize};

use crate::dates::DEFAULT_NEAR_EXPIRY_HORIZON_DAYS;

/// Thresholds driving stock and expiry alerts. Plain constants,
/// overridable by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Stock strictly below this count is flagged as low. Zero stock is
    /// its own, more severe category.
    pub low_stock_threshold: u32,

    /// Days ahead (inclusive) within which an expiry date counts as
    /// "expiring soon".
    pub near_expiry_horizon_days: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            near_expiry_horizon_days: DEFAULT_NEAR_EXPIRY_HORIZON_DAYS,
        }
    }
}
