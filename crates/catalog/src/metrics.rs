use botica_core::AlertConfig;
use serde::Serialize;

use crate::medication::Medication;
use crate::page::Page;

/// Headline figures for the currently visible catalog page.
///
/// `total_medications` comes from the page envelope (whole collection);
/// the stock figures only cover the visible rows, which is what the
/// dashboard cards show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetrics {
    pub total_medications: u64,
    pub units_on_hand: u64,
    /// Rows with stock strictly below the low-stock threshold
    /// (zero-stock rows included).
    pub low_stock_count: usize,
}

impl CatalogMetrics {
    pub fn compute(page: &Page<Medication>, config: &AlertConfig) -> Self {
        Self {
            total_medications: page.total_elements,
            units_on_hand: page
                .content
                .iter()
                .map(|m| u64::from(m.on_hand_quantity))
                .sum(),
            low_stock_count: page
                .content
                .iter()
                .filter(|m| m.on_hand_quantity < config.low_stock_threshold)
                .count(),
        }
    }
}
