use botica_core::{AlertConfig, dates, money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Medication identifier (backend-assigned integer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedicationId(pub i64);

impl core::fmt::Display for MedicationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Manufacturing laboratory identifier (backend-assigned integer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaboratoryId(pub i64);

impl core::fmt::Display for LaboratoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Catalog row as served by the inventory backend.
///
/// Monetary and date fields are normalized once, at deserialization: the
/// transport sometimes delivers amounts as locale-formatted strings and
/// dates as `DD/MM/YYYY`. After ingestion both are canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: MedicationId,
    pub name: String,
    pub laboratory_id: LaboratoryId,
    /// Display name of the laboratory; may be absent in older payloads.
    #[serde(default)]
    pub laboratory_name: String,
    #[serde(default, deserialize_with = "dates::deserialize_flexible")]
    pub manufacture_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates::deserialize_flexible")]
    pub expiry_date: Option<NaiveDate>,
    pub on_hand_quantity: u32,
    #[serde(default, deserialize_with = "money::deserialize_lenient")]
    pub unit_price: f64,
}

impl Medication {
    /// Laboratory label for tables: the display name when present,
    /// the raw id otherwise.
    pub fn laboratory_label(&self) -> String {
        if self.laboratory_name.is_empty() {
            self.laboratory_id.to_string()
        } else {
            self.laboratory_name.clone()
        }
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        dates::is_expired(self.expiry_date, today)
    }

    pub fn is_near_expiry(&self, today: NaiveDate, horizon_days: u32) -> bool {
        dates::is_near_expiry(self.expiry_date, today, horizon_days)
    }

    pub fn stock_status(&self, config: &AlertConfig) -> StockStatus {
        StockStatus::classify(self.on_hand_quantity, config.low_stock_threshold)
    }
}

/// Stock badge shown next to each catalog row. Wire values match the
/// badge vocabulary the UI already renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "agotado")]
    OutOfStock,
    #[serde(rename = "bajo")]
    Low,
    #[serde(rename = "ok")]
    Ok,
}

impl StockStatus {
    /// Classify an on-hand count against the low-stock threshold.
    pub fn classify(on_hand: u32, low_stock_threshold: u32) -> Self {
        if on_hand == 0 {
            Self::OutOfStock
        } else if on_hand < low_stock_threshold {
            Self::Low
        } else {
            Self::Ok
        }
    }
}
