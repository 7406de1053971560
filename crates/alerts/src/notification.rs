use botica_catalog::MedicationId;
use chrono::NaiveDate;
use serde::Serialize;

/// Alert severity, in display-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Info,
}

impl Severity {
    /// Sort rank: danger first.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Danger => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }
}

/// Alert category. The id stems are stable wire vocabulary carried over
/// from the existing UI; changing them breaks list diffing downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    OutOfStock,
    LowStock,
    Expired,
    NearExpiry,
}

impl AlertKind {
    /// Stable identifier stem.
    pub fn id_stem(self) -> &'static str {
        match self {
            AlertKind::OutOfStock => "stock-0",
            AlertKind::LowStock => "stock-bajo",
            AlertKind::Expired => "vencido",
            AlertKind::NearExpiry => "por-vencer",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            AlertKind::OutOfStock | AlertKind::Expired => Severity::Danger,
            AlertKind::LowStock | AlertKind::NearExpiry => Severity::Warning,
        }
    }
}

/// Derived, ephemeral notification. Identity is deterministic:
/// `"{kind stem}-{medication id}"`, so re-derivation de-duplicates
/// naturally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub detail: Option<String>,
    /// Day of the aggregation pass that produced this notification.
    pub created_on: NaiveDate,
}

impl Notification {
    pub(crate) fn derive(
        kind: AlertKind,
        medication_id: MedicationId,
        title: String,
        detail: Option<String>,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id: format!("{}-{}", kind.id_stem(), medication_id),
            kind,
            severity: kind.severity(),
            title,
            detail,
            created_on,
        }
    }
}
