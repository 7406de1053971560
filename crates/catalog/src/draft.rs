use botica_core::{DomainError, DomainResult, dates};
use serde::{Deserialize, Serialize};

use crate::medication::LaboratoryId;

/// Create/update payload for a medication. Same business fields as the
/// read model, without `id` or the denormalized laboratory name.
///
/// Dates travel as `YYYY-MM-DD` strings, mirroring the wire contract;
/// [`MedicationDraft::validate`] parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDraft {
    pub name: String,
    pub laboratory_id: LaboratoryId,
    pub manufacture_date: String,
    pub expiry_date: String,
    pub on_hand_quantity: u32,
    pub unit_price: f64,
}

impl MedicationDraft {
    /// Validate the draft before it is sent to the inventory service.
    ///
    /// The laboratory whitelist is re-checked here even though the form
    /// only offers whitelisted options; payloads can be constructed by
    /// hand.
    pub fn validate(&self, allowed_labs: &[LaboratoryId]) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !allowed_labs.contains(&self.laboratory_id) {
            return Err(DomainError::validation("laboratory is not allowed"));
        }
        let made = dates::parse_flexible(&self.manufacture_date)
            .ok_or_else(|| DomainError::validation("manufacture date is required"))?;
        let expires = dates::parse_flexible(&self.expiry_date)
            .ok_or_else(|| DomainError::validation("expiry date is required"))?;
        if made > expires {
            return Err(DomainError::validation(
                "manufacture date cannot be after expiry date",
            ));
        }
        if !self.unit_price.is_finite() || self.unit_price < 1.0 {
            return Err(DomainError::validation("unit price must be at least 1"));
        }
        Ok(())
    }
}
