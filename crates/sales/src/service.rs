//! Boundary traits for the external collaborators.
//!
//! All durable state and business-rule enforcement (true stock decrement,
//! price authority, persistence) lives behind these traits. A call either
//! resolves (`Ok`) or rejects (`Err`); nothing here retries or times out.

use botica_catalog::{Medication, MedicationDraft, MedicationId, Page};
use botica_core::ServiceError;
use serde::{Deserialize, Serialize};

use crate::quote::Quote;
use crate::sale::{Sale, SalesRangeQuery};

/// Listing query: optional name filter plus 0-based paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub name: String,
    pub page: u32,
    pub size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            name: String::new(),
            page: 0,
            size: 10,
        }
    }
}

impl ListQuery {
    /// Trimmed name filter; `None` when blank so it is omitted from the
    /// request.
    pub fn name_filter(&self) -> Option<&str> {
        let q = self.name.trim();
        (!q.is_empty()).then_some(q)
    }
}

/// Catalog listing collaborator. Rows are consumed read-only; mutations
/// go through the CRUD calls followed by a full reload, never local
/// patching.
pub trait CatalogService: Send + Sync {
    fn list(&self, query: &ListQuery) -> Result<Page<Medication>, ServiceError>;

    fn get(&self, id: MedicationId) -> Result<Medication, ServiceError>;

    fn create(&self, draft: &MedicationDraft) -> Result<Medication, ServiceError>;

    fn update(&self, id: MedicationId, draft: &MedicationDraft)
    -> Result<Medication, ServiceError>;

    fn delete(&self, id: MedicationId) -> Result<(), ServiceError>;
}

/// Pricing collaborator: authoritative quotes for a possible sale.
/// Quoting never mutates stock.
pub trait PricingService: Send + Sync {
    fn quote(&self, medication_id: MedicationId, quantity: u32) -> Result<Quote, ServiceError>;
}

/// The request half of a sale; the response is owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    pub medication_id: MedicationId,
    /// Units to sell, >= 1.
    pub quantity: u32,
}

/// Sale persistence collaborator.
pub trait SaleService: Send + Sync {
    fn create(&self, request: &SaleRequest) -> Result<Sale, ServiceError>;

    /// Sales whose timestamp falls within an inclusive day range.
    fn list_range(&self, query: &SalesRangeQuery) -> Result<Vec<Sale>, ServiceError>;
}
