//! `botica-catalog` — medication catalog read model.
//!
//! Rows are owned and mutated by the external inventory service; this
//! crate holds read snapshots (with lenient ingestion of the backend's
//! string-or-number money and mixed date formats), create/update payload
//! validation, and page-level derived figures.

pub mod draft;
pub mod medication;
pub mod metrics;
pub mod page;

pub use draft::MedicationDraft;
pub use medication::{LaboratoryId, Medication, MedicationId, StockStatus};
pub use metrics::CatalogMetrics;
pub use page::Page;
