//! `botica-sales` — sale quotation and checkout workflow.
//!
//! The quote engine binds one catalog row at a time, keeps the requested
//! quantity clamped into sellable range, and reconciles locally computed
//! totals with authoritative quotes from the pricing collaborator. The
//! sale dialog drives it through a small state machine with guarded
//! submission. Collaborators (listing, pricing, persistence) are traits;
//! this crate only constructs the request half of a sale.

pub mod quote;
pub mod sale;
pub mod service;
pub mod workflow;

pub use quote::{Quote, QuoteEngine, QuoteOutcome};
pub use sale::{Sale, SaleLine, SalesRangeQuery, SalesSummary, monthly_revenue};
pub use service::{CatalogService, ListQuery, PricingService, SaleRequest, SaleService};
pub use workflow::{ConfirmOutcome, DialogState, SaleDialog};
