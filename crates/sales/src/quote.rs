//! Sale quotation: proactive quantity clamping and display totals.

use botica_catalog::{Medication, MedicationId};
use botica_core::money;
use serde::{Deserialize, Serialize};

use crate::service::PricingService;

/// Quote for a possible sale.
///
/// Advisory when computed locally (the client does not own inventory
/// truth), authoritative when returned by the pricing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub medication_id: MedicationId,
    #[serde(default)]
    pub medication_name: String,
    pub requested_quantity: u32,
    /// Stock snapshot at quote time.
    pub available_stock: u32,
    #[serde(default, deserialize_with = "money::deserialize_lenient")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "money::deserialize_lenient")]
    pub total: f64,
    /// Whether the requested quantity can be fulfilled.
    pub feasible: bool,
    /// True when this quote was computed locally instead of confirmed by
    /// the pricing collaborator.
    #[serde(default)]
    pub local_estimate: bool,
}

/// Result of one quote request pass.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    /// The pricing collaborator confirmed a quote.
    Confirmed(Quote),
    /// The collaborator failed; a local estimate is standing in.
    /// Non-blocking advisory, not an error.
    LocalFallback(Quote),
    /// A guard suppressed the request (no item bound, or the quantity is
    /// transiently over stock); any standing validation error remains.
    Suppressed,
}

/// Per-dialog quotation state.
///
/// The bound quantity is clamped proactively on every mutation, so the
/// dialog can never hold an uncommittable quantity: `select` clamps
/// synchronously, closing even the window between binding an item and the
/// first explicit `set_quantity`.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    selected: Option<Medication>,
    quantity: u32,
    max_quantity: u32,
    quote: Option<Quote>,
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteEngine {
    pub fn new() -> Self {
        Self {
            selected: None,
            quantity: 1,
            max_quantity: 0,
            quote: None,
        }
    }

    pub fn selected(&self) -> Option<&Medication> {
        self.selected.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Upper sellable bound: the bound item's on-hand stock, 0 with no
    /// item. Zero means every confirm is blocked.
    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// Last stored quote, confirmed or local.
    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// Bind a catalog row. Recomputes the quantity bound and clamps the
    /// current quantity into `[1, max]` immediately; with zero stock the
    /// quantity is left as-is and the guards keep the dialog blocked.
    pub fn select(&mut self, item: Medication) {
        self.max_quantity = item.on_hand_quantity;
        self.selected = Some(item);
        self.quote = None;
        if self.max_quantity > 0 {
            self.quantity = self.quantity.clamp(1, self.max_quantity);
        }
    }

    /// Unbind the current row, returning the engine to its idle state.
    pub fn clear(&mut self) {
        self.selected = None;
        self.max_quantity = 0;
        self.quote = None;
    }

    /// Clamp and store a requested quantity; returns the bound value.
    /// With `max_quantity == 0` only the floor of 1 is enforced (the
    /// confirm guards keep such a dialog blocked anyway).
    pub fn set_quantity(&mut self, requested: u32) -> u32 {
        let floored = requested.max(1);
        self.quantity = if self.max_quantity > 0 {
            floored.min(self.max_quantity)
        } else {
            floored
        };
        self.quantity
    }

    /// Whether the bound quantity exceeds available stock. Only possible
    /// transiently, before a clamp lands.
    pub fn is_over_stock(&self) -> bool {
        self.max_quantity > 0 && self.quantity > self.max_quantity
    }

    /// Standing validation message for the quantity control, if any.
    /// Guards rely on this state instead of raising errors.
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.selected.is_some() && self.max_quantity == 0 {
            Some("out of stock")
        } else if self.is_over_stock() {
            Some("exceeds available stock")
        } else {
            None
        }
    }

    /// Ask the pricing collaborator for an authoritative quote.
    ///
    /// Suppressed with no item bound or while over stock — no request is
    /// emitted and any previously displayed feasibility error stands.
    /// Collaborator failure degrades silently to a local estimate.
    pub fn request_quote(&mut self, pricing: &dyn PricingService) -> QuoteOutcome {
        let Some(item) = self.selected.clone() else {
            return QuoteOutcome::Suppressed;
        };
        if self.is_over_stock() {
            return QuoteOutcome::Suppressed;
        }

        match pricing.quote(item.id, self.quantity) {
            Ok(quote) => {
                self.quote = Some(quote.clone());
                QuoteOutcome::Confirmed(quote)
            }
            Err(err) => {
                tracing::warn!(
                    medication = %item.id,
                    quantity = self.quantity,
                    %err,
                    "pricing service failed, falling back to local estimate"
                );
                let quote = self.local_quote(&item);
                self.quote = Some(quote.clone());
                QuoteOutcome::LocalFallback(quote)
            }
        }
    }

    /// Locally computed total: `quantity * unit price`, normalized.
    pub fn local_total(&self) -> f64 {
        let unit = self
            .selected
            .as_ref()
            .map_or(0.0, |m| money::normalize_number(m.unit_price));
        f64::from(self.quantity) * unit
    }

    /// Total to display: the stored quote's when it is fresh for the
    /// current quantity, the local estimate otherwise. A stale quote
    /// (quantity changed since the response) is never shown.
    pub fn display_total(&self) -> f64 {
        match &self.quote {
            Some(q) if q.requested_quantity == self.quantity => money::normalize_number(q.total),
            _ => self.local_total(),
        }
    }

    /// Whether a sale could be confirmed right now, submission flag
    /// aside: an item is bound, it has stock, and the quantity control
    /// carries no validation error.
    pub fn can_confirm(&self) -> bool {
        self.selected.is_some() && self.max_quantity > 0 && self.validation_error().is_none()
    }

    fn local_quote(&self, item: &Medication) -> Quote {
        Quote {
            medication_id: item.id,
            medication_name: item.name.clone(),
            requested_quantity: self.quantity,
            available_stock: self.max_quantity,
            unit_price: item.unit_price,
            total: self.local_total(),
            feasible: self.quantity <= self.max_quantity && self.max_quantity > 0,
            local_estimate: true,
        }
    }
}
