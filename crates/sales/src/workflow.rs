//! Sale dialog workflow.
//!
//! One dialog instance per sale attempt, each owning its quote engine; no
//! state is shared across instances. All failures return to an
//! interactive state — there is no terminal failure.

use botica_catalog::Medication;
use botica_core::ServiceError;

use crate::quote::{QuoteEngine, QuoteOutcome};
use crate::sale::Sale;
use crate::service::{PricingService, SaleRequest, SaleService};

/// Dialog lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    /// Interactive: quantity changes re-quote, confirm is armed.
    Open,
    /// One submission in flight; further confirms are blocked.
    Submitting,
}

/// Outcome of a confirm attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// Sale persisted and the dialog closed. The caller is expected to
    /// reload the catalog listing and any revenue aggregate.
    Completed(Sale),
    /// Persistence failed; the dialog stays open for retry or cancel.
    Failed(ServiceError),
    /// A guard suppressed the submission; no request was emitted. The
    /// standing validation state on the quantity control is the signal.
    Blocked,
}

/// One sale dialog instance.
#[derive(Debug, Default)]
pub struct SaleDialog {
    engine: QuoteEngine,
    state: DialogState,
}

impl Default for DialogState {
    fn default() -> Self {
        Self::Closed
    }
}

impl SaleDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    pub fn is_open(&self) -> bool {
        self.state != DialogState::Closed
    }

    /// Open the dialog for a catalog row: bind it, reset the quantity to
    /// 1 and issue the initial quote. Quote failure degrades to the local
    /// estimate and does not block opening.
    pub fn open(&mut self, item: Medication, pricing: &dyn PricingService) -> QuoteOutcome {
        self.engine.select(item);
        self.engine.set_quantity(1);
        self.state = DialogState::Open;
        self.engine.request_quote(pricing)
    }

    /// Change the requested quantity and re-quote. Ignored unless the
    /// dialog is interactive.
    pub fn set_quantity(&mut self, quantity: u32, pricing: &dyn PricingService) -> QuoteOutcome {
        if self.state != DialogState::Open {
            return QuoteOutcome::Suppressed;
        }
        self.engine.set_quantity(quantity);
        self.engine.request_quote(pricing)
    }

    /// Step helpers mirroring the dialog's +/- controls.
    pub fn increment(&mut self, pricing: &dyn PricingService) -> QuoteOutcome {
        self.set_quantity(self.engine.quantity().saturating_add(1), pricing)
    }

    pub fn decrement(&mut self, pricing: &dyn PricingService) -> QuoteOutcome {
        self.set_quantity(self.engine.quantity().saturating_sub(1), pricing)
    }

    /// Submit the sale if every guard passes: dialog interactive, no
    /// submission already in flight, item bound with stock, quantity
    /// valid. Guard rejections are silent and safe to call speculatively.
    pub fn confirm(&mut self, sales: &dyn SaleService) -> ConfirmOutcome {
        if self.state != DialogState::Open || !self.engine.can_confirm() {
            tracing::debug!(state = ?self.state, "sale confirmation suppressed by guard");
            return ConfirmOutcome::Blocked;
        }
        let Some(item) = self.engine.selected() else {
            return ConfirmOutcome::Blocked;
        };
        let request = SaleRequest {
            medication_id: item.id,
            quantity: self.engine.quantity(),
        };

        self.state = DialogState::Submitting;
        match sales.create(&request) {
            Ok(sale) => {
                self.state = DialogState::Closed;
                self.engine.clear();
                ConfirmOutcome::Completed(sale)
            }
            Err(err) => {
                tracing::warn!(medication = %request.medication_id, %err, "sale submission failed");
                self.state = DialogState::Open;
                ConfirmOutcome::Failed(err)
            }
        }
    }

    /// Close without submitting.
    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
        self.engine.clear();
    }
}
