use crate::domain::ports::CheckoutObserver;
use crate::domain::summary::{OrderConfirmation, OrderSummary};
use tracing::{debug, info};

/// Reports session activity through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CheckoutObserver for TracingObserver {
    fn on_change(&mut self, summary: &OrderSummary) {
        debug!(
            lines = summary.lines.len(),
            subtotal = %summary.totals.subtotal,
            shipping = %summary.totals.shipping_fee,
            total = %summary.totals.total,
            field_errors = summary.field_errors.len(),
            ready = summary.submit_ready,
            "order summary updated"
        );
    }

    fn on_submit(&mut self, confirmation: &OrderConfirmation) {
        info!(
            order = confirmation.order,
            customer = %confirmation.customer.name,
            "{}",
            confirmation.message
        );
    }
}
