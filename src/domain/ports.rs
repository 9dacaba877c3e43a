use super::summary::{OrderConfirmation, OrderSummary};

/// Receives every state change of a checkout session.
///
/// The session pushes a freshly derived [`OrderSummary`] after each mutation,
/// so observers never hold stale readiness or totals.
pub trait CheckoutObserver {
    fn on_change(&mut self, _summary: &OrderSummary) {}
    fn on_submit(&mut self, confirmation: &OrderConfirmation);
}

pub type CheckoutObserverBox = Box<dyn CheckoutObserver>;
