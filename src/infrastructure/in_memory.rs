use crate::domain::ports::CheckoutObserver;
use crate::domain::summary::{OrderConfirmation, OrderSummary};
use std::cell::RefCell;
use std::rc::Rc;

/// Collects order confirmations raised by a session.
///
/// Clones share the same underlying list, so one handle can be subscribed to
/// the session while another reads the confirmations back. Nothing outlives
/// the process.
#[derive(Default, Clone)]
pub struct ConfirmationLog {
    confirmations: Rc<RefCell<Vec<OrderConfirmation>>>,
}

impl ConfirmationLog {
    /// Creates a new, empty confirmation log.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.confirmations.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.confirmations.borrow().is_empty()
    }

    /// Takes every confirmation recorded so far, leaving the log empty.
    pub fn drain(&self) -> Vec<OrderConfirmation> {
        self.confirmations.borrow_mut().drain(..).collect()
    }
}

impl CheckoutObserver for ConfirmationLog {
    fn on_submit(&mut self, confirmation: &OrderConfirmation) {
        self.confirmations.borrow_mut().push(confirmation.clone());
    }
}

/// Keeps only the most recent summary pushed by a session.
#[derive(Default, Clone)]
pub struct LatestSummary {
    summary: Rc<RefCell<Option<OrderSummary>>>,
}

impl LatestSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<OrderSummary> {
        self.summary.borrow().clone()
    }
}

impl CheckoutObserver for LatestSummary {
    fn on_change(&mut self, summary: &OrderSummary) {
        *self.summary.borrow_mut() = Some(summary.clone());
    }

    fn on_submit(&mut self, _confirmation: &OrderConfirmation) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::checkout::CheckoutSession;
    use crate::config::CheckoutConfig;
    use crate::domain::catalog::Catalog;
    use crate::domain::customer::CustomerField;

    fn ready_session() -> CheckoutSession {
        let mut session = CheckoutSession::new(Catalog::standard(), CheckoutConfig::default());
        session.set_quantity("3", 1).unwrap();
        session.set_customer_field(CustomerField::Name, "Анна").unwrap();
        session
            .set_customer_field(CustomerField::Email, "anna@example.com")
            .unwrap();
        session
            .set_customer_field(CustomerField::Phone, "89161234567")
            .unwrap();
        session.set_payment_method("cash").unwrap();
        session
    }

    #[test]
    fn test_confirmation_log_collects_submits() {
        let log = ConfirmationLog::new();
        let mut session = ready_session();
        session.subscribe(log.clone());

        session.submit();
        assert_eq!(log.len(), 1);

        // Nothing to submit after the reset
        session.submit();
        assert_eq!(log.len(), 1);

        let confirmations = log.drain();
        assert_eq!(confirmations[0].customer.name, "Анна");
        assert!(log.is_empty());
    }

    #[test]
    fn test_latest_summary_tracks_changes() {
        let latest = LatestSummary::new();
        let mut session = CheckoutSession::new(Catalog::standard(), CheckoutConfig::default());
        session.subscribe(latest.clone());
        assert!(latest.get().is_none());

        session.set_quantity("2", 3).unwrap();
        let summary = latest.get().unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].quantity, 3);

        session.set_quantity("2", 0).unwrap();
        assert!(latest.get().unwrap().is_empty());
    }
}
