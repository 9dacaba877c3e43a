use crate::config::CheckoutConfig;
use crate::domain::catalog::{Catalog, CatalogItem};
use crate::domain::customer::{CustomerField, CustomerInfo};
use crate::domain::payment::{PaymentField, PaymentInfo};
use crate::domain::ports::{CheckoutObserver, CheckoutObserverBox};
use crate::domain::selection::SelectionStore;
use crate::domain::summary::{CONFIRMATION_MESSAGE, OrderConfirmation, OrderSummary};
use crate::error::{CheckoutError, Result};
use tracing::{debug, info};

/// A single discrete user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEvent {
    SetQuantity { item_id: String, quantity: u32 },
    Increment { item_id: String },
    Decrement { item_id: String },
    Customer { field: CustomerField, value: String },
    PaymentMethod { tag: String },
    Payment { field: PaymentField, value: String },
    Submit,
}

/// The session-scoped state behind one checkout page.
///
/// Owns the cart and both form snapshots. Every mutation is applied to
/// completion and then pushed to the subscribed observers as a freshly
/// derived [`OrderSummary`].
pub struct CheckoutSession {
    catalog: Catalog,
    config: CheckoutConfig,
    selection: SelectionStore,
    customer: CustomerInfo,
    payment: PaymentInfo,
    observers: Vec<CheckoutObserverBox>,
    orders_submitted: u64,
}

impl CheckoutSession {
    /// Creates a new, empty `CheckoutSession`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The items that can be put in the cart.
    /// * `config` - Pricing and policy settings.
    pub fn new(catalog: Catalog, config: CheckoutConfig) -> Self {
        let selection =
            SelectionStore::with_limits(config.enforce_availability, config.max_quantity);
        Self {
            catalog,
            config,
            selection,
            customer: CustomerInfo::default(),
            payment: PaymentInfo::default(),
            observers: Vec::new(),
            orders_submitted: 0,
        }
    }

    pub fn subscribe(&mut self, observer: impl CheckoutObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn payment(&self) -> &PaymentInfo {
        &self.payment
    }

    /// Derives the order summary from the current state.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::build(&self.selection, &self.customer, &self.payment, &self.config)
    }

    pub fn is_submit_ready(&self) -> bool {
        self.summary().submit_ready
    }

    /// Applies one user input event.
    ///
    /// Returns the confirmation when the event was a submit that went through.
    pub fn apply(&mut self, event: CheckoutEvent) -> Result<Option<OrderConfirmation>> {
        match event {
            CheckoutEvent::SetQuantity { item_id, quantity } => {
                self.set_quantity(&item_id, quantity)?
            }
            CheckoutEvent::Increment { item_id } => self.increment(&item_id)?,
            CheckoutEvent::Decrement { item_id } => self.decrement(&item_id)?,
            CheckoutEvent::Customer { field, value } => self.set_customer_field(field, value)?,
            CheckoutEvent::PaymentMethod { tag } => self.set_payment_method(&tag)?,
            CheckoutEvent::Payment { field, value } => self.set_payment_field(field, &value)?,
            CheckoutEvent::Submit => return Ok(self.submit()),
        }
        Ok(None)
    }

    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) -> Result<()> {
        let item = lookup(&self.catalog, item_id)?;
        if self.selection.set_quantity(item, quantity)? {
            debug!(item = item_id, quantity, "cart quantity set");
            self.notify_change();
        }
        Ok(())
    }

    pub fn increment(&mut self, item_id: &str) -> Result<()> {
        let item = lookup(&self.catalog, item_id)?;
        if self.selection.increment(item)? {
            debug!(
                item = item_id,
                quantity = self.selection.quantity_of(item_id),
                "cart quantity incremented"
            );
            self.notify_change();
        }
        Ok(())
    }

    pub fn decrement(&mut self, item_id: &str) -> Result<()> {
        let item = lookup(&self.catalog, item_id)?;
        if self.selection.decrement(item)? {
            debug!(
                item = item_id,
                quantity = self.selection.quantity_of(item_id),
                "cart quantity decremented"
            );
            self.notify_change();
        }
        Ok(())
    }

    /// Stores a customer field. The payment method is mirrored into the payment form.
    pub fn set_customer_field(
        &mut self,
        field: CustomerField,
        value: impl Into<String>,
    ) -> Result<()> {
        let value = value.into();
        if field == CustomerField::PaymentMethod {
            return self.set_payment_method(&value);
        }
        debug!(field = ?field, "customer field changed");
        self.customer.set(field, value);
        self.notify_change();
        Ok(())
    }

    /// Selects the payment method on both forms so they never disagree.
    pub fn set_payment_method(&mut self, tag: &str) -> Result<()> {
        self.payment.set_method(tag)?;
        self.customer.set(CustomerField::PaymentMethod, tag);
        debug!(method = tag, "payment method selected");
        self.notify_change();
        Ok(())
    }

    pub fn set_payment_field(&mut self, field: PaymentField, value: &str) -> Result<()> {
        self.payment.set(field, value)?;
        debug!(field = ?field, "payment field changed");
        self.notify_change();
        Ok(())
    }

    /// Completes the order if it is ready, then resets the whole session.
    ///
    /// A submit on a session that is not ready changes nothing and returns `None`.
    pub fn submit(&mut self) -> Option<OrderConfirmation> {
        let summary = self.summary();
        if !summary.submit_ready {
            debug!("submit ignored, order is not ready");
            return None;
        }

        self.orders_submitted += 1;
        let confirmation = OrderConfirmation {
            order: self.orders_submitted,
            customer: self.customer.clone(),
            lines: summary.lines,
            totals: summary.totals,
            payment_description: summary.payment_description,
            message: CONFIRMATION_MESSAGE,
        };
        info!(
            order = confirmation.order,
            total = %confirmation.totals.total,
            "order submitted"
        );

        for observer in &mut self.observers {
            observer.on_submit(&confirmation);
        }
        self.reset();
        Some(confirmation)
    }

    fn reset(&mut self) {
        self.selection.clear();
        self.customer = CustomerInfo::default();
        self.payment = PaymentInfo::default();
        self.notify_change();
    }

    fn notify_change(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let summary = self.summary();
        for observer in &mut self.observers {
            observer.on_change(&summary);
        }
    }
}

fn lookup<'a>(catalog: &'a Catalog, item_id: &str) -> Result<&'a CatalogItem> {
    catalog
        .get(item_id)
        .ok_or_else(|| CheckoutError::UnknownItem(item_id.to_string()))
}
