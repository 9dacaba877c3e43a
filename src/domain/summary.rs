use super::customer::CustomerInfo;
use super::money::Money;
use super::payment::{PaymentDetails, PaymentInfo, PaymentMethod};
use super::selection::{SelectionEntry, SelectionStore};
use super::validation::FieldError;
use crate::config::CheckoutConfig;
use serde::Serialize;

/// Subtotal, delivery fee and grand total of the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub shipping_fee: Money,
    pub total: Money,
}

impl OrderTotals {
    pub fn calculate(selection: &SelectionStore, config: &CheckoutConfig) -> Self {
        let subtotal: Money = selection
            .entries()
            .iter()
            .map(SelectionEntry::line_total)
            .sum();
        let shipping_fee = if subtotal > config.free_shipping_threshold {
            Money::ZERO
        } else {
            config.shipping_fee
        };
        Self {
            subtotal,
            shipping_fee,
            total: subtotal + shipping_fee,
        }
    }

    pub fn ships_free(&self) -> bool {
        self.shipping_fee.is_zero()
    }
}

/// One cart row as shown in the summary and on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub unit: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<&SelectionEntry> for OrderLine {
    fn from(entry: &SelectionEntry) -> Self {
        Self {
            item_id: entry.item.id.clone(),
            name: entry.item.name.clone(),
            unit: entry.item.unit.clone(),
            unit_price: entry.item.price,
            quantity: entry.quantity,
            line_total: entry.line_total(),
        }
    }
}

/// Whether the order may be submitted.
///
/// Only checks that values are present: a non-empty cart, all four customer
/// fields and a payment method. Pattern failures stay visible as field errors
/// but do not block submission here.
pub fn derive_readiness(
    selection: &SelectionStore,
    customer: &CustomerInfo,
    payment: &PaymentInfo,
) -> bool {
    !selection.is_empty() && customer.is_filled() && payment.method.is_some()
}

/// One-line, masked description of the chosen payment method.
pub fn describe_payment(payment: &PaymentInfo) -> Option<String> {
    let description = match payment.details()? {
        PaymentDetails::Card { .. } => format!(
            "Карта •••• {}",
            payment.card_last_four().as_deref().unwrap_or("****")
        ),
        PaymentDetails::Cash => PaymentMethod::Cash.label().to_string(),
        PaymentDetails::Transfer { bank, .. } => format!(
            "Банковский перевод ({})",
            bank.map_or("Банк не выбран", |b| b.display_name())
        ),
        PaymentDetails::Sbp { phone } => format!("СБП {phone}"),
    };
    Some(description)
}

/// Everything the order summary panel shows, derived fresh from the session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub totals: OrderTotals,
    pub payment_description: Option<String>,
    /// Exact amount to prepare when paying cash on delivery.
    pub cash_due: Option<Money>,
    pub field_errors: Vec<FieldError>,
    pub submit_ready: bool,
}

impl OrderSummary {
    pub fn build(
        selection: &SelectionStore,
        customer: &CustomerInfo,
        payment: &PaymentInfo,
        config: &CheckoutConfig,
    ) -> Self {
        let totals = OrderTotals::calculate(selection, config);
        let mut field_errors = customer.validate();
        field_errors.extend(payment.validate());

        let mut submit_ready = derive_readiness(selection, customer, payment);
        if config.strict_validation {
            submit_ready &= field_errors.is_empty();
        }

        Self {
            lines: selection.entries().iter().map(OrderLine::from).collect(),
            totals,
            payment_description: describe_payment(payment),
            cash_due: (payment.method == Some(PaymentMethod::Cash)).then_some(totals.total),
            field_errors,
            submit_ready,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Notification raised once an order goes through.
pub const CONFIRMATION_MESSAGE: &str =
    "Заказ успешно оформлен! Мы свяжемся с вами в ближайшее время.";

/// A submitted order, captured right before the session resets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmation {
    /// Sequence number within the session, starting at 1.
    pub order: u64,
    pub customer: CustomerInfo,
    pub lines: Vec<OrderLine>,
    pub totals: OrderTotals,
    pub payment_description: Option<String>,
    pub message: &'static str,
}

impl OrderConfirmation {
    /// Total units across all lines. Widened so large quantities cannot overflow.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
