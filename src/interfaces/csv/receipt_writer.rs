use crate::domain::summary::OrderConfirmation;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// A confirmed order flattened into one CSV row.
#[derive(Debug, Serialize, PartialEq)]
pub struct ReceiptRow {
    pub order: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub items: u64,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub payment: String,
}

impl From<&OrderConfirmation> for ReceiptRow {
    fn from(confirmation: &OrderConfirmation) -> Self {
        Self {
            order: confirmation.order,
            name: confirmation.customer.name.clone(),
            email: confirmation.customer.email.clone(),
            phone: confirmation.customer.phone.clone(),
            items: confirmation.item_count(),
            subtotal: confirmation.totals.subtotal.to_string(),
            shipping: confirmation.totals.shipping_fee.to_string(),
            total: confirmation.totals.total.to_string(),
            payment: confirmation.payment_description.clone().unwrap_or_default(),
        }
    }
}

/// Writes confirmed orders as CSV, one row per order.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipts<'a>(
        &mut self,
        confirmations: impl IntoIterator<Item = &'a OrderConfirmation>,
    ) -> Result<()> {
        for confirmation in confirmations {
            self.writer.serialize(ReceiptRow::from(confirmation))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
