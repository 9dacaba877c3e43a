//! Plain-text rendering of the storefront: catalog, order summary and receipts.

use crate::config::CheckoutConfig;
use crate::domain::catalog::Catalog;
use crate::domain::money::Money;
use crate::domain::selection::SelectionStore;
use crate::domain::summary::{OrderConfirmation, OrderLine, OrderSummary, OrderTotals};
use std::fmt;

const CURRENCY: &str = "₽";

/// The catalog with a quantity selector under every in-stock item.
pub struct CatalogView<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a SelectionStore,
}

impl fmt::Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Каталог удобрений")?;
        for item in self.catalog.items() {
            let stock = if item.in_stock { "В наличии" } else { "Нет в наличии" };
            writeln!(
                f,
                "[{}] {} ({}) {} {CURRENCY}/{} | {stock}",
                item.id, item.name, item.category, item.price, item.unit
            )?;
            writeln!(f, "    {}", item.description)?;
            // Out-of-stock items have no quantity selector
            if item.in_stock {
                writeln!(f, "    [-] {} [+]", self.selection.quantity_of(&item.id))?;
            }
        }
        Ok(())
    }
}

fn write_lines(f: &mut fmt::Formatter<'_>, lines: &[OrderLine]) -> fmt::Result {
    for line in lines {
        writeln!(f, "{}", line.name)?;
        writeln!(
            f,
            "    {} {} × {} {CURRENCY} = {} {CURRENCY}",
            line.quantity, line.unit, line.unit_price, line.line_total
        )?;
    }
    Ok(())
}

fn write_totals(f: &mut fmt::Formatter<'_>, totals: &OrderTotals) -> fmt::Result {
    writeln!(f, "Товары: {} {CURRENCY}", totals.subtotal)?;
    if totals.ships_free() {
        writeln!(f, "Доставка: Бесплатно")
    } else {
        writeln!(f, "Доставка: {} {CURRENCY}", totals.shipping_fee)
    }
}

/// The order summary panel for the current session state.
pub struct SummaryView<'a> {
    pub summary: &'a OrderSummary,
    pub config: &'a CheckoutConfig,
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "Итоги заказа")?;
        if summary.is_empty() {
            return writeln!(f, "Корзина пуста");
        }

        write_lines(f, &summary.lines)?;
        write_totals(f, &summary.totals)?;
        let subtotal = summary.totals.subtotal;
        let threshold = self.config.free_shipping_threshold;
        if subtotal > Money::ZERO && subtotal <= threshold {
            writeln!(f, "Бесплатная доставка от {threshold} {CURRENCY}")?;
        }
        writeln!(f, "Итого: {} {CURRENCY}", summary.totals.total)?;

        if let Some(payment) = &summary.payment_description {
            writeln!(f, "Оплата: {payment}")?;
        }
        if let Some(due) = summary.cash_due {
            writeln!(f, "Приготовьте точную сумму: {due} {CURRENCY}")?;
        }
        for error in &summary.field_errors {
            writeln!(f, "! {}: {}", error.field, error.message())?;
        }
        if summary.submit_ready {
            writeln!(f, "[Оформить заказ]")
        } else {
            writeln!(f, "[Заполните все поля]")
        }
    }
}

/// A submitted order.
pub struct ConfirmationView<'a>(pub &'a OrderConfirmation);

impl fmt::Display for ConfirmationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let confirmation = self.0;
        writeln!(f, "Заказ №{}", confirmation.order)?;
        writeln!(f, "{}", confirmation.message)?;
        let customer = &confirmation.customer;
        writeln!(
            f,
            "Покупатель: {}, {}, {}",
            customer.name, customer.email, customer.phone
        )?;
        write_lines(f, &confirmation.lines)?;
        write_totals(f, &confirmation.totals)?;
        writeln!(f, "Итого: {} {CURRENCY}", confirmation.totals.total)?;
        if let Some(payment) = &confirmation.payment_description {
            writeln!(f, "Оплата: {payment}")?;
        }
        Ok(())
    }
}

pub fn render_catalog(catalog: &Catalog, selection: &SelectionStore) -> String {
    CatalogView { catalog, selection }.to_string()
}
