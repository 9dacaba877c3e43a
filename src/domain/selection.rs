use super::catalog::CatalogItem;
use super::money::Money;
use crate::error::{CheckoutError, Result};
use serde::Serialize;

/// A selected catalog item. Only ever stored with `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionEntry {
    pub item: CatalogItem,
    pub quantity: u32,
}

impl SelectionEntry {
    pub fn line_total(&self) -> Money {
        self.item.price.times(self.quantity)
    }
}

/// The cart: item/quantity pairs in first-selected order, one entry per item id.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStore {
    entries: Vec<SelectionEntry>,
    enforce_availability: bool,
    max_quantity: Option<u32>,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    /// Creates an empty store that refuses out-of-stock items and has no quantity cap.
    pub fn new() -> Self {
        Self::with_limits(true, None)
    }

    pub fn with_limits(enforce_availability: bool, max_quantity: Option<u32>) -> Self {
        Self {
            entries: Vec::new(),
            enforce_availability,
            max_quantity,
        }
    }

    /// Sets the quantity for `item`, returning whether the store changed.
    ///
    /// Zero removes the entry (or does nothing if there is none). A positive
    /// quantity replaces the existing entry's quantity in place, or appends a new
    /// entry at the end.
    pub fn set_quantity(&mut self, item: &CatalogItem, quantity: u32) -> Result<bool> {
        let position = self.entries.iter().position(|e| e.item.id == item.id);

        if quantity == 0 {
            return Ok(match position {
                Some(index) => {
                    self.entries.remove(index);
                    true
                }
                None => false,
            });
        }

        if self.enforce_availability && !item.in_stock {
            return Err(CheckoutError::ItemUnavailable(item.id.clone()));
        }
        if let Some(max) = self.max_quantity
            && quantity > max
        {
            return Err(CheckoutError::QuantityOutOfRange { quantity, max });
        }

        match position {
            Some(index) => {
                let entry = &mut self.entries[index];
                let changed = entry.quantity != quantity;
                entry.quantity = quantity;
                Ok(changed)
            }
            None => {
                self.entries.push(SelectionEntry {
                    item: item.clone(),
                    quantity,
                });
                Ok(true)
            }
        }
    }

    /// The "+" button.
    pub fn increment(&mut self, item: &CatalogItem) -> Result<bool> {
        let current = self.quantity_of(&item.id);
        self.set_quantity(item, current.saturating_add(1))
    }

    /// The "-" button. Does nothing once the item is out of the cart.
    pub fn decrement(&mut self, item: &CatalogItem) -> Result<bool> {
        match self.quantity_of(&item.id) {
            0 => Ok(false),
            current => self.set_quantity(item, current - 1),
        }
    }

    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item.id == item_id)
            .map_or(0, |e| e.quantity)
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn item(id: &str) -> CatalogItem {
        Catalog::standard().get(id).unwrap().clone()
    }

    #[test]
    fn test_add_update_remove() {
        let mut store = SelectionStore::new();
        let npk = item("1");

        assert!(store.set_quantity(&npk, 2).unwrap());
        assert_eq!(store.quantity_of("1"), 2);

        assert!(store.set_quantity(&npk, 5).unwrap());
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.quantity_of("1"), 5);

        assert!(store.set_quantity(&npk, 0).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_on_absent_item_is_noop() {
        let mut store = SelectionStore::new();
        store.set_quantity(&item("2"), 1).unwrap();
        let before = store.clone();

        assert!(!store.set_quantity(&item("1"), 0).unwrap());
        assert_eq!(store, before);
    }

    #[test]
    fn test_preserves_first_selected_order() {
        let mut store = SelectionStore::new();
        store.set_quantity(&item("3"), 1).unwrap();
        store.set_quantity(&item("1"), 1).unwrap();
        store.set_quantity(&item("2"), 1).unwrap();
        // Updating an existing entry keeps its slot
        store.set_quantity(&item("3"), 7).unwrap();

        let ids: Vec<&str> = store.entries().iter().map(|e| e.item.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_out_of_stock_item_rejected() {
        let mut store = SelectionStore::new();
        let urea = item("4");

        let result = store.set_quantity(&urea, 1);
        assert!(matches!(result, Err(CheckoutError::ItemUnavailable(id)) if id == "4"));
        assert!(store.is_empty());

        // Clearing is always allowed
        assert!(!store.set_quantity(&urea, 0).unwrap());
    }

    #[test]
    fn test_out_of_stock_item_allowed_when_not_enforced() {
        let mut store = SelectionStore::with_limits(false, None);
        assert!(store.set_quantity(&item("4"), 3).unwrap());
        assert_eq!(store.quantity_of("4"), 3);
    }

    #[test]
    fn test_max_quantity() {
        let mut store = SelectionStore::with_limits(true, Some(10));
        store.set_quantity(&item("1"), 10).unwrap();

        let result = store.set_quantity(&item("1"), 11);
        assert!(matches!(
            result,
            Err(CheckoutError::QuantityOutOfRange {
                quantity: 11,
                max: 10
            })
        ));
        assert_eq!(store.quantity_of("1"), 10);
    }

    #[test]
    fn test_increment_decrement() {
        let mut store = SelectionStore::new();
        let npk = item("1");

        assert!(!store.decrement(&npk).unwrap());
        store.increment(&npk).unwrap();
        store.increment(&npk).unwrap();
        assert_eq!(store.quantity_of("1"), 2);

        store.decrement(&npk).unwrap();
        store.decrement(&npk).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_line_total() {
        let mut store = SelectionStore::new();
        store.set_quantity(&item("3"), 4).unwrap();
        assert_eq!(
            store.entries()[0].line_total(),
            Money::new(rust_decimal_macros::dec!(2880))
        );
    }
}
