use super::money::Money;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A purchasable product. Defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Price per `unit`.
    pub price: Money,
    pub unit: String,
    pub description: String,
    /// Advisory stock flag. Out-of-stock items render without a quantity selector.
    pub in_stock: bool,
}

impl CatalogItem {
    fn new(
        id: &str,
        name: &str,
        category: &str,
        price: Money,
        description: &str,
        in_stock: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            unit: "кг".to_string(),
            description: description.to_string(),
            in_stock,
        }
    }
}

/// An immutable, ordered list of catalog items.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The shop's fertilizer range.
    pub fn standard() -> Self {
        Self::new(vec![
            CatalogItem::new(
                "1",
                "Азофоска NPK 16:16:16",
                "Комплексное",
                Money::new(dec!(850)),
                "Универсальное удобрение для всех видов растений",
                true,
            ),
            CatalogItem::new(
                "2",
                "Суперфосфат",
                "Фосфорное",
                Money::new(dec!(650)),
                "Основное фосфорное удобрение для корневой системы",
                true,
            ),
            CatalogItem::new(
                "3",
                "Калийная соль",
                "Калийное",
                Money::new(dec!(720)),
                "Повышает устойчивость растений к болезням",
                true,
            ),
            CatalogItem::new(
                "4",
                "Карбамид (Мочевина)",
                "Азотное",
                Money::new(dec!(890)),
                "Высокоэффективное азотное удобрение",
                false,
            ),
        ])
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
