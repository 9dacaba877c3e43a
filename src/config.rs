use crate::domain::money::Money;
use rust_decimal_macros::dec;

/// Pricing and policy knobs for a checkout session.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Orders with a subtotal strictly above this ship for free.
    pub free_shipping_threshold: Money,
    /// Flat delivery fee charged at or below the threshold.
    pub shipping_fee: Money,
    /// Upper bound on a single item's quantity, if any.
    pub max_quantity: Option<u32>,
    /// Refuse out-of-stock items when they are added to the cart.
    pub enforce_availability: bool,
    /// Also require both forms to pass field validation before submit.
    ///
    /// Off by default: submit then only checks that values are present, so a
    /// malformed value (such as a 19-digit account number) is reported as a
    /// field error but does not block the order. Pattern checks such as the
    /// 20-digit account number rule reject a submit only when this is set.
    pub strict_validation: bool,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::new(dec!(5000)),
            shipping_fee: Money::new(dec!(500)),
            max_quantity: None,
            enforce_availability: true,
            strict_validation: false,
        }
    }
}
