//! Checkout domain: catalog, cart, forms and the derived order summary.
//!
//! Everything here is synchronous and free of I/O. Form snapshots keep raw
//! user input; validity and totals are always recomputed from them.

pub mod catalog;
pub mod customer;
pub mod money;
pub mod payment;
pub mod ports;
pub mod selection;
pub mod summary;
pub mod validation;
