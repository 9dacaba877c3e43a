//! Application layer containing the checkout session.
//!
//! This module defines the `CheckoutSession` which owns the cart and both form
//! snapshots for one page session. It applies user input events one at a time
//! and pushes each resulting state to its observers.

pub mod checkout;
