use super::payment::PaymentMethod;
use super::validation::{
    EMAIL_PATTERN, FieldError, FormField, PHONE_PATTERN, check_pattern, check_required,
};
use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inputs of the customer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Email,
    Phone,
    PaymentMethod,
}

impl FromStr for CustomerField {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(CustomerField::Name),
            "email" => Ok(CustomerField::Email),
            "phone" => Ok(CustomerField::Phone),
            "payment_method" => Ok(CustomerField::PaymentMethod),
            other => Err(CheckoutError::InvalidEvent(format!(
                "unknown customer field '{other}'"
            ))),
        }
    }
}

impl From<CustomerField> for FormField {
    fn from(field: CustomerField) -> Self {
        match field {
            CustomerField::Name => FormField::Name,
            CustomerField::Email => FormField::Email,
            CustomerField::Phone => FormField::Phone,
            CustomerField::PaymentMethod => FormField::PaymentMethod,
        }
    }
}

/// Snapshot of the customer form. Values are kept exactly as typed, valid or not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub payment_method: String,
}

impl CustomerInfo {
    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CustomerField::Name => self.name = value,
            CustomerField::Email => self.email = value,
            CustomerField::Phone => self.phone = value,
            CustomerField::PaymentMethod => self.payment_method = value,
        }
    }

    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::PaymentMethod => &self.payment_method,
        }
    }

    /// Validates one field, as on losing focus.
    pub fn validate_field(&self, field: CustomerField) -> Option<FieldError> {
        let value = self.get(field);
        let form_field = FormField::from(field);
        match field {
            CustomerField::Name => check_required(form_field, value),
            CustomerField::Email => check_pattern(form_field, value, &EMAIL_PATTERN),
            CustomerField::Phone => check_pattern(form_field, value, &PHONE_PATTERN),
            CustomerField::PaymentMethod => {
                if value.is_empty() {
                    Some(FieldError::required(form_field))
                } else if value.parse::<PaymentMethod>().is_err() {
                    Some(FieldError::pattern_mismatch(form_field))
                } else {
                    None
                }
            }
        }
    }

    /// Validates every field, as on submit.
    pub fn validate(&self) -> Vec<FieldError> {
        [
            CustomerField::Name,
            CustomerField::Email,
            CustomerField::Phone,
            CustomerField::PaymentMethod,
        ]
        .into_iter()
        .filter_map(|field| self.validate_field(field))
        .collect()
    }

    /// True when every field has some value. Says nothing about patterns.
    pub fn is_filled(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.payment_method.is_empty()
    }
}
