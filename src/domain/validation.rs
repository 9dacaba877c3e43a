use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

// Digit classes are spelled [0-9]: `\d` in the regex crate also matches non-ASCII digits.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{10,14}$").expect("valid phone pattern"));
pub static CARD_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4} [0-9]{4} [0-9]{4} [0-9]{4}$").expect("valid card number pattern")
});
pub static EXPIRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("valid expiry pattern"));
pub static CVV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("valid cvv pattern"));
pub static ACCOUNT_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{20}$").expect("valid account number pattern"));

/// Every input field across the customer and payment forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    PaymentMethod,
    Method,
    CardNumber,
    Expiry,
    Cvv,
    CardHolder,
    Bank,
    AccountNumber,
    SbpPhone,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::PaymentMethod => "payment_method",
            FormField::Method => "method",
            FormField::CardNumber => "card_number",
            FormField::Expiry => "expiry",
            FormField::Cvv => "cvv",
            FormField::CardHolder => "card_holder",
            FormField::Bank => "bank",
            FormField::AccountNumber => "account_number",
            FormField::SbpPhone => "sbp_phone",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field is empty.
    Required,
    /// The field has a value that fails its pattern.
    PatternMismatch,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::Required => f.write_str("required"),
            FieldErrorKind::PatternMismatch => f.write_str("pattern mismatch"),
        }
    }
}

/// A per-field validation failure. Recoverable by correcting the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("{field}: {kind}")]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn required(field: FormField) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
        }
    }

    pub fn pattern_mismatch(field: FormField) -> Self {
        Self {
            field,
            kind: FieldErrorKind::PatternMismatch,
        }
    }

    /// The message shown under the field.
    pub fn message(&self) -> &'static str {
        use FieldErrorKind::*;
        use FormField::*;
        match (self.field, self.kind) {
            (Name, _) => "Укажите ваше имя",
            (Email, Required) => "Укажите email",
            (Email, PatternMismatch) => "Неверный формат email",
            (Phone, Required) => "Укажите телефон",
            (Phone | SbpPhone, PatternMismatch) => "Неверный формат телефона",
            (PaymentMethod | Method, _) => "Выберите способ оплаты",
            (CardNumber, Required) => "Введите номер карты",
            (CardNumber, PatternMismatch) => "Неверный формат номера карты",
            (Expiry, Required) => "Введите срок действия",
            (Expiry, PatternMismatch) => "Формат: ММ/ГГ",
            (Cvv, Required) => "Введите CVV",
            (Cvv, PatternMismatch) => "CVV состоит из 3 цифр",
            (CardHolder, _) => "Введите имя держателя карты",
            (Bank, _) => "Выберите банк",
            (AccountNumber, Required) => "Введите номер счёта",
            (AccountNumber, PatternMismatch) => "Номер счёта должен содержать 20 цифр",
            (SbpPhone, Required) => "Введите номер телефона",
        }
    }
}

/// Checks a required field: empty is `Required`, otherwise the pattern decides.
pub fn check_pattern(field: FormField, value: &str, pattern: &Regex) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::required(field))
    } else if !pattern.is_match(value) {
        Some(FieldError::pattern_mismatch(field))
    } else {
        None
    }
}

/// Checks a required free-text field.
pub fn check_required(field: FormField, value: &str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then(|| FieldError::required(field))
}

/// Keeps only ASCII digits, at most `limit` of them.
pub fn digits_only(input: &str, limit: usize) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(limit)
        .collect()
}
