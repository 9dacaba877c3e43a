use super::validation::{
    ACCOUNT_NUMBER_PATTERN, CARD_NUMBER_PATTERN, CVV_PATTERN, EXPIRY_PATTERN, FieldError,
    FormField, PHONE_PATTERN, check_pattern, check_required, digits_only,
};
use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CARD_DIGITS: usize = 16;
const EXPIRY_DIGITS: usize = 4;
const CVV_DIGITS: usize = 3;
const ACCOUNT_DIGITS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
    Transfer,
    Sbp,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Cash,
        PaymentMethod::Transfer,
        PaymentMethod::Sbp,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Sbp => "sbp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Банковская карта",
            PaymentMethod::Cash => "Наличные при получении",
            PaymentMethod::Transfer => "Банковский перевод",
            PaymentMethod::Sbp => "СБП (Система быстрых платежей)",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.tag() == s)
            .ok_or_else(|| CheckoutError::InvalidEvent(format!("unknown payment method '{s}'")))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Banks accepted for bank transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Sberbank,
    Vtb,
    Gazprombank,
    Alfabank,
    Tinkoff,
}

impl Bank {
    pub const ALL: [Bank; 5] = [
        Bank::Sberbank,
        Bank::Vtb,
        Bank::Gazprombank,
        Bank::Alfabank,
        Bank::Tinkoff,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Bank::Sberbank => "sberbank",
            Bank::Vtb => "vtb",
            Bank::Gazprombank => "gazprombank",
            Bank::Alfabank => "alfabank",
            Bank::Tinkoff => "tinkoff",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Bank::Sberbank => "Сбербанк",
            Bank::Vtb => "ВТБ",
            Bank::Gazprombank => "Газпромбанк",
            Bank::Alfabank => "Альфа-Банк",
            Bank::Tinkoff => "Тинькофф Банк",
        }
    }
}

impl FromStr for Bank {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bank| bank.tag() == s)
            .ok_or_else(|| CheckoutError::InvalidEvent(format!("unknown bank '{s}'")))
    }
}

/// Inputs of the payment form other than the method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardNumber,
    Expiry,
    Cvv,
    CardHolder,
    Bank,
    AccountNumber,
    SbpPhone,
}

impl FromStr for PaymentField {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card_number" => Ok(PaymentField::CardNumber),
            "expiry" => Ok(PaymentField::Expiry),
            "cvv" => Ok(PaymentField::Cvv),
            "card_holder" => Ok(PaymentField::CardHolder),
            "bank" => Ok(PaymentField::Bank),
            "account_number" => Ok(PaymentField::AccountNumber),
            "sbp_phone" => Ok(PaymentField::SbpPhone),
            other => Err(CheckoutError::InvalidEvent(format!(
                "unknown payment field '{other}'"
            ))),
        }
    }
}

/// Groups up to 16 digits into blocks of four: `"1234567890123456"` -> `"1234 5678 9012 3456"`.
pub fn format_card_number(input: &str) -> String {
    let digits = digits_only(input, CARD_DIGITS);
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps up to four digits and puts a slash after the month: `"0528"` -> `"05/28"`.
pub fn format_expiry(input: &str) -> String {
    let digits = digits_only(input, EXPIRY_DIGITS);
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// The method-specific part of a payment snapshot, restricted to the active method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentDetails<'a> {
    Card {
        number: &'a str,
        expiry: &'a str,
        cvv: &'a str,
        holder: &'a str,
    },
    Cash,
    Transfer {
        bank: Option<Bank>,
        account_number: &'a str,
    },
    Sbp {
        phone: &'a str,
    },
}

/// Snapshot of the payment form.
///
/// Fields of every sub-form are kept when the method changes, so switching
/// back restores what was typed. Only the active method's fields are reported
/// through [`PaymentInfo::details`] and checked by [`PaymentInfo::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PaymentInfo {
    pub method: Option<PaymentMethod>,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub card_holder: String,
    pub bank: Option<Bank>,
    pub account_number: String,
    pub sbp_phone: String,
}

impl PaymentInfo {
    /// Selects a method by tag. An empty tag clears the selection.
    pub fn set_method(&mut self, tag: &str) -> Result<(), CheckoutError> {
        self.method = match tag {
            "" => None,
            tag => Some(tag.parse()?),
        };
        Ok(())
    }

    /// Stores a field value, formatted the way the input box formats it while typing.
    pub fn set(&mut self, field: PaymentField, value: &str) -> Result<(), CheckoutError> {
        match field {
            PaymentField::CardNumber => self.card_number = format_card_number(value),
            PaymentField::Expiry => self.expiry = format_expiry(value),
            PaymentField::Cvv => self.cvv = digits_only(value, CVV_DIGITS),
            PaymentField::CardHolder => self.card_holder = value.to_uppercase(),
            PaymentField::Bank => {
                self.bank = match value {
                    "" => None,
                    tag => Some(tag.parse()?),
                }
            }
            PaymentField::AccountNumber => {
                self.account_number = digits_only(value, ACCOUNT_DIGITS)
            }
            PaymentField::SbpPhone => self.sbp_phone = value.to_string(),
        }
        Ok(())
    }

    pub fn details(&self) -> Option<PaymentDetails<'_>> {
        self.method.map(|method| match method {
            PaymentMethod::Card => PaymentDetails::Card {
                number: &self.card_number,
                expiry: &self.expiry,
                cvv: &self.cvv,
                holder: &self.card_holder,
            },
            PaymentMethod::Cash => PaymentDetails::Cash,
            PaymentMethod::Transfer => PaymentDetails::Transfer {
                bank: self.bank,
                account_number: &self.account_number,
            },
            PaymentMethod::Sbp => PaymentDetails::Sbp {
                phone: &self.sbp_phone,
            },
        })
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let Some(details) = self.details() else {
            return vec![FieldError::required(FormField::Method)];
        };

        let checks = match details {
            PaymentDetails::Card {
                number,
                expiry,
                cvv,
                holder,
            } => vec![
                check_pattern(FormField::CardNumber, number, &CARD_NUMBER_PATTERN),
                check_pattern(FormField::Expiry, expiry, &EXPIRY_PATTERN),
                check_pattern(FormField::Cvv, cvv, &CVV_PATTERN),
                check_required(FormField::CardHolder, holder),
            ],
            PaymentDetails::Cash => vec![],
            PaymentDetails::Transfer {
                bank,
                account_number,
            } => vec![
                bank.is_none().then(|| FieldError::required(FormField::Bank)),
                check_pattern(
                    FormField::AccountNumber,
                    account_number,
                    &ACCOUNT_NUMBER_PATTERN,
                ),
            ],
            PaymentDetails::Sbp { phone } => {
                vec![check_pattern(FormField::SbpPhone, phone, &PHONE_PATTERN)]
            }
        };
        checks.into_iter().flatten().collect()
    }

    /// Last four digits of the card number, if any were typed.
    pub fn card_last_four(&self) -> Option<String> {
        let digits = digits_only(&self.card_number, CARD_DIGITS);
        (!digits.is_empty()).then(|| digits[digits.len().saturating_sub(4)..].to_string())
    }
}
