use crate::application::checkout::CheckoutEvent;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Quantity,
    Increment,
    Decrement,
    Customer,
    Payment,
    Submit,
}

/// One row of an event script: `action, target, value`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct EventRecord {
    pub action: EventAction,
    pub target: Option<String>,
    pub value: Option<String>,
}

impl TryFrom<EventRecord> for CheckoutEvent {
    type Error = CheckoutError;

    fn try_from(record: EventRecord) -> Result<Self> {
        let EventRecord {
            action,
            target,
            value,
        } = record;
        let target = target
            .ok_or_else(|| CheckoutError::InvalidEvent(format!("{action:?} needs a target")));
        let value = value.unwrap_or_default();

        let event = match action {
            EventAction::Quantity => {
                let quantity = value.parse().map_err(|_| {
                    CheckoutError::InvalidEvent(format!("invalid quantity '{value}'"))
                })?;
                CheckoutEvent::SetQuantity {
                    item_id: target?,
                    quantity,
                }
            }
            EventAction::Increment => CheckoutEvent::Increment { item_id: target? },
            EventAction::Decrement => CheckoutEvent::Decrement { item_id: target? },
            EventAction::Customer => CheckoutEvent::Customer {
                field: target?.parse()?,
                value,
            },
            EventAction::Payment => match target?.as_str() {
                "method" => CheckoutEvent::PaymentMethod { tag: value },
                field => CheckoutEvent::Payment {
                    field: field.parse()?,
                    value,
                },
            },
            EventAction::Submit => CheckoutEvent::Submit,
        };
        Ok(event)
    }
}

/// Reads checkout events from a CSV source.
///
/// Whitespace around fields is trimmed and short rows are accepted, so a bare
/// `submit` line is a valid record.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts events, one per row.
    pub fn events(self) -> impl Iterator<Item = Result<CheckoutEvent>> {
        self.reader
            .into_deserialize::<EventRecord>()
            .map(|result| CheckoutEvent::try_from(result?))
    }
}
