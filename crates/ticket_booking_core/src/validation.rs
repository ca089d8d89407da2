use serde_json::{Map, Value};

use crate::contract::{
    BookingRequest, ATTR_EVENT_NAME, ATTR_FIRST_NAME, ATTR_TICKET_COUNT, REQUIRED_FIELDS,
};
use crate::error::BookingError;

pub type BookingFields = Map<String, Value>;

/// Decodes the `body` of an inbound event into a field map.
///
/// API Gateway delivers the body as JSON text; direct invocations may hand over
/// an already-decoded object. A `null` body counts as absent.
pub fn decode_body(body: Option<&Value>) -> Result<BookingFields, BookingError> {
    match body {
        None | Some(Value::Null) => Err(BookingError::MissingBody),
        Some(Value::Object(fields)) => Ok(fields.clone()),
        Some(Value::String(text)) => {
            let parsed: Value = serde_json::from_str(text)
                .map_err(|error| BookingError::MalformedInput(error.to_string()))?;
            match parsed {
                Value::Object(fields) => Ok(fields),
                _ => Err(BookingError::MalformedInput(
                    "request body must be a JSON object".to_string(),
                )),
            }
        }
        Some(_) => Err(BookingError::MalformedInput(
            "request body must be a JSON object".to_string(),
        )),
    }
}

/// Checks presence, then field types, then the integer-ness of `ticket_count`.
pub fn validate_booking(fields: &BookingFields) -> Result<BookingRequest, BookingError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|name| fields.get(*name).map_or(true, is_falsy))
        .collect();
    if !missing.is_empty() {
        return Err(BookingError::MissingFields(missing));
    }

    let first_name = required_text(fields, ATTR_FIRST_NAME)?;
    let event_name = required_text(fields, ATTR_EVENT_NAME)?;
    let ticket_count = fields
        .get(ATTR_TICKET_COUNT)
        .and_then(parse_ticket_count)
        .ok_or(BookingError::InvalidTicketCount)?;

    Ok(BookingRequest {
        first_name,
        event_name,
        ticket_count,
    })
}

fn required_text(fields: &BookingFields, name: &'static str) -> Result<String, BookingError> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(BookingError::InvalidFieldType(name))
}

/// Empty-ish JSON values are treated the same as an absent key.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

/// Accepts JSON integers, integral floats and base-10 integer strings.
pub fn parse_ticket_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(count) = number.as_i64() {
                return Some(count);
            }
            let float = number.as_f64()?;
            let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
            (float.is_finite() && float.fract() == 0.0 && in_range).then_some(float as i64)
        }
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
