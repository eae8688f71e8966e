//! Card data models and API request/response types.
//!
//! This module defines:
//! - `Card`: The stored record
//! - `CreateCardRequest`: Raw request body for creating cards
//! - `NewCard`: Validated, trimmed input ready to be stored
//! - `DeletedCardResponse`: Response body returned after a delete

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// A playing card held in the in-memory collection.
///
/// `id` is assigned by the store and never reused, even after the card is
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub suit: String,
    pub value: String,
}

impl Card {
    pub fn new(id: i64, suit: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            suit: suit.into(),
            value: value.into(),
        }
    }
}

/// Request body for creating a new card.
///
/// # JSON Example
///
/// ```json
/// {
///   "suit": "Clubs",
///   "value": "Jack"
/// }
/// ```
///
/// Fields are kept as raw JSON so that a missing field and a field of the
/// wrong type both reach validation instead of failing deserialization.
#[derive(Debug, Default)]
pub struct CreateCardRequest {
    pub suit: Option<Value>,
    pub value: Option<Value>,
}

/// Only a JSON object carries fields; any other body is treated as empty.
impl From<Value> for CreateCardRequest {
    fn from(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                suit: fields.remove("suit"),
                value: fields.remove("value"),
            },
            _ => Self::default(),
        }
    }
}

/// Validated card input.
///
/// # Validation
///
/// - `suit`: Required string, non-empty after trimming
/// - `value`: Required string, non-empty after trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub suit: String,
    pub value: String,
}

impl NewCard {
    /// Attach a freshly allocated id.
    pub fn into_card(self, id: i64) -> Card {
        Card {
            id,
            suit: self.suit,
            value: self.value,
        }
    }
}

fn required_string(field: Option<Value>) -> Option<String> {
    match field {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

impl TryFrom<CreateCardRequest> for NewCard {
    type Error = AppError;

    fn try_from(request: CreateCardRequest) -> Result<Self, Self::Error> {
        let suit = required_string(request.suit).ok_or(AppError::InvalidCardBody)?;
        let value = required_string(request.value).ok_or(AppError::InvalidCardBody)?;

        Ok(Self { suit, value })
    }
}

/// Response returned after deleting a card.
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "Card with ID 1 removed.",
///   "card": { "id": 1, "suit": "Hearts", "value": "Ace" }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct DeletedCardResponse {
    pub message: String,
    pub card: Card,
}

impl From<Card> for DeletedCardResponse {
    fn from(card: Card) -> Self {
        Self {
            message: format!("Card with ID {} removed.", card.id),
            card,
        }
    }
}

/// Parse a path-supplied id.
///
/// The segment is read as a number the way JavaScript's `Number()` reads a
/// string: surrounding whitespace is ignored, an empty string is 0, decimal,
/// exponent and `0x`/`0o`/`0b` forms are accepted, as is `Infinity`.
/// Anything else is rejected with `AppError::InvalidId`.
///
/// Returns `Ok(None)` for a number no card can carry (fractional, infinite
/// or outside `i64`); callers report that as `CardNotFound`.
pub fn parse_card_id(raw: &str) -> Result<Option<i64>, AppError> {
    let number = parse_number(raw.trim()).ok_or(AppError::InvalidId)?;

    Ok(integral_id(number))
}

fn parse_number(s: &str) -> Option<f64> {
    match s {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some((radix, digits)) = radix_digits(s) {
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    // `f64::from_str` also takes "inf"/"nan" spellings, which are not numbers here.
    if s.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn radix_digits(s: &str) -> Option<(u32, &str)> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

fn integral_id(number: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.fract() == 0.0 && in_range).then(|| number as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateCardRequest {
        CreateCardRequest::from(body)
    }

    #[test]
    fn trims_valid_fields() {
        let card = NewCard::try_from(request(json!({ "suit": "  Clubs ", "value": "Jack\n" })))
            .unwrap();
        assert_eq!(
            card,
            NewCard {
                suit: "Clubs".to_string(),
                value: "Jack".to_string()
            }
        );
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(matches!(
            NewCard::try_from(request(json!({ "suit": "Clubs" }))),
            Err(AppError::InvalidCardBody)
        ));
        assert!(matches!(
            NewCard::try_from(request(json!({}))),
            Err(AppError::InvalidCardBody)
        ));
    }

    #[test]
    fn rejects_non_string_fields() {
        for body in [
            json!({ "suit": 7, "value": "Jack" }),
            json!({ "suit": "Clubs", "value": null }),
            json!({ "suit": ["Clubs"], "value": "Jack" }),
            json!({ "suit": "Clubs", "value": { "v": "Jack" } }),
        ] {
            assert!(matches!(
                NewCard::try_from(request(body)),
                Err(AppError::InvalidCardBody)
            ));
        }
    }

    #[test]
    fn rejects_non_object_bodies() {
        for body in [json!(["Clubs", "Jack"]), json!("Clubs"), json!(7), Value::Null] {
            assert!(matches!(
                NewCard::try_from(request(body)),
                Err(AppError::InvalidCardBody)
            ));
        }
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            NewCard::try_from(request(json!({ "suit": "   ", "value": "Jack" }))),
            Err(AppError::InvalidCardBody)
        ));
        assert!(matches!(
            NewCard::try_from(request(json!({ "suit": "Clubs", "value": "" }))),
            Err(AppError::InvalidCardBody)
        ));
    }

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_card_id("42").unwrap(), Some(42));
        assert_eq!(parse_card_id(" 7 ").unwrap(), Some(7));
        assert_eq!(parse_card_id("-1").unwrap(), Some(-1));
        assert_eq!(parse_card_id("+3").unwrap(), Some(3));
        assert_eq!(parse_card_id("").unwrap(), Some(0));
    }

    #[test]
    fn parses_other_numeric_forms() {
        assert_eq!(parse_card_id("1.0").unwrap(), Some(1));
        assert_eq!(parse_card_id("1e0").unwrap(), Some(1));
        assert_eq!(parse_card_id("2.").unwrap(), Some(2));
        assert_eq!(parse_card_id("0x10").unwrap(), Some(16));
        assert_eq!(parse_card_id("0B11").unwrap(), Some(3));
        assert_eq!(parse_card_id("0o7").unwrap(), Some(7));
    }

    #[test]
    fn numbers_no_card_can_have_parse_to_none() {
        for raw in [
            "1.5",
            ".5",
            "99999999999999999999",
            "1e300",
            "Infinity",
            "-Infinity",
        ] {
            assert_eq!(parse_card_id(raw).unwrap(), None, "{raw}");
        }
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for bad in [
            "abc", "4x", "1e", "0x", "0xg", "-0x10", "inf", "NaN", "infinity", "1 2", "1_000",
        ] {
            assert!(
                matches!(parse_card_id(bad), Err(AppError::InvalidId)),
                "{bad}"
            );
        }
    }

    #[test]
    fn delete_message_names_the_id() {
        let response = DeletedCardResponse::from(Card::new(3, "Diamonds", "Queen"));
        assert_eq!(response.message, "Card with ID 3 removed.");
        assert_eq!(response.card.id, 3);
    }
}
