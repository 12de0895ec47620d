//! Wire-format normalization helpers.
//!
//! The backend serializes decimal amounts either as JSON numbers or as
//! strings ("1500.00"), depending on the endpoint. Normalizing here
//! keeps every other layer working with plain `f64`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Deserialize an amount that may arrive as a number or a string.
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0.0)
            } else {
                trimmed.parse().map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::amount")]
        value: f64,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let from_number: Holder = serde_json::from_str(r#"{"value": 1500.5}"#).unwrap();
        assert_eq!(from_number.value, 1500.5);

        let from_string: Holder = serde_json::from_str(r#"{"value": "1500.50"}"#).unwrap();
        assert_eq!(from_string.value, 1500.5);

        let from_blank: Holder = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(from_blank.value, 0.0);
    }
}
