//! JSON bridge between application fact types and the wire format
//!
//! Raw-text mode bypasses this module entirely: `publish_raw` posts the
//! caller's string verbatim and `subscribe_raw` injects an identity decode,
//! so nothing is quoted or parsed on the way through.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub(crate) fn encode<T: Serialize>(fact: &T) -> Result<String> {
    Ok(serde_json::to_string(fact)?)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactbusError;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Reading {
        sensor: String,
        value: f64,
    }

    #[test]
    fn test_encode_struct() {
        let reading = Reading {
            sensor: "t-1".to_string(),
            value: 21.5,
        };
        assert_eq!(encode(&reading).unwrap(), r#"{"sensor":"t-1","value":21.5}"#);
    }

    #[test]
    fn test_encode_string_quotes_it() {
        // A String fact is a JSON string on the wire; the unquoted
        // pass-through is publish_raw.
        assert_eq!(encode(&"hello".to_string()).unwrap(), r#""hello""#);
    }

    #[test]
    fn test_decode_struct() {
        let reading: Reading = decode(r#"{"sensor":"t-1","value":21.5}"#).unwrap();
        assert_eq!(
            reading,
            Reading {
                sensor: "t-1".to_string(),
                value: 21.5
            }
        );
    }

    #[test]
    fn test_decode_malformed_body() {
        let result = decode::<Reading>("not json");
        assert!(matches!(result, Err(FactbusError::Serialization(_))));
    }
}
