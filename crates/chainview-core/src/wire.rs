//! Serde hooks for wire-format field encodings.
//!
//! Cosmos protobuf-JSON encodes byte sequences as base64 strings, durations as
//! `"1209600s"`-style text, and 64-bit integers as decimal strings. The
//! modules here plug into `#[serde(with = "…")]` on the typed parameter
//! records so that decoding stays purely structural: no message semantics,
//! just text → typed value with a hard failure on malformed input.
//!
//! Field-name normalization (snake_case on the wire, camelCase on output) is
//! handled by `#[serde(rename_all(serialize = "camelCase"))]` on each record.

/// `"aGVsbG8="` ⇄ `Vec<u8>`; invalid base64 fails the enclosing decode.
pub mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        STANDARD
            .decode(text.as_bytes())
            .map_err(|e| serde::de::Error::custom(format!("invalid base64: {e}")))
    }

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&STANDARD.encode(bytes))
    }
}

/// `"1209600s"` / `"1h30m"` ⇄ `std::time::Duration`.
pub mod duration_text {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text)
            .map_err(|e| serde::de::Error::custom(format!("invalid duration {text:?}: {e}")))
    }

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&humantime::format_duration(*duration))
    }
}

/// `"5"` (or a bare number) ⇄ `u64`. Protobuf JSON emits 64-bit integers as
/// strings; some legacy encoders emit plain numbers.
pub mod u64_string {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(u64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => s
                .parse::<u64>()
                .map_err(|e| serde::de::Error::custom(format!("invalid integer {s:?}: {e}"))),
        }
    }

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(with = "super::base64_bytes")]
        data: Vec<u8>,
        #[serde(with = "super::duration_text")]
        period: Duration,
        #[serde(with = "super::u64_string")]
        sequence: u64,
    }

    #[test]
    fn decodes_wire_encodings() {
        let probe: Probe = serde_json::from_value(serde_json::json!({
            "data": "aGVsbG8=",
            "period": "1209600s",
            "sequence": "5",
        }))
        .unwrap();
        assert_eq!(probe.data, b"hello");
        assert_eq!(probe.period, Duration::from_secs(1_209_600));
        assert_eq!(probe.sequence, 5);
    }

    #[test]
    fn accepts_bare_numbers_for_integers() {
        let probe: Probe = serde_json::from_value(serde_json::json!({
            "data": "",
            "period": "60s",
            "sequence": 7,
        }))
        .unwrap();
        assert_eq!(probe.sequence, 7);
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = serde_json::from_value::<Probe>(serde_json::json!({
            "data": "%%not-base64%%",
            "period": "60s",
            "sequence": "1",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid base64"));
    }

    #[test]
    fn rejects_invalid_duration() {
        let err = serde_json::from_value::<Probe>(serde_json::json!({
            "data": "",
            "period": "fortnight",
            "sequence": "1",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid duration"));
    }

    #[test]
    fn rejects_non_numeric_integer_text() {
        let err = serde_json::from_value::<Probe>(serde_json::json!({
            "data": "",
            "period": "60s",
            "sequence": "five",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid integer"));
    }

    #[test]
    fn serializes_back_to_wire_text() {
        let probe = Probe {
            data: b"hello".to_vec(),
            period: Duration::from_secs(90),
            sequence: 12,
        };
        let value = serde_json::to_value(&probe).unwrap();
        assert_eq!(value["data"], "aGVsbG8=");
        assert_eq!(value["sequence"], "12");
    }
}
