use serde::{Deserialize, Deserializer, de};

/// Inbound query parameters for the weather proxy route.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

impl WeatherQuery {
    /// The requested city, trimmed; `None` when absent or blank.
    pub fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}

/// Application-level status code embedded in upstream payloads.
///
/// OpenWeather encodes `cod` as an integer on success and as a string on
/// error payloads; both forms deserialize into the same numeric type so a
/// comparison cannot silently miss one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalStatus(pub u16);

impl LogicalStatus {
    pub const OK: Self = Self(200);
    pub const NOT_FOUND: Self = Self(404);
}

impl<'de> Deserialize<'de> for LogicalStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatusVisitor;

        impl de::Visitor<'_> for StatusVisitor {
            type Value = LogicalStatus;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an integer or numeric-string status code")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                u16::try_from(value)
                    .map(LogicalStatus)
                    .map_err(|_| E::custom(format!("status code out of range: {value}")))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                u16::try_from(value)
                    .map(LogicalStatus)
                    .map_err(|_| E::custom(format!("status code out of range: {value}")))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value
                    .parse::<u16>()
                    .map(LogicalStatus)
                    .map_err(|_| E::custom(format!("status code is not numeric: {value:?}")))
            }
        }

        deserializer.deserialize_any(StatusVisitor)
    }
}

/// Partial view of an upstream payload: the logical error channel only.
///
/// Success payloads are passed through without reshaping, so this is the
/// only deserialization the proxy performs on them.
#[derive(Debug, Deserialize)]
pub struct UpstreamEnvelope {
    pub cod: Option<LogicalStatus>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> UpstreamEnvelope {
        UpstreamEnvelope::deserialize(&value).expect("envelope deserializes")
    }

    #[test]
    fn city_accessor_trims_and_rejects_blank() {
        let query = |city: Option<&str>| WeatherQuery {
            city: city.map(str::to_string),
        };

        assert_eq!(query(Some("  Kyiv ")).city(), Some("Kyiv"));
        assert_eq!(query(Some("")).city(), None);
        assert_eq!(query(Some("   ")).city(), None);
        assert_eq!(query(None).city(), None);
    }

    #[test]
    fn integer_cod_deserializes() {
        let parsed = envelope(json!({"cod": 200}));

        assert_eq!(parsed.cod, Some(LogicalStatus::OK));
    }

    #[test]
    fn string_cod_deserializes() {
        let parsed = envelope(json!({"cod": "404", "message": "city not found"}));

        assert_eq!(parsed.cod, Some(LogicalStatus::NOT_FOUND));
        assert_eq!(parsed.message.as_deref(), Some("city not found"));
    }

    #[test]
    fn both_encodings_compare_equal() {
        let as_int = envelope(json!({"cod": 404}));
        let as_str = envelope(json!({"cod": "404"}));

        assert_eq!(as_int.cod, as_str.cod);
    }

    #[test]
    fn missing_cod_is_none() {
        let parsed = envelope(json!({"name": "Kyiv"}));

        assert_eq!(parsed.cod, None);
    }

    #[test]
    fn non_numeric_cod_is_an_error() {
        let value = json!({"cod": "teapot"});

        assert!(UpstreamEnvelope::deserialize(&value).is_err());
    }

    #[test]
    fn out_of_range_cod_is_an_error() {
        let value = json!({"cod": 100_000});

        assert!(UpstreamEnvelope::deserialize(&value).is_err());
    }
}
