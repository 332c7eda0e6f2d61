//! Wire formats shared by the response and request models.

/// `YYYY-MM-DD HH:MM:SS`, rendered in UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

pub mod optional_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::timestamp::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super::timestamp")] DateTime<Utc>);

        Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(value)| value))
    }
}

/// NUMERIC values travel as JSON numbers. Strings are accepted on input.
///
/// Input is rejected unless it can be written back as a finite JSON number,
/// so nothing is stored that a later read could not render.
pub mod decimal {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::{Number, Value};

    pub fn to_number(value: &BigDecimal) -> Result<Number, serde_json::Error> {
        Number::from_str(&value.to_string())
    }

    pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        to_number(value)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Value::deserialize(deserializer)? {
            Value::Number(number) => {
                BigDecimal::from_str(&number.to_string()).map_err(serde::de::Error::custom)?
            }
            Value::String(s) => BigDecimal::from_str(s.trim()).map_err(serde::de::Error::custom)?,
            other => {
                return Err(serde::de::Error::custom(format!(
                    "expected a numeric value, found {}",
                    other
                )));
            }
        };

        if to_number(&value).is_err() {
            return Err(serde::de::Error::custom(format!(
                "numeric value {} is out of range",
                value
            )));
        }

        Ok(value)
    }
}
