//! Serde helpers for SGT's loosely typed JSON.

use serde::de::Visitor;
use serde::{de, Deserializer};
use std::fmt;

/// Accepts a number or a string containing a number, null becomes `None`.
pub fn flexible_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleIntVisitor;

    impl<'de> Visitor<'de> for FlexibleIntVisitor {
        type Value = Option<i32>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a string containing a number")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(i32::try_from(value).unwrap_or(i32::MAX)))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(i32::try_from(value).unwrap_or(i32::MAX)))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.round() as i32))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.trim().parse::<f64>().ok().map(|v| v.round() as i32))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(FlexibleIntVisitor)
}

/// Accepts a number or a string containing a number, null becomes `None`.
pub fn flexible_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleFloatVisitor;

    impl<'de> Visitor<'de> for FlexibleFloatVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a string containing a number")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.trim().parse::<f64>().ok())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(FlexibleFloatVisitor)
}

/// Accepts a 0/1 integer or a real boolean, null becomes `None`.
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptBoolVisitor;

    impl<'de> Visitor<'de> for OptBoolVisitor {
        type Value = Option<bool>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or a 0/1 integer")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value == 1))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value == 1))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(OptBoolVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::flexible_int")]
        count: Option<i32>,
        #[serde(default, deserialize_with = "super::flexible_float")]
        hcp: Option<f64>,
        #[serde(default, deserialize_with = "super::opt_bool")]
        active: Option<bool>,
    }

    #[test]
    fn numbers_from_strings() {
        let row: Row = serde_json::from_str(r#"{"count": "12", "hcp": "8.4", "active": 1}"#).unwrap();
        assert_eq!(row.count, Some(12));
        assert_eq!(row.hcp, Some(8.4));
        assert_eq!(row.active, Some(true));
    }

    #[test]
    fn nulls_and_missing_become_none() {
        let row: Row = serde_json::from_str(r#"{"count": null}"#).unwrap();
        assert_eq!(row.count, None);
        assert_eq!(row.hcp, None);
        assert_eq!(row.active, None);
    }

    #[test]
    fn junk_strings_become_none() {
        let row: Row = serde_json::from_str(r#"{"count": "n/a", "hcp": "", "active": 0}"#).unwrap();
        assert_eq!(row.count, None);
        assert_eq!(row.hcp, None);
        assert_eq!(row.active, Some(false));
    }
}
