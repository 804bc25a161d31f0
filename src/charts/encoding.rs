//! Serde helpers for the string-typed scalars of the chart JSON format.
//!
//! The renderer expects every option and data value as a string: flags are
//! `"0"`/`"1"` and numbers are decimal text. These modules keep the Rust side
//! typed while producing that wire shape.

use std::fmt::Display;
use std::str::FromStr;

use serde::de;

/// Numbers the renderer can draw. Floats must be finite: `"NaN"` and
/// `"inf"` parse as `f64` but are not valid chart values.
pub trait Scalar: FromStr + Display {
    fn is_drawable(&self) -> bool {
        true
    }
}

impl Scalar for f64 {
    fn is_drawable(&self) -> bool {
        self.is_finite()
    }
}

impl Scalar for u8 {}
impl Scalar for u32 {}

fn parse_scalar<T, E>(raw: &str) -> Result<T, E>
where
    T: Scalar,
    T::Err: Display,
    E: de::Error,
{
    let value: T = raw
        .trim()
        .parse()
        .map_err(|e| E::custom(format!("invalid number {raw:?}: {e}")))?;
    if !value.is_drawable() {
        return Err(E::custom(format!("invalid number {raw:?}: must be finite")));
    }
    Ok(value)
}

/// A required number carried as a string.
pub mod number {
    use std::fmt::Display;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::Scalar;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Scalar,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_scalar(&raw)
    }
}

/// An optional number carried as a string.
pub mod opt_number {
    use std::fmt::Display;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::Scalar;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Scalar,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_scalar(&raw))
            .transpose()
    }
}

/// A boolean carried as `"0"` or `"1"`.
pub mod flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<bool, String> {
        match raw.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(format!("expected \"0\" or \"1\", got {other:?}")),
        }
    }
}

/// An optional boolean carried as `"0"` or `"1"`.
pub mod opt_flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::flag::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::flag::parse(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
