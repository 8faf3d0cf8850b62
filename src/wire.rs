//! Serde helpers for the Zabbix wire encoding.
//!
//! The API transmits most numbers, flags and enumerations as decimal strings
//! (`"0"`, `"1"`, ...) but accepts and occasionally returns plain JSON numbers.
//! Everything here writes the string form and reads either.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// Declares a Zabbix enumeration transmitted as a numeric string.
///
/// Codes the server sends that are not listed land in `Unknown(code)` and are
/// written back unchanged.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            Unknown(i16),
        }

        impl $name {
            #[must_use]
            pub const fn code(self) -> i16 {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Unknown(code) => code,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from(0)
            }
        }

        impl From<i16> for $name {
            fn from(code: i16) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    other => Self::Unknown(other),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(&self.code())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::wire::deserialize_num::<D, i16>(deserializer).map(Self::from)
            }
        }
    };
}

pub(crate) use wire_enum;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Int(i64),
    Str(String),
}

/// Reads a number sent either as a JSON number or as a decimal string.
///
/// # Errors
///
/// Fails when the string is not a valid `T` or the number is out of range.
pub fn deserialize_num<'de, D, T>(de: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match NumOrStr::deserialize(de)? {
        NumOrStr::Int(value) => value
            .to_string()
            .parse::<T>()
            .map_err(serde::de::Error::custom),
        NumOrStr::Str(value) => value.trim().parse::<T>().map_err(serde::de::Error::custom),
    }
}

/// `serde_with` adapter for integers carried as strings.
pub struct NumStr;

impl<'de, T> DeserializeAs<'de, T> for NumStr
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_num(deserializer)
    }
}

impl<T> SerializeAs<T> for NumStr
where
    T: Display,
{
    fn serialize_as<S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

/// Decodes an object that the server replaces with `[]` when it is empty.
pub(crate) fn object_or_empty_array<'de, D, T>(de: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeObject<T> {
        Empty([(); 0]),
        Object(T),
        Null,
    }

    Ok(match MaybeObject::<T>::deserialize(de)? {
        MaybeObject::Object(value) => Some(value),
        MaybeObject::Empty(_) | MaybeObject::Null => None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_with::serde_as;

    use super::NumStr;

    wire_enum! {
        pub enum Sample {
            Zero = 0,
            Two = 2,
        }
    }

    #[serde_as]
    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Counter {
        #[serde_as(as = "NumStr")]
        value: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<NumStr>")]
        optional: Option<i64>,
    }

    #[derive(Debug, Deserialize)]
    struct Details {
        #[serde(default, deserialize_with = "super::object_or_empty_array")]
        details: Option<Counter>,
    }

    #[test]
    fn enum_writes_numeric_string() {
        let encoded = serde_json::to_string(&Sample::Two).unwrap();
        assert_eq!(encoded, r#""2""#);
    }

    #[test]
    fn enum_reads_string_or_number_and_keeps_unknown_codes() {
        let from_str: Sample = serde_json::from_str(r#""0""#).unwrap();
        let from_num: Sample = serde_json::from_str("2").unwrap();
        let unknown: Sample = serde_json::from_str(r#""9""#).unwrap();
        assert_eq!(from_str, Sample::Zero);
        assert_eq!(from_num, Sample::Two);
        assert_eq!(unknown, Sample::Unknown(9));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), r#""9""#);
    }

    #[test]
    fn enum_rejects_non_numeric_text() {
        assert!(serde_json::from_str::<Sample>(r#""two""#).is_err());
    }

    #[test]
    fn num_str_round_trips_through_string_form() {
        let counter: Counter = serde_json::from_str(r#"{"value":"42","optional":7}"#).unwrap();
        assert_eq!(
            counter,
            Counter {
                value: 42,
                optional: Some(7)
            }
        );
        assert_eq!(
            serde_json::to_string(&counter).unwrap(),
            r#"{"value":"42","optional":"7"}"#
        );
    }

    #[test]
    fn empty_array_decodes_to_none() {
        let empty: Details = serde_json::from_str(r#"{"details":[]}"#).unwrap();
        let missing: Details = serde_json::from_str("{}").unwrap();
        let present: Details = serde_json::from_str(r#"{"details":{"value":"3"}}"#).unwrap();
        assert!(empty.details.is_none());
        assert!(missing.details.is_none());
        assert_eq!(present.details.map(|d| d.value), Some(3));
    }
}
