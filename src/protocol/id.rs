// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Request/response correlation identifier.
//!
//! An identifier established by the Client that MUST contain a String,
//! Number, or Null value if included. If it is not included the request
//! is a notification. Numbers SHOULD NOT contain fractional parts, so
//! only integer-valued numbers are accepted.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A tagged identifier value: null, 64-bit signed integer, or string.
///
/// The derived ordering is the batch serialization order: `Null` sorts
/// before numbers, numbers compare numerically and sort before strings,
/// strings compare lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Id {
    /// Absent or explicit-null id. A request carrying this is a notification.
    #[default]
    Null,
    Number(i64),
    String(String),
}

impl Id {
    /// True for the null-tagged identifier.
    pub fn is_null(&self) -> bool {
        matches!(self, Id::Null)
    }

    /// Convert a JSON value into an identifier.
    ///
    /// Null, integer-valued numbers and strings succeed; any other JSON
    /// type (float, bool, array, object) is not a valid identifier.
    pub fn from_value(value: &Value) -> Option<Id> {
        match value {
            Value::Null => Some(Id::Null),
            Value::Number(n) => n.as_i64().map(Id::Number),
            Value::String(s) => Some(Id::String(s.clone())),
            _ => None,
        }
    }

    /// The wire form: the scalar payload, or JSON null.
    pub fn to_value(&self) -> Value {
        match self {
            Id::Null => Value::Null,
            Id::Number(n) => Value::from(*n),
            Id::String(s) => Value::from(s.clone()),
        }
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Id::Number(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Id::String(id.to_owned())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Id::String(id)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Null => f.write_str("null"),
            Id::Number(n) => write!(f, "{}", n),
            Id::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Id::Null => serializer.serialize_unit(),
            Id::Number(n) => serializer.serialize_i64(*n),
            Id::String(s) => serializer.serialize_str(s),
        }
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, an integer, or a string")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Id, E> {
        Ok(Id::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Id, E> {
        Ok(Id::Null)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
        Ok(Id::Number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
        i64::try_from(v)
            .map(Id::Number)
            .map_err(|_| E::custom("id out of i64 range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
        Ok(Id::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Id, E> {
        Ok(Id::String(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Id, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_accepts_scalars() {
        assert_eq!(Id::from_value(&json!(null)), Some(Id::Null));
        assert_eq!(Id::from_value(&json!(7)), Some(Id::Number(7)));
        assert_eq!(Id::from_value(&json!(-3)), Some(Id::Number(-3)));
        assert_eq!(Id::from_value(&json!("abc")), Some(Id::String("abc".into())));
    }

    #[test]
    fn from_value_rejects_other_types() {
        assert_eq!(Id::from_value(&json!(1.5)), None);
        assert_eq!(Id::from_value(&json!(true)), None);
        assert_eq!(Id::from_value(&json!([1])), None);
        assert_eq!(Id::from_value(&json!({"a": 1})), None);
    }

    #[test]
    fn wire_round_trip() {
        for id in [Id::Null, Id::Number(42), Id::String("x".into())] {
            assert_eq!(Id::from_value(&id.to_value()), Some(id));
        }
    }

    #[test]
    fn ordering_is_null_then_numbers_then_strings() {
        assert!(Id::Null < Id::Number(i64::MIN));
        assert!(Id::Number(i64::MAX) < Id::String(String::new()));
        assert!(Id::Number(1) < Id::Number(2));
        assert!(Id::String("a".into()) < Id::String("b".into()));
    }

    #[test]
    fn serde_rejects_float_id() {
        assert!(serde_json::from_str::<Id>("1.5").is_err());
        assert!(serde_json::from_str::<Id>("true").is_err());
        assert_eq!(serde_json::from_str::<Id>("null").unwrap(), Id::Null);
        assert_eq!(serde_json::from_str::<Id>("12").unwrap(), Id::Number(12));
    }
}
