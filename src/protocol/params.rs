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

//! Call parameters.
//!
//! If present, parameters MUST be a structured value: by-position through
//! an Array or by-name through an Object. This type is deliberately
//! lenient when converting from JSON (anything else collapses to `Null`);
//! the protocol-level shape constraint is enforced by `Request` parsing,
//! one layer up.

use serde_json::{Map, Value};

/// Tagged parameter payload: absent, positional, or named.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Params {
    /// No parameters were supplied.
    #[default]
    Null,
    /// By-position: values in the server's expected order.
    Array(Vec<Value>),
    /// By-name: member names matching the server's expected parameter
    /// names, exactly and case-sensitively.
    Map(Map<String, Value>),
}

impl Params {
    /// Shape-directed conversion: array -> `Array`, object -> `Map`,
    /// anything else -> `Null`. Never fails.
    pub fn from_value(value: &Value) -> Params {
        match value {
            Value::Array(items) => Params::Array(items.clone()),
            Value::Object(members) => Params::Map(members.clone()),
            _ => Params::Null,
        }
    }

    /// The wire form: the payload, or JSON null when absent.
    pub fn to_value(&self) -> Value {
        match self {
            Params::Null => Value::Null,
            Params::Array(items) => Value::Array(items.clone()),
            Params::Map(members) => Value::Object(members.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Params::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Params::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Params::Map(_))
    }

    /// Number of positional values or named members; 0 when absent.
    pub fn len(&self) -> usize {
        match self {
            Params::Null => 0,
            Params::Array(items) => items.len(),
            Params::Map(members) => members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positional lookup. `None` when out of range or not an array.
    pub fn get(&self, idx: usize) -> Option<&Value> {
        match self {
            Params::Array(items) => items.get(idx),
            _ => None,
        }
    }

    /// Named lookup. `None` when the member is missing or this is not a map.
    pub fn get_named(&self, key: &str) -> Option<&Value> {
        match self {
            Params::Map(members) => members.get(key),
            _ => None,
        }
    }

    /// Positional lookup with a fallback; never fails.
    pub fn get_or(&self, idx: usize, default: Value) -> Value {
        self.get(idx).cloned().unwrap_or(default)
    }

    /// Named lookup with a fallback; never fails.
    pub fn get_named_or(&self, key: &str, default: Value) -> Value {
        self.get_named(key).cloned().unwrap_or(default)
    }

    /// True when the index exists. Wrong-tag access is `false`, not an error.
    pub fn has(&self, idx: usize) -> bool {
        self.get(idx).is_some()
    }

    /// True when the member exists. Wrong-tag access is `false`, not an error.
    pub fn has_named(&self, key: &str) -> bool {
        self.get_named(key).is_some()
    }
}
