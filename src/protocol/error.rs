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

//! Wire error object.
//!
//! When a call fails, the Response MUST contain an error member with
//! `code` (integer) and `message` (string), plus an optional `data`
//! payload defined by the server. `data` is omitted from the wire when
//! absent.

use crate::constants::codes;
use crate::errors::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `error` member of a Response.
///
/// A default-constructed object carries the code-0 success sentinel; a
/// Response treats any non-zero code as "error present".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(code: i64, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// True unless this is the code-0 success sentinel.
    pub fn is_error(&self) -> bool {
        self.code != codes::SUCCESS
    }

    pub fn to_value(&self) -> Value {
        // Serialization of this struct cannot fail; only maps with
        // non-string keys can make serde_json error here.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<RpcError> for ErrorObject {
    fn from(err: RpcError) -> Self {
        ErrorObject::new(err.code(), err.to_string())
    }
}

impl From<&RpcError> for ErrorObject {
    fn from(err: &RpcError) -> Self {
        ErrorObject::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_is_omitted_when_absent() {
        let err = ErrorObject::new(-32601, "Method not found");
        assert_eq!(
            err.to_value(),
            json!({"code": -32601, "message": "Method not found"})
        );
    }

    #[test]
    fn data_is_emitted_when_present() {
        let err = ErrorObject::with_data(-32602, "Invalid params", json!({"expected": 2}));
        assert_eq!(
            err.to_value(),
            json!({"code": -32602, "message": "Invalid params", "data": {"expected": 2}})
        );
    }

    #[test]
    fn default_is_the_success_sentinel() {
        assert!(!ErrorObject::default().is_error());
        assert!(ErrorObject::new(-32700, "Parse error").is_error());
    }

    #[test]
    fn built_from_rpc_error() {
        let err = ErrorObject::from(RpcError::InvalidRequest);
        assert_eq!(err.code, -32600);
        assert_eq!(err.message, "Invalid Request");
        assert_eq!(err.data, None);
    }
}
