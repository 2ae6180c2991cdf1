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

//! Response object.
//!
//! A reply carries either `result` or `error`, never both and never
//! neither, plus the id of the request it answers. If the request's id
//! could not be determined (parse error, invalid request), the id MUST
//! be null. A non-zero `error.code` is the result-vs-error discriminator.

use crate::constants::wire;
use crate::errors::RpcError;
use crate::protocol::error::ErrorObject;
use crate::protocol::id::Id;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::debug;

/// One RPC reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Success payload; meaningful only while `error` holds the success
    /// sentinel.
    pub result: Value,
    /// Failure payload; `error.code != 0` means this response is an error.
    pub error: ErrorObject,
    pub id: Id,
}

impl Response {
    /// An empty (success, null-result) response for the given id.
    pub fn new(id: Id) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn success(result: Value, id: Id) -> Self {
        Self {
            result,
            error: ErrorObject::default(),
            id,
        }
    }

    pub fn failure(error: ErrorObject, id: Id) -> Self {
        Self {
            result: Value::Null,
            error,
            id,
        }
    }

    /// An error response carrying the reserved code and canonical message
    /// for `err`.
    pub fn from_error(err: &RpcError, id: Id) -> Self {
        Self::failure(ErrorObject::from(err), id)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_error()
    }

    /// The wire form: `result` xor `error`, and always `id`.
    pub fn to_value(&self) -> Value {
        let mut members = Map::new();
        members.insert(wire::JSONRPC.into(), Value::from(wire::VERSION));
        if self.is_error() {
            members.insert(wire::ERROR.into(), self.error.to_value());
        } else {
            members.insert(wire::RESULT.into(), self.result.clone());
        }
        members.insert(wire::ID.into(), self.id.to_value());
        Value::Object(members)
    }

    /// Validate a parsed JSON tree as a Response.
    pub fn from_value(value: &Value) -> Result<Response, RpcError> {
        let members = value.as_object().ok_or_else(|| {
            debug!("response is not a JSON object");
            RpcError::InvalidRequest
        })?;

        match members.get(wire::JSONRPC).and_then(Value::as_str) {
            Some(wire::VERSION) => {}
            _ => return Err(RpcError::InvalidRequest),
        }

        // `id` is REQUIRED; null is the unknown-id form.
        let id = members
            .get(wire::ID)
            .and_then(Id::from_value)
            .ok_or(RpcError::InvalidRequest)?;

        // Exactly one of result / error MUST be present.
        match (members.get(wire::RESULT), members.get(wire::ERROR)) {
            (Some(result), None) => Ok(Response::success(result.clone(), id)),
            (None, Some(raw)) => {
                let error: ErrorObject =
                    serde_json::from_value(raw.clone()).map_err(|_| RpcError::InvalidRequest)?;
                if !error.is_error() {
                    // A code-0 error member would be indistinguishable
                    // from success.
                    return Err(RpcError::InvalidRequest);
                }
                Ok(Response::failure(error, id))
            }
            _ => {
                debug!("response must carry exactly one of result/error");
                Err(RpcError::InvalidRequest)
            }
        }
    }
}

impl FromStr for Response {
    type Err = RpcError;

    fn from_str(text: &str) -> Result<Response, RpcError> {
        let tree: Value = serde_json::from_str(text).map_err(|_| RpcError::Parse)?;
        Response::from_value(&tree)
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(wire::JSONRPC, wire::VERSION)?;
        if self.is_error() {
            map.serialize_entry(wire::ERROR, &self.error)?;
        } else {
            map.serialize_entry(wire::RESULT, &self.result)?;
        }
        map.serialize_entry(wire::ID, &self.id)?;
        map.end()
    }
}
