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

//! Request object and its parse/validate pipeline.
//!
//! A call is a JSON object with `jsonrpc` (MUST be exactly "2.0"),
//! `method` (string; names containing "rpc." are reserved for internal
//! methods), optional `params` (array or object) and optional `id`
//! (string, integer, or null). A Request without an id is a notification
//! and must never be answered.
//!
//! Parsing goes text -> tree -> validated Request. Malformed text is
//! `RpcError::Parse`; a well-formed tree that violates the structural
//! rules is `RpcError::InvalidRequest`. Both are returned values; no
//! JSON-layer failure crosses this API.

use crate::constants::{wire, INTERNAL_METHOD_PREFIX};
use crate::errors::RpcError;
use crate::protocol::id::Id;
use crate::protocol::params::Params;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::debug;

/// A single validated RPC call.
///
/// The `"2.0"` version literal is a protocol constant, enforced on parse
/// and emitted on serialize; it is not stored per request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub method: String,
    pub params: Params,
    pub id: Id,
}

impl Request {
    pub fn new(method: impl Into<String>, params: Params, id: Id) -> Self {
        Self {
            method: method.into(),
            params,
            id,
        }
    }

    /// Validate a parsed JSON tree as a Request.
    pub fn from_value(value: &Value) -> Result<Request, RpcError> {
        let members = value.as_object().ok_or_else(|| {
            debug!("request is not a JSON object");
            RpcError::InvalidRequest
        })?;

        // MUST be exactly "2.0"
        match members.get(wire::JSONRPC).and_then(Value::as_str) {
            Some(wire::VERSION) => {}
            _ => {
                debug!("missing or mismatched jsonrpc version");
                return Err(RpcError::InvalidRequest);
            }
        }

        // MUST be a string
        let method = members
            .get(wire::METHOD)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                debug!("missing or non-string method");
                RpcError::InvalidRequest
            })?
            .to_owned();

        // MAY be omitted; if present it MUST be structured. Params itself
        // is lenient, so the shape constraint is enforced here.
        let params = match members.get(wire::PARAMS) {
            None => Params::Null,
            Some(p) if p.is_array() || p.is_object() => Params::from_value(p),
            Some(_) => {
                debug!("params is neither array nor object");
                return Err(RpcError::InvalidRequest);
            }
        };

        // MAY be omitted; if present it MUST be null, an integer, or a string
        let id = match members.get(wire::ID) {
            None => Id::Null,
            Some(raw) => Id::from_value(raw).ok_or_else(|| {
                debug!("id is not null, an integer, or a string");
                RpcError::InvalidRequest
            })?,
        };

        Ok(Request { method, params, id })
    }

    /// The wire form.
    pub fn to_value(&self) -> Value {
        let mut members = Map::new();
        members.insert(wire::JSONRPC.into(), Value::from(wire::VERSION));
        members.insert(wire::METHOD.into(), Value::from(self.method.clone()));
        if !self.params.is_null() {
            members.insert(wire::PARAMS.into(), self.params.to_value());
        }
        if !self.is_notification() {
            members.insert(wire::ID.into(), self.id.to_value());
        }
        Value::Object(members)
    }

    /// True when no id was supplied; the server MUST NOT reply to it.
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }

    /// True for method names reserved for rpc-internal methods and
    /// extensions ("rpc." anywhere in the name).
    pub fn is_internal(&self) -> bool {
        self.method.contains(INTERNAL_METHOD_PREFIX)
    }
}

impl FromStr for Request {
    type Err = RpcError;

    fn from_str(text: &str) -> Result<Request, RpcError> {
        let tree: Value = serde_json::from_str(text).map_err(|e| {
            debug!(error = %e, "request text is not well-formed JSON");
            RpcError::Parse
        })?;
        Request::from_value(&tree)
    }
}

impl Serialize for Request {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields =
            2 + usize::from(!self.params.is_null()) + usize::from(!self.is_notification());
        let mut map = serializer.serialize_map(Some(fields))?;
        map.serialize_entry(wire::JSONRPC, wire::VERSION)?;
        map.serialize_entry(wire::METHOD, &self.method)?;
        if !self.params.is_null() {
            map.serialize_entry(wire::PARAMS, &self.params.to_value())?;
        }
        if !self.is_notification() {
            map.serialize_entry(wire::ID, &self.id)?;
        }
        map.end()
    }
}
