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

//! Batch request parsing.
//!
//! A client MAY send an array of Request objects. Every element is run
//! through the Request pipeline independently and kept in input order
//! with its own status; one malformed item never aborts or discards the
//! others. A single top-level object is a one-element batch. Only a bad
//! container (non-array/non-object, or an empty array) fails the batch
//! as a whole.

use crate::constants::wire;
use crate::errors::RpcError;
use crate::protocol::id::Id;
use crate::protocol::request::Request;
use serde_json::Value;
use std::str::FromStr;
use tracing::debug;

/// One batch element: the parsed request and the outcome of its own
/// parse/validate run.
///
/// For a rejected element the request is empty except for the id, which
/// is salvaged from the raw element when possible so the host can still
/// correlate an error Response to it.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    pub request: Request,
    pub status: Result<(), RpcError>,
}

impl BatchItem {
    fn ok(request: Request) -> Self {
        Self {
            request,
            status: Ok(()),
        }
    }

    fn rejected(raw: &Value, err: RpcError) -> Self {
        let id = raw
            .as_object()
            .and_then(|members| members.get(wire::ID))
            .and_then(Id::from_value)
            .unwrap_or_default();
        Self {
            request: Request {
                id,
                ..Request::default()
            },
            status: Err(err),
        }
    }
}

/// An ordered set of (Request, status) pairs parsed from one wire value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchRequest {
    items: Vec<BatchItem>,
    single: bool,
}

impl BatchRequest {
    /// Parse a JSON tree that is either a single Request object or an
    /// array of them.
    ///
    /// Array input always succeeds at the batch level unless it is empty;
    /// per-element failures are recorded in the item statuses. Object
    /// input is a one-element batch whose only status records the
    /// element's outcome. Anything else is a batch-level
    /// `RpcError::InvalidRequest` with no items.
    pub fn from_value(value: &Value) -> Result<BatchRequest, RpcError> {
        match value {
            Value::Array(elements) => {
                if elements.is_empty() {
                    debug!("empty batch array");
                    return Err(RpcError::InvalidRequest);
                }
                let items = elements
                    .iter()
                    .map(|element| match Request::from_value(element) {
                        Ok(request) => BatchItem::ok(request),
                        Err(err) => {
                            debug!(code = err.code(), "batch item rejected");
                            BatchItem::rejected(element, err)
                        }
                    })
                    .collect();
                Ok(BatchRequest {
                    items,
                    single: false,
                })
            }
            Value::Object(_) => {
                let item = match Request::from_value(value) {
                    Ok(request) => BatchItem::ok(request),
                    Err(err) => BatchItem::rejected(value, err),
                };
                Ok(BatchRequest {
                    items: vec![item],
                    single: true,
                })
            }
            _ => {
                debug!("batch container is neither array nor object");
                Err(RpcError::InvalidRequest)
            }
        }
    }

    pub fn items(&self) -> &[BatchItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<BatchItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the wire input was a single object rather than an array;
    /// the reply must then be a single Response object too.
    pub fn is_single(&self) -> bool {
        self.single
    }
}

impl FromStr for BatchRequest {
    type Err = RpcError;

    fn from_str(text: &str) -> Result<BatchRequest, RpcError> {
        let tree: Value = serde_json::from_str(text).map_err(|e| {
            debug!(error = %e, "batch text is not well-formed JSON");
            RpcError::Parse
        })?;
        BatchRequest::from_value(&tree)
    }
}
