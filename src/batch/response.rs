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

//! Batch response collection.
//!
//! An id-keyed, de-duplicating set of Responses. The first insert for a
//! given id wins; a later insert for the same id is rejected and leaves
//! the stored entry unchanged, so duplicate results from racing handlers
//! cannot clobber each other. Null-id responses are uncorrelated (the
//! protocol uses a null id when the request's id is unknown) and are
//! always accepted.
//!
//! Serialization is ordered by id - null entries first, then numeric,
//! then string ids - so the output is deterministic no matter in which
//! order concurrent handlers completed. An empty collection serializes
//! to nothing at all, never to an empty array.

use crate::protocol::id::Id;
use crate::protocol::response::Response;
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct BatchResponse {
    /// Responses for correlatable (non-null) ids, kept in id order.
    keyed: BTreeMap<Id, Response>,
    /// Unknown-id responses, kept in arrival order.
    unkeyed: Vec<Response>,
}

impl BatchResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-if-absent. Returns false when a response for the same
    /// non-null id is already stored; null-id responses always succeed.
    pub fn add(&mut self, response: Response) -> bool {
        if response.id.is_null() {
            self.unkeyed.push(response);
            return true;
        }
        match self.keyed.entry(response.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(response);
                true
            }
            Entry::Occupied(_) => {
                warn!(id = %response.id, "duplicate response id rejected");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.unkeyed.len() + self.keyed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unkeyed.is_empty() && self.keyed.is_empty()
    }

    /// All stored responses in serialization order (null ids first).
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.unkeyed.iter().chain(self.keyed.values())
    }

    /// The wire form: a JSON array in id order, or nothing when no
    /// response was stored (the server MUST NOT return an empty array).
    pub fn to_value(&self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        Some(Value::Array(
            self.iter().map(Response::to_value).collect(),
        ))
    }
}
