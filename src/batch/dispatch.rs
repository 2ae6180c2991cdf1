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

//! Concurrent batch dispatch.
//!
//! The protocol lets a server process a batch "as a set of concurrent
//! tasks, in any order and with any width of parallelism". This module
//! is that host loop: each batch item runs on its own tokio task, and
//! completions land in a shared `BatchResponse` behind a mutex that is
//! locked only for the single insert-if-absent - there is no lock over
//! the batch as a whole. The sorted-by-id serialization of
//! `BatchResponse` is what keeps the output deterministic regardless of
//! completion order.

use crate::batch::request::{BatchItem, BatchRequest};
use crate::batch::response::BatchResponse;
use crate::protocol::error::ErrorObject;
use crate::protocol::id::Id;
use crate::protocol::request::Request;
use crate::protocol::response::Response;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, trace};

/// Application-level method dispatcher.
///
/// Maps one validated Request to its result. Failures are reported as
/// wire error objects; `MethodNotFound`, `InvalidParams` and `Internal`
/// originate here, never in the model layer.
#[async_trait]
pub trait MethodHandler: Send + Sync + 'static {
    async fn call(&self, request: &Request) -> Result<Value, ErrorObject>;
}

/// Run one full round over raw text: parse, dispatch, correlate.
///
/// `None` means "send nothing" (a lone notification, or a batch of
/// them). A bad container (malformed text, non-array/non-object, empty
/// array) collapses to a single `id: null` error Response object per the
/// protocol's fallback rule.
pub async fn dispatch<H: MethodHandler>(handler: &Arc<H>, text: &str) -> Option<Value> {
    match text.parse::<BatchRequest>() {
        Ok(batch) => dispatch_batch(handler, batch).await,
        Err(err) => Some(Response::from_error(&err, Id::Null).to_value()),
    }
}

/// As [`dispatch`], starting from an already-parsed JSON tree.
pub async fn dispatch_value<H: MethodHandler>(handler: &Arc<H>, tree: &Value) -> Option<Value> {
    match BatchRequest::from_value(tree) {
        Ok(batch) => dispatch_batch(handler, batch).await,
        Err(err) => Some(Response::from_error(&err, Id::Null).to_value()),
    }
}

async fn dispatch_batch<H: MethodHandler>(handler: &Arc<H>, batch: BatchRequest) -> Option<Value> {
    // A single (non-array) request answers with a single object, never a
    // one-element array.
    if batch.is_single() {
        let item = batch.into_items().pop()?;
        return answer(handler, item).await.map(|r| r.to_value());
    }

    let collected = Arc::new(Mutex::new(BatchResponse::new()));
    let mut tasks = JoinSet::new();

    for item in batch.into_items() {
        let handler = Arc::clone(handler);
        let collected = Arc::clone(&collected);
        tasks.spawn(async move {
            if let Some(response) = answer(&handler, item).await {
                // Lock only around the insert; at-most-once-per-id is the
                // sole synchronization the batch needs.
                let accepted = collected
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .add(response);
                if !accepted {
                    debug!("discarded duplicate-id response");
                }
            }
        });
    }
    while tasks.join_next().await.is_some() {}

    let collected = collected
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    collected.to_value()
}

/// Produce the Response for one item, or `None` for a notification.
async fn answer<H: MethodHandler>(handler: &Arc<H>, item: BatchItem) -> Option<Response> {
    if let Err(err) = &item.status {
        // A rejected item always gets an error Response; its id is the
        // salvaged original or null.
        return Some(Response::from_error(err, item.request.id));
    }
    if item.request.is_notification() {
        trace!(method = %item.request.method, "notification dispatched, no response");
        handler.call(&item.request).await.ok();
        return None;
    }
    trace!(method = %item.request.method, id = %item.request.id, "dispatching request");
    let response = match handler.call(&item.request).await {
        Ok(result) => Response::success(result, item.request.id),
        Err(error) => Response::failure(error, item.request.id),
    };
    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::codes;
    use crate::errors::RpcError;
    use serde_json::json;

    /// Minimal arithmetic service, the classic JSON-RPC subtract example.
    struct Subtract;

    #[async_trait]
    impl MethodHandler for Subtract {
        async fn call(&self, request: &Request) -> Result<Value, ErrorObject> {
            match request.method.as_str() {
                "subtract" => {
                    let (a, b) = if request.params.is_map() {
                        (
                            request.params.get_named("minuend").cloned(),
                            request.params.get_named("subtrahend").cloned(),
                        )
                    } else {
                        (request.params.get(0).cloned(), request.params.get(1).cloned())
                    };
                    match (a.and_then(|v| v.as_i64()), b.and_then(|v| v.as_i64())) {
                        (Some(a), Some(b)) => Ok(json!(a - b)),
                        _ => Err(ErrorObject::from(RpcError::InvalidParams)),
                    }
                }
                "ping" => Ok(json!("pong")),
                _ => Err(ErrorObject::from(RpcError::MethodNotFound)),
            }
        }
    }

    #[tokio::test]
    async fn single_request_yields_a_single_object() {
        let handler = Arc::new(Subtract);
        let out = dispatch(
            &handler,
            r#"{"jsonrpc": "2.0", "method": "subtract", "params": [42, 23], "id": 1}"#,
        )
        .await;
        assert_eq!(out, Some(json!({"jsonrpc": "2.0", "result": 19, "id": 1})));
    }

    #[tokio::test]
    async fn single_notification_yields_nothing() {
        let handler = Arc::new(Subtract);
        let out = dispatch(&handler, r#"{"jsonrpc": "2.0", "method": "ping"}"#).await;
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn unknown_method_yields_method_not_found() {
        let handler = Arc::new(Subtract);
        let out = dispatch(&handler, r#"{"jsonrpc": "2.0", "method": "foobar", "id": "1"}"#).await;
        assert_eq!(
            out,
            Some(json!({
                "jsonrpc": "2.0",
                "error": {"code": -32601, "message": "Method not found"},
                "id": "1"
            }))
        );
    }

    #[tokio::test]
    async fn malformed_text_collapses_to_a_single_null_id_error() {
        let handler = Arc::new(Subtract);
        let out = dispatch(&handler, r#"{"jsonrpc": "2.0", "method""#).await;
        assert_eq!(
            out,
            Some(json!({
                "jsonrpc": "2.0",
                "error": {"code": -32700, "message": "Parse error"},
                "id": null
            }))
        );
    }

    #[tokio::test]
    async fn batch_is_answered_in_id_order_with_isolation() {
        let handler = Arc::new(Subtract);
        let out = dispatch_value(
            &handler,
            &json!([
                {"jsonrpc": "2.0", "method": "subtract", "params": [42, 23], "id": 2},
                "malformed",
                {"jsonrpc": "2.0", "method": "ping"},
                {"jsonrpc": "2.0", "method": "subtract", "params": [1, 2], "id": 1}
            ]),
        )
        .await
        .unwrap();

        // Notification drops out; the malformed item keeps its slot as a
        // null-id error; output is sorted by id.
        assert_eq!(
            out,
            json!([
                {"jsonrpc": "2.0", "error": {"code": -32600, "message": "Invalid Request"}, "id": null},
                {"jsonrpc": "2.0", "result": -1, "id": 1},
                {"jsonrpc": "2.0", "result": 19, "id": 2}
            ])
        );
    }

    #[tokio::test]
    async fn all_notification_batch_yields_nothing() {
        let handler = Arc::new(Subtract);
        let out = dispatch_value(
            &handler,
            &json!([
                {"jsonrpc": "2.0", "method": "ping"},
                {"jsonrpc": "2.0", "method": "ping"}
            ]),
        )
        .await;
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn empty_batch_is_an_invalid_request() {
        let handler = Arc::new(Subtract);
        let out = dispatch(&handler, "[]").await.unwrap();
        assert_eq!(out["error"]["code"], json!(codes::INVALID_REQUEST));
        assert_eq!(out["id"], json!(null));
    }

    #[tokio::test]
    async fn duplicate_ids_keep_the_first_completion() {
        let handler = Arc::new(Subtract);
        let out = dispatch_value(
            &handler,
            &json!([
                {"jsonrpc": "2.0", "method": "subtract", "params": [5, 2], "id": 1},
                {"jsonrpc": "2.0", "method": "subtract", "params": [9, 1], "id": 1}
            ]),
        )
        .await
        .unwrap();
        // Exactly one response survives for the duplicated id.
        assert_eq!(out.as_array().unwrap().len(), 1);
        assert_eq!(out[0]["id"], json!(1));
    }
}
