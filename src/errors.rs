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

//! Protocol error taxonomy.
//!
//! Every fallible public API in this crate returns `RpcError`. Failures
//! from the underlying JSON layer are converted at the narrowest call
//! site and never cross the API surface.

use crate::constants::codes;
use thiserror::Error;

/// A protocol-level rejection, carrying the reserved JSON-RPC error code.
///
/// `Parse` and `InvalidRequest` are produced by the parsers in this crate.
/// `MethodNotFound`, `InvalidParams` and `Internal` exist for dispatchers
/// layered on top; the model layer never produces them itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    /// Invalid JSON was received (-32700)
    #[error("Parse error")]
    Parse,
    /// The JSON is well-formed but is not a valid Request object (-32600)
    #[error("Invalid Request")]
    InvalidRequest,
    /// The method does not exist / is not available (-32601)
    #[error("Method not found")]
    MethodNotFound,
    /// Invalid method parameter(s) (-32602)
    #[error("Invalid params")]
    InvalidParams,
    /// Internal JSON-RPC error (-32603)
    #[error("Internal error")]
    Internal,
    /// Implementation-defined server error (-32000 to -32099)
    #[error("{message}")]
    Server { code: i64, message: String },
}

impl RpcError {
    /// The reserved wire code for this error.
    pub fn code(&self) -> i64 {
        match self {
            RpcError::Parse => codes::PARSE_ERROR,
            RpcError::InvalidRequest => codes::INVALID_REQUEST,
            RpcError::MethodNotFound => codes::METHOD_NOT_FOUND,
            RpcError::InvalidParams => codes::INVALID_PARAMS,
            RpcError::Internal => codes::INTERNAL_ERROR,
            RpcError::Server { code, .. } => *code,
        }
    }

    /// An implementation-defined server error. The code is clamped into
    /// the reserved -32099..=-32000 range.
    pub fn server(code: i64, message: impl Into<String>) -> Self {
        let code = code.clamp(codes::SERVER_ERROR_MIN, codes::SERVER_ERROR_MAX);
        RpcError::Server {
            code,
            message: message.into(),
        }
    }
}
