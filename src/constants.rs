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

//! Protocol constants - single source of truth for wire names and codes.
//!
//! Everything here is fixed by the JSON-RPC 2.0 specification; none of it
//! is runtime configuration.

/// Wire field names (exact JSON keys, case-sensitive)
pub mod wire {
    /// Protocol version literal. MUST be exactly this string in every
    /// Request and Response.
    pub const VERSION: &str = "2.0";
    /// Version field key
    pub const JSONRPC: &str = "jsonrpc";
    /// Method name field key
    pub const METHOD: &str = "method";
    /// Parameters field key
    pub const PARAMS: &str = "params";
    /// Correlation id field key
    pub const ID: &str = "id";
    /// Success payload field key
    pub const RESULT: &str = "result";
    /// Error object field key
    pub const ERROR: &str = "error";
    /// Error code field key
    pub const CODE: &str = "code";
    /// Error message field key
    pub const MESSAGE: &str = "message";
    /// Optional error data field key
    pub const DATA: &str = "data";
}

/// Reserved error codes (-32768 to -32000 are reserved for pre-defined errors)
pub mod codes {
    /// No-error sentinel. A Response whose error carries this code is a
    /// success response.
    pub const SUCCESS: i64 = 0;
    /// Invalid JSON was received (standard JSON-RPC)
    pub const PARSE_ERROR: i64 = -32700;
    /// The JSON sent is not a valid Request object (standard JSON-RPC)
    pub const INVALID_REQUEST: i64 = -32600;
    /// The method does not exist / is not available (standard JSON-RPC)
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// Invalid method parameter(s) (standard JSON-RPC)
    pub const INVALID_PARAMS: i64 = -32602;
    /// Internal JSON-RPC error (standard JSON-RPC)
    pub const INTERNAL_ERROR: i64 = -32603;
    /// Upper bound (inclusive) of the implementation-defined server range
    pub const SERVER_ERROR_MAX: i64 = -32000;
    /// Lower bound (inclusive) of the implementation-defined server range
    pub const SERVER_ERROR_MIN: i64 = -32099;
}

/// Method names containing this prefix are reserved for rpc-internal
/// methods and extensions.
pub const INTERNAL_METHOD_PREFIX: &str = "rpc.";
