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

//! jrpc-kit: JSON-RPC 2.0 message model and batch correlation engine.
//!
//! This library turns raw JSON into strongly-typed Request/Response
//! objects, validates them against the protocol's structural rules,
//! serializes them back to the wire, and implements batch semantics
//! with per-item partial-failure isolation. Transport and business
//! logic stay outside: feed it parsed text, plug a `MethodHandler` in,
//! write out whatever `dispatch` returns.

pub mod batch;
pub mod constants;
pub mod errors;
pub mod protocol;
