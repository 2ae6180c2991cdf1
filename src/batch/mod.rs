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

//! Batch correlation engine.
//!
//! `BatchRequest` parses a wire value into independent per-item
//! outcomes, `BatchResponse` collects and orders the replies, and
//! `dispatch` is the concurrent fan-out loop connecting the two through
//! a `MethodHandler`.

pub mod dispatch;
pub mod request;
pub mod response;

pub use dispatch::{dispatch, dispatch_value, MethodHandler};
pub use request::{BatchItem, BatchRequest};
pub use response::BatchResponse;
