// Copyright 2026 BadCompany
// Licensed under the Apache License, Version 2.0

#![no_main]

use jrpc_kit::batch::BatchRequest;
use jrpc_kit::protocol::{Request, Response};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The parse pipeline must reject arbitrary input with an error value,
    // never a panic - including deeply nested params and weird id shapes.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = text.parse::<Request>();
        let _ = text.parse::<Response>();
        let _ = text.parse::<BatchRequest>();
    }
});
