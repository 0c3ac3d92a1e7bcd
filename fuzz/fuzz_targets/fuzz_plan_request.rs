//! Fuzz target for plan request decoding.
//!
//! Arbitrary bytes decoded as a plan request, then planned when valid. This
//! should never panic or hang - only return Ok or Err.

#![no_main]

use libfuzzer_sys::fuzz_target;
use printq_core::input::{decode_request, ConstraintsRecord};
use printq_core::scheduler::schedule;

fuzz_target!(|data: &[u8]| {
    let fallback = ConstraintsRecord { max_volume: 300.0, max_items: 2 };
    if let Ok(request) = decode_request(data) {
        if let Ok((jobs, constraints)) = request.into_parts(fallback) {
            let _ = schedule(jobs, &constraints);
        }
    }
});
