#![no_main]

use libfuzzer_sys::fuzz_target;

use fuelbud_orchestration::client::parse_json;
use fuelbud_orchestration::error::FailureKind;
use fuelbud_orchestration::wire::{CompareResponse, PredictResponse};

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);

    // Any body either parses or is classified as malformed; never a panic
    if let Err(err) = parse_json::<PredictResponse>(&body) {
        assert_eq!(err.kind(), FailureKind::MalformedResponse);
    }
    if let Err(err) = parse_json::<CompareResponse>(&body) {
        assert_eq!(err.kind(), FailureKind::MalformedResponse);
    }
});
