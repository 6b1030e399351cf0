//! Error handling and exit codes.

use fuelbud_core::constants::exit_codes;
use fuelbud_orchestration::error::FailureKind;

/// Exit code for a failed request.
pub fn exit_code_for(kind: FailureKind) -> i32 {
    match kind {
        FailureKind::Transport => exit_codes::ERROR_TRANSPORT,
        FailureKind::HttpStatus => exit_codes::ERROR_HTTP_STATUS,
        FailureKind::MalformedResponse => exit_codes::ERROR_MALFORMED_RESPONSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code_for(FailureKind::Transport), 3);
        assert_eq!(exit_code_for(FailureKind::HttpStatus), 4);
        assert_eq!(exit_code_for(FailureKind::MalformedResponse), 5);
    }
}
