// tests/logging_setup.rs

use graphsum::cli::LogLevel;
use graphsum::errors::GraphSumError;
use graphsum::logging::init_logging;

// Only test in this binary, so nothing else has installed a subscriber.
#[test]
fn second_initialisation_is_reported_as_error() {
    init_logging(Some(LogLevel::Debug)).expect("first init should succeed");

    match init_logging(Some(LogLevel::Info)) {
        Err(GraphSumError::Other(err)) => {
            assert!(err.to_string().contains("failed to install tracing subscriber"));
        }
        other => panic!("Expected Other error, got: {:?}", other),
    }
}
