//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::money::MoneyError;
use core_kernel::temporal::TemporalError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("Goal not found");

    match error {
        CoreError::NotFound(msg) => assert!(msg.contains("Goal")),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_money_error_converts_to_core_error() {
    let money_error = MoneyError::DivisionByZero;
    let core_error: CoreError = money_error.into();

    assert!(matches!(core_error, CoreError::Money(_)));
    assert!(core_error.to_string().contains("Division by zero"));
}

#[test]
fn test_temporal_error_converts_to_core_error() {
    let temporal_error = TemporalError::InvalidPeriod {
        start: "2025-02-01".to_string(),
        end: "2025-01-01".to_string(),
    };
    let core_error: CoreError = temporal_error.into();

    assert!(matches!(core_error, CoreError::Temporal(_)));
}
