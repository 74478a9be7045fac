#![cfg(feature = "dev")]

use taper_rs::internals::primitives::errors::TaperError;

#[test]
fn test_taper_error_display() {
    let err = TaperError::InvalidTaperWidth { ntap: 3, max: 2 };
    assert_eq!(format!("{}", err), "Invalid ntap: 3 (must be at most 2)");
}

#[test]
fn test_taper_error_carries_diagnostics() {
    let err = TaperError::InvalidTaperWidth { ntap: 7, max: 5 };
    match err {
        TaperError::InvalidTaperWidth { ntap, max } => {
            assert_eq!(ntap, 7);
            assert_eq!(max, 5);
        }
        _ => panic!("unexpected error variant: {err:?}"),
    }
}

#[test]
fn test_taper_error_is_std_error() {
    let err = TaperError::InvalidTaperWidth { ntap: 3, max: 2 };
    let dyn_err: &dyn std::error::Error = &err;
    assert!(dyn_err.source().is_none());
}

#[test]
fn test_taper_error_equality() {
    let a = TaperError::InvalidTaperWidth { ntap: 3, max: 2 };
    let b = TaperError::InvalidTaperWidth { ntap: 3, max: 2 };
    let c = TaperError::InvalidTaperWidth { ntap: 4, max: 2 };
    assert_eq!(a, b);
    assert_ne!(a, c);
}
