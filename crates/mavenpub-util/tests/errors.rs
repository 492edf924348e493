use mavenpub_util::errors::PublishError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = PublishError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = PublishError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_validation_error_display() {
    let err = PublishError::Validation {
        message: "primary artifact missing".to_string(),
    };
    assert_eq!(err.to_string(), "Validation failed: primary artifact missing");
    assert_eq!(err.kind(), "validation");
}

#[test]
fn test_authentication_error_display() {
    let err = PublishError::Authentication {
        message: "empty password".to_string(),
    };
    assert_eq!(err.to_string(), "Authentication failed: empty password");
    assert_eq!(err.kind(), "authentication");
}

#[test]
fn test_network_error_display() {
    let err = PublishError::Network {
        message: "timeout".to_string(),
    };
    assert_eq!(err.to_string(), "Network error: timeout");
}

#[test]
fn test_conflict_error_display() {
    let err = PublishError::Conflict {
        message: "de.example:lib:1.0 already exists".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Conflict: de.example:lib:1.0 already exists"
    );
    assert_eq!(err.kind(), "conflict");
}

#[test]
fn test_generic_error_display() {
    let err = PublishError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_report_downcast_recovers_kind() {
    let report: miette::Report = PublishError::Network {
        message: "refused".to_string(),
    }
    .into();
    let err = report.downcast_ref::<PublishError>().unwrap();
    assert!(matches!(err, PublishError::Network { .. }));
}
