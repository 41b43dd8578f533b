use intlfmt::{CatalogError, DateError, FormatError, Formatter};

#[test]
fn test_unknown_option_display() {
    let err = FormatError::UnknownOption {
        domain: "calendar name",
        name: "lunar".to_string(),
        expected: vec!["gregorian", "traditional"],
    };
    assert_eq!(
        err.to_string(),
        "the calendar name \"lunar\" does not exist; expecting one value of: \"gregorian\", \"traditional\""
    );
    assert!(err.is_unknown_option());
    assert!(!err.is_invalid_date());
}

#[test]
fn test_invalid_attribute_value_display() {
    let err = FormatError::InvalidAttributeValue {
        name: "grouping_used".to_string(),
        value: "yes".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("grouping_used"));
    assert!(msg.contains("\"yes\""));
}

#[test]
fn test_date_error_converts() {
    let err: FormatError = DateError::InvalidTimezone("Mars/Base".to_string()).into();
    assert!(err.is_invalid_date());
    assert_eq!(err.to_string(), "unable to format the given date");
    match err {
        FormatError::InvalidDate(inner) => {
            assert!(inner.to_string().contains("Mars/Base"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_unsupported_constant_display() {
    let err = FormatError::UnsupportedConstant {
        domain: "style",
        value: 42,
    };
    assert_eq!(err.to_string(), "unsupported style constant: 42");
}

#[test]
fn test_catalog_error_display() {
    let err = CatalogError::NotFound {
        kind: "country",
        code: "ZZ".to_string(),
    };
    assert_eq!(err.to_string(), "no country data found for \"ZZ\"");
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<FormatError>();
    assert_error::<DateError>();
    assert_error::<CatalogError>();

    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Formatter>();
}
