//! Tests for severity types

use crate::severity::{ConfiguredLevel, Severity};

// =============================================================================
// Ordering tests
// =============================================================================

#[test]
fn test_severity_total_order() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warn);
    assert!(Severity::Warn < Severity::Error);
    assert!(Severity::Error < Severity::Fatal);
}

#[test]
fn test_severity_order_is_transitive() {
    assert!(Severity::Debug < Severity::Fatal);
    assert!(Severity::Info < Severity::Error);
}

#[test]
fn test_severity_at_threshold_is_not_below() {
    // The filtering rule is `severity < threshold` skips; equal passes.
    assert!(!(Severity::Warn < Severity::Warn));
}

// =============================================================================
// Severity::as_str tests
// =============================================================================

#[test]
fn test_severity_as_str() {
    assert_eq!(Severity::Debug.as_str(), "DEBUG");
    assert_eq!(Severity::Info.as_str(), "INFO");
    assert_eq!(Severity::Warn.as_str(), "WARN");
    assert_eq!(Severity::Error.as_str(), "ERROR");
    assert_eq!(Severity::Fatal.as_str(), "FATAL");
}

// =============================================================================
// Severity::padded_str tests
// =============================================================================

#[test]
fn test_severity_padded_str_is_exactly_five_chars() {
    for severity in [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ] {
        assert_eq!(severity.padded_str().len(), Severity::PADDED_WIDTH);
    }
}

#[test]
fn test_severity_padded_str_pads_short_names() {
    assert_eq!(Severity::Info.padded_str(), "INFO ");
    assert_eq!(Severity::Warn.padded_str(), "WARN ");
}

#[test]
fn test_severity_padded_str_leaves_full_width_names_alone() {
    assert_eq!(Severity::Debug.padded_str(), "DEBUG");
    assert_eq!(Severity::Error.padded_str(), "ERROR");
    assert_eq!(Severity::Fatal.padded_str(), "FATAL");
}

// =============================================================================
// Severity Display tests
// =============================================================================

#[test]
fn test_severity_display_matches_as_str() {
    assert_eq!(format!("{}", Severity::Warn), "WARN");
    assert_eq!(format!("{}", Severity::Fatal), "FATAL");
}

// =============================================================================
// Severity Deserialize tests
// =============================================================================

#[test]
fn test_severity_deserializes_lowercase_names() {
    for (name, expected) in [
        ("debug", Severity::Debug),
        ("info", Severity::Info),
        ("warn", Severity::Warn),
        ("error", Severity::Error),
        ("fatal", Severity::Fatal),
    ] {
        let severity: Severity = serde_json::from_str(&format!("\"{}\"", name)).unwrap();
        assert_eq!(severity, expected);
    }
}

#[test]
fn test_severity_rejects_unknown_name() {
    let result: Result<Severity, _> = serde_json::from_str("\"verbose\"");
    assert!(result.is_err());
}

// =============================================================================
// ConfiguredLevel tests
// =============================================================================

#[test]
fn test_configured_level_default_is_inherit() {
    assert_eq!(ConfiguredLevel::default(), ConfiguredLevel::Inherit);
}

#[test]
fn test_configured_level_as_str_inherit_is_never_padded() {
    assert_eq!(ConfiguredLevel::Inherit.as_str(), "INHERIT");
}

#[test]
fn test_configured_level_as_str_explicit() {
    assert_eq!(ConfiguredLevel::Explicit(Severity::Error).as_str(), "ERROR");
}

#[test]
fn test_configured_level_explicit_accessor() {
    assert_eq!(ConfiguredLevel::Inherit.explicit(), None);
    assert_eq!(
        ConfiguredLevel::Explicit(Severity::Info).explicit(),
        Some(Severity::Info)
    );
}

#[test]
fn test_configured_level_from_severity() {
    let level: ConfiguredLevel = Severity::Fatal.into();
    assert_eq!(level, ConfiguredLevel::Explicit(Severity::Fatal));
}

#[test]
fn test_configured_level_display() {
    assert_eq!(format!("{}", ConfiguredLevel::Inherit), "INHERIT");
    assert_eq!(
        format!("{}", ConfiguredLevel::Explicit(Severity::Debug)),
        "DEBUG"
    );
}
