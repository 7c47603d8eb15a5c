use super::*;
use pretty_assertions::assert_eq;

use SpacingRule::{ExpressionClosingParentheses, ExpressionOpeningParentheses};

#[test]
fn defaults_remove_space_inside_parentheses() {
    let config = FormatConfig::default();
    assert_eq!(
        config
            .whitespace
            .amount(Side::After, ExpressionOpeningParentheses),
        SpaceAmount::Exact(0)
    );
    assert_eq!(
        config
            .whitespace
            .amount(Side::Before, ExpressionClosingParentheses),
        SpaceAmount::Exact(0)
    );
}

#[test]
fn rules_on_the_other_side_preserve() {
    let config = WhitespaceConfig::default();
    assert_eq!(
        config.amount(Side::Before, ExpressionOpeningParentheses),
        SpaceAmount::Preserve
    );
    assert_eq!(
        WhitespaceConfig::empty().amount(Side::After, ExpressionOpeningParentheses),
        SpaceAmount::Preserve
    );
}

#[test]
fn user_entries_override_defaults() {
    let config = FormatConfig::from_json(
        r#"{
            "indent": { "value": "  " },
            "whiteSpace": {
                "before": { "ExpressionClosingParentheses": -1, "ArgumentListClosingParentheses": 1 },
                "after": { "ExpressionOpeningParentheses": 2 }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(
        config
            .whitespace
            .amount(Side::After, ExpressionOpeningParentheses),
        SpaceAmount::Exact(2)
    );
    assert_eq!(
        config
            .whitespace
            .amount(Side::Before, ExpressionClosingParentheses),
        SpaceAmount::Preserve
    );
}

#[test]
fn partial_config_keeps_remaining_defaults() {
    let config =
        FormatConfig::from_json(r#"{ "whiteSpace": { "after": { "ExpressionOpeningParentheses": 1 } } }"#)
            .unwrap();
    assert_eq!(
        config
            .whitespace
            .amount(Side::Before, ExpressionClosingParentheses),
        SpaceAmount::Exact(0)
    );
    assert_eq!(FormatConfig::from_json("{}").unwrap(), FormatConfig::default());
}

#[test]
fn out_of_range_amounts_are_rejected() {
    for json in [
        r#"{ "whiteSpace": { "after": { "ExpressionOpeningParentheses": 256 } } }"#,
        r#"{ "whiteSpace": { "after": { "ExpressionOpeningParentheses": -2 } } }"#,
    ] {
        let err = FormatConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "{err}");
        assert!(err.to_string().contains("invalid whitespace amount"), "{err}");
    }
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        FormatConfig::from_json("{ whiteSpace"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = FormatConfig::load(Path::new("/nonexistent/esf.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/esf.json"));
}

#[test]
fn with_paren_spaces_sets_both_sides() {
    let config = FormatConfig::with_paren_spaces(SpaceAmount::Exact(1));
    for (side, rule) in [
        (Side::After, ExpressionOpeningParentheses),
        (Side::Before, ExpressionClosingParentheses),
    ] {
        assert_eq!(config.whitespace.amount(side, rule), SpaceAmount::Exact(1));
    }
}

#[test]
fn amount_conversion() {
    assert_eq!(SpaceAmount::try_from(-1), Ok(SpaceAmount::Preserve));
    assert_eq!(SpaceAmount::try_from(0), Ok(SpaceAmount::Exact(0)));
    assert_eq!(SpaceAmount::try_from(255), Ok(SpaceAmount::Exact(255)));
    assert_eq!(SpaceAmount::try_from(300), Err(InvalidAmount(300)));
    assert_eq!(SpaceAmount::Preserve.to_string(), "-1");
    assert_eq!(SpaceAmount::Exact(3).to_string(), "3");
}
