use chart_touch_overlay::OverlayError;
use chart_touch_overlay::core::{FrameRect, ValueSpecifier};
use chart_touch_overlay::overlay::{
    OVERLAY_CONFIG_JSON_SCHEMA_V1, OverlayBoxStyle, OverlayConfig, OverlayPresenter, Platform,
    PlatformChrome,
};
use chart_touch_overlay::render::{Color, NullRenderer};

#[test]
fn defaults_match_the_stock_overlay() {
    let config = OverlayConfig::default();
    assert_eq!(config.specifier.as_str(), "%.0f");
    assert!(!config.ignore_zero);
    assert_eq!(config.platform, Platform::current());
    assert_eq!(config.style.padding_px, 8.0);
    assert_eq!(config.style.corner_radius_px, 15.0);
    assert_eq!(config.style.shadow_radius_px, 6.0);
    config.validate().expect("defaults are valid");
}

#[test]
fn v1_contract_round_trips() {
    let config = OverlayConfig::for_platform(Platform::Desktop)
        .with_specifier("%.2f")
        .with_ignore_zero(true);
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {OVERLAY_CONFIG_JSON_SCHEMA_V1}")));
    assert!(json.contains("\"specifier\": \"%.2f\""));

    let parsed = OverlayConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn bare_config_with_partial_fields_uses_defaults() {
    let parsed = OverlayConfig::from_json_compat_str(
        r#"{ "ignore_zero": true, "platform": "touch", "style": { "padding_px": 12.0 } }"#,
    )
    .expect("parse bare config");

    assert!(parsed.ignore_zero);
    assert_eq!(parsed.platform, Platform::Touch);
    assert_eq!(parsed.style.padding_px, 12.0);
    assert_eq!(parsed.style.corner_radius_px, 15.0);
    assert_eq!(parsed.specifier, ValueSpecifier::default());
    assert_eq!(parsed.resolved_chrome(), PlatformChrome::for_platform(Platform::Touch));
}

#[test]
fn unknown_schema_versions_are_rejected() {
    let err = OverlayConfig::from_json_compat_str(r#"{ "schema_version": 9, "config": {} }"#)
        .expect_err("schema 9 is unknown");
    assert!(matches!(err, OverlayError::InvalidConfig(_)));
}

#[test]
fn version_only_documents_report_the_unsupported_version() {
    let err = OverlayConfig::from_json_compat_str(r#"{ "schema_version": 7 }"#)
        .expect_err("schema 7 is unknown");
    match err {
        OverlayError::InvalidConfig(message) => {
            assert!(message.contains("unsupported"), "{message}");
            assert!(message.contains('7'), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_v1_contracts_are_errors_not_defaults() {
    let err = OverlayConfig::from_json_compat_str(
        r#"{ "schema_version": 1, "config": { "platform": "tv", "ignore_zero": true } }"#,
    )
    .expect_err("unknown platform in a v1 contract");
    match err {
        OverlayError::InvalidConfig(message) => {
            assert!(message.contains("contract v1"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = OverlayConfig::from_json_compat_str(r#"{ "schema_version": 1 }"#)
        .expect_err("v1 contract without config");
    assert!(matches!(err, OverlayError::InvalidConfig(_)));

    let err = OverlayConfig::from_json_compat_str(r#"{ "schema_version": "1", "config": {} }"#)
        .expect_err("string schema version");
    assert!(matches!(err, OverlayError::InvalidConfig(_)));
}

#[test]
fn bare_configs_with_unknown_keys_are_rejected() {
    let err = OverlayConfig::from_json_compat_str(r#"{ "ignore_zero": true, "ignor_zero": false }"#)
        .expect_err("misspelled key");
    assert!(matches!(err, OverlayError::InvalidConfig(_)));

    let config = OverlayConfig::from_json_compat_str(
        r#"{ "schema_version": 1, "config": { "ignore_zero": true } }"#,
    )
    .expect("well-formed v1 contract");
    assert!(config.ignore_zero);
}

#[test]
fn invalid_geometry_is_rejected() {
    let style = OverlayBoxStyle {
        value_font_size_px: 0.0,
        ..OverlayBoxStyle::default()
    };
    let config = OverlayConfig::default().with_style(style);
    assert!(config.validate().is_err());
    assert!(
        OverlayPresenter::new(NullRenderer::default(), |_: FrameRect| {}, config).is_err()
    );

    let chrome = PlatformChrome {
        stroke_width_px: -1.0,
        ..PlatformChrome::for_platform(Platform::Touch)
    };
    assert!(OverlayConfig::default().with_chrome(chrome).validate().is_err());

    let bad_color = OverlayBoxStyle {
        foreground_color: Color::rgba(1.5, 0.0, 0.0, 1.0),
        ..OverlayBoxStyle::default()
    };
    assert!(OverlayConfig::default().with_style(bad_color).validate().is_err());
}

#[test]
fn unparseable_specifiers_are_kept_as_plain_rendering() {
    let config = OverlayConfig::default().with_specifier("%q");
    config.validate().expect("specifier problems do not reject the config");
    assert!(config.specifier.is_fallback());
    assert!(ValueSpecifier::try_parse("%q").is_err());
}

#[test]
fn chrome_override_replaces_platform_entry() {
    let chrome = PlatformChrome {
        shadow_color: Color::rgba(0.0, 0.0, 0.0, 0.3),
        background_color: Color::rgb8(32, 32, 36),
        stroke_width_px: 1.5,
    };
    let config = OverlayConfig::for_platform(Platform::Desktop).with_chrome(chrome);
    assert_eq!(config.resolved_chrome(), chrome);
}
