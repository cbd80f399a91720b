// Host-side tests for scene configuration parsing.

use fnv::FnvHashMap;
use shapefield_core::*;

fn attrs(pairs: &[(&str, &str)]) -> FnvHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_match_documented_values() {
    let c = SceneConfig::default();
    assert_eq!(c.shape_count, 40);
    assert_eq!(c.spread_radius, 8.0);
    assert!(c.enable_orbit_controls);
    assert_eq!(c.background_color, "#000010");
    assert!(c.enable_post_processing);
    assert_eq!(c.camera_mode(), CameraMode::Orbit);
}

#[test]
fn from_attributes_applies_known_keys() {
    let c = SceneConfig::from_attributes(&attrs(&[
        ("shape-count", "25"),
        ("spread", "5.5"),
        ("orbit", "false"),
        ("background", "#fff"),
        ("post", "off"),
        ("unrelated", "whatever"),
    ]));
    assert_eq!(c.shape_count, 25);
    assert_eq!(c.spread_radius, 5.5);
    assert_eq!(c.camera_mode(), CameraMode::Follow);
    assert_eq!(c.background().rgb, [1.0, 1.0, 1.0]);
    assert!(!c.enable_post_processing);
}

#[test]
fn invalid_values_keep_defaults() {
    let c = SceneConfig::from_attributes(&attrs(&[
        ("shape-count", "lots"),
        ("orbit", "maybe"),
        ("background", "rebeccapurple"),
    ]));
    assert_eq!(c, SceneConfig::default());
}

#[test]
fn apply_reports_typed_errors() {
    let mut c = SceneConfig::default();
    assert_eq!(
        c.apply("spread", "wide"),
        Err(ConfigError::Number {
            key: "spread".into(),
            value: "wide".into()
        })
    );
    assert_eq!(
        c.apply("post", "2"),
        Err(ConfigError::Flag {
            key: "post".into(),
            value: "2".into()
        })
    );
    assert!(matches!(c.apply("background", "#12"), Err(ConfigError::Color(_))));
    assert_eq!(c.apply("enablePostProcessing", ""), Ok(()));
    assert!(c.enable_post_processing);
}

#[test]
fn effective_values_degrade_gracefully() {
    let c = SceneConfig {
        shape_count: 0,
        spread_radius: f32::NAN,
        ..SceneConfig::default()
    };
    assert_eq!(c.effective_shape_count(), 0);
    assert_eq!(c.effective_spread(), 8.0);
    let c = SceneConfig {
        shape_count: -10,
        spread_radius: -1.0,
        ..SceneConfig::default()
    };
    assert_eq!(c.effective_shape_count(), 0);
    assert_eq!(c.effective_spread(), 8.0);
}

#[test]
fn shape_count_steps_stay_in_slider_range() {
    let mut c = SceneConfig::default();
    for _ in 0..20 {
        c = c.with_shape_count_step(SHAPE_COUNT_STEP);
    }
    assert_eq!(c.shape_count, 80);
    for _ in 0..20 {
        c = c.with_shape_count_step(-SHAPE_COUNT_STEP);
    }
    assert_eq!(c.shape_count, 10);
}

#[test]
fn camera_mode_toggle_flips_only_the_flag() {
    let c = SceneConfig::default();
    let t = c.with_camera_mode_toggled();
    assert_eq!(t.camera_mode(), CameraMode::Follow);
    assert_eq!(t.shape_count, c.shape_count);
    assert_eq!(t.with_camera_mode_toggled(), c);
}

#[test]
fn background_parsing() {
    let bg = parse_background("#000010").unwrap();
    assert_eq!(bg.rgb, [0.0, 0.0, 16.0 / 255.0]);
    assert_eq!(bg.alpha, 1.0);
    assert!(parse_background("transparent").unwrap().is_transparent());
    assert!(parse_background(" #A0b ").is_ok());
    assert!(parse_background("000010").is_err());
    assert!(parse_background("#gg0000").is_err());

    let lin = parse_background("#ffffff").unwrap().linear();
    assert!((lin[0] - 1.0).abs() < 1e-5);
    assert_eq!(lin[3], 1.0);
}

#[test]
fn unparseable_background_field_falls_back_to_default() {
    let c = SceneConfig {
        background_color: "not a colour".into(),
        ..SceneConfig::default()
    };
    assert_eq!(c.background(), parse_background("#000010").unwrap());
}
