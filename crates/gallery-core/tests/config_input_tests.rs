// Host-side tests for configuration parsing/validation and wheel normalization.

use gallery_core::*;

#[test]
fn default_config_is_valid_and_matches_constants() {
    let c = GalleryConfig::default();
    assert_eq!(c.validate(), Ok(()));
    assert_eq!(c.ease, SCROLL_EASE);
    assert_eq!(c.wheel_sensitivity, 0.5);
    assert_eq!(c.drag_sensitivity, 2.0);
    assert_eq!(c.fov_degrees, 45.0);
    assert_eq!(c.camera_z, 5.0);
    assert_eq!(c.scroll_mode, ScrollMode::Driven);
    assert_eq!(c.wrap_axis, WrapAxis::Vertical);
}

#[test]
fn validation_rejects_out_of_range_values() {
    let base = GalleryConfig::default();
    let cases = [
        (
            GalleryConfig {
                ease: 1.5,
                ..base.clone()
            },
            GalleryError::InvalidEase(1.5),
        ),
        (
            GalleryConfig {
                fov_degrees: 180.0,
                ..base.clone()
            },
            GalleryError::InvalidFov(180.0),
        ),
        (
            GalleryConfig {
                camera_z: -1.0,
                ..base.clone()
            },
            GalleryError::InvalidFocalDistance(-1.0),
        ),
        (
            GalleryConfig {
                drag_sensitivity: -2.0,
                ..base.clone()
            },
            GalleryError::InvalidSensitivity {
                name: "drag_sensitivity",
                value: -2.0,
            },
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }
    let nan_ease = GalleryConfig {
        ease: f32::NAN,
        ..base
    };
    assert!(matches!(nan_ease.validate(), Err(GalleryError::InvalidEase(_))));
}

#[test]
fn scroll_mode_and_axis_parse_from_attributes() {
    assert_eq!("autoplay".parse::<ScrollMode>(), Ok(ScrollMode::Autoplay));
    assert_eq!(" Driven ".parse::<ScrollMode>(), Ok(ScrollMode::Driven));
    assert_eq!(
        "loop".parse::<ScrollMode>(),
        Err(GalleryError::UnknownScrollMode("loop".to_string()))
    );
    assert_eq!("horizontal".parse::<WrapAxis>(), Ok(WrapAxis::Horizontal));
    assert_eq!("Y".parse::<WrapAxis>(), Ok(WrapAxis::Vertical));
    assert!("diagonal".parse::<WrapAxis>().is_err());
    assert_eq!(ScrollMode::Autoplay.to_string(), "autoplay");
    assert_eq!(WrapAxis::Horizontal.to_string(), "horizontal");
}

#[test]
fn errors_have_readable_messages() {
    let msg = GalleryError::ItemOutOfRange { index: 7, len: 3 }.to_string();
    assert_eq!(msg, "gallery item 7 out of range (3 items)");
    assert!(GalleryError::InvalidEase(2.0).to_string().contains("(0, 1]"));
}

#[test]
fn wheel_deltas_normalize_to_pixels() {
    assert_eq!(normalize_wheel(12.5, WheelDeltaMode::Pixel), 12.5);
    assert_eq!(normalize_wheel(3.0, WheelDeltaMode::Line), 120.0);
    assert_eq!(normalize_wheel(-1.0, WheelDeltaMode::Page), -800.0);
    assert_eq!(normalize_wheel(f32::INFINITY, WheelDeltaMode::Pixel), 0.0);
}

#[test]
fn dom_delta_modes_map() {
    assert_eq!(WheelDeltaMode::from_dom(0), WheelDeltaMode::Pixel);
    assert_eq!(WheelDeltaMode::from_dom(1), WheelDeltaMode::Line);
    assert_eq!(WheelDeltaMode::from_dom(2), WheelDeltaMode::Page);
    assert_eq!(WheelDeltaMode::from_dom(99), WheelDeltaMode::Pixel);
}
