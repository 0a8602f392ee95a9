//! Integration tests for look-at navigation through the public API.

use geonav::*;
use proptest::prelude::*;

fn viewer_3d() -> Viewer {
    let mut viewer = Viewer::new(Options::default()).expect("default options are valid");
    viewer.navigator_mut().set_enable_2d_limits(false);
    viewer
}

#[test]
fn test_heading_wraps() {
    let mut viewer = viewer_3d();
    let nav = viewer.navigator_mut();
    nav.set_heading(370.0).unwrap();
    assert!((nav.state().heading() - 10.0).abs() < 1e-9);
    nav.set_heading(-10.0).unwrap();
    assert!((nav.state().heading() - 350.0).abs() < 1e-9);
}

#[test]
fn test_tilt_limits_by_mode() {
    let mut viewer = Viewer::new(Options::default()).unwrap();
    let nav = viewer.navigator_mut();
    assert!(nav.enable_2d_limits());
    nav.set_tilt(120.0).unwrap();
    assert_eq!(nav.state().tilt(), 90.0);

    nav.set_enable_2d_limits(false);
    nav.set_tilt(120.0).unwrap();
    assert_eq!(nav.state().tilt(), 120.0);
}

#[test]
fn test_range_rejection() {
    let mut viewer = viewer_3d();
    let nav = viewer.navigator_mut();
    let prior = nav.range();
    for bad in [0.0, -5.0] {
        match nav.set_range(bad) {
            Err(GeonavError::InvalidParameter { name, .. }) => assert_eq!(name, "range"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
        assert_eq!(nav.range(), prior);
    }
}

#[test]
fn test_transform_determinism() {
    let mut viewer = viewer_3d();
    viewer.navigator_mut().set_heading(123.0).unwrap();
    viewer.navigator_mut().set_tilt(100.0).unwrap();
    viewer.navigator_mut().set_roll(300.0).unwrap();
    let a = viewer.frame();
    let b = viewer.frame();
    assert!(a.abs_diff_eq(&b, 1e-12));
}

#[test]
fn test_composition_order() {
    let mut viewer = viewer_3d();
    {
        let nav = viewer.navigator_mut();
        nav.set_look_at_location(Location::new(30.0, 30.0)).unwrap();
        nav.set_range(30_000_000.0).unwrap();
        nav.set_heading(0.0).unwrap();
        nav.set_tilt(0.0).unwrap();
        nav.set_roll(0.0).unwrap();
    }
    let globe = *viewer.globe();
    let target = globe.compute_point_from_location(&Location::new(30.0, 30.0));
    let up = globe.surface_frame(&Location::new(30.0, 30.0)).up;

    // Straight-down view: eye directly above the target at altitude ~ range.
    let camera = viewer.frame();
    let offset = camera.eye_position - target;
    assert!((offset.length() - 30_000_000.0).abs() < 1e-3);
    assert!(offset.normalize().abs_diff_eq(up, 1e-9));

    // Tilt 90: eye on the horizon, same distance.
    viewer.navigator_mut().set_tilt(90.0).unwrap();
    let camera = viewer.frame();
    let offset = camera.eye_position - target;
    assert!((offset.length() - 30_000_000.0).abs() < 1e-3);
    assert!(offset.normalize().dot(up).abs() < 1e-9);
}

#[test]
fn test_non_finite_location_keeps_camera() {
    let mut viewer = viewer_3d();
    let before = viewer.frame();
    let err = viewer
        .navigator_mut()
        .set_look_at_location(Location::new(f64::NAN, 2.35))
        .unwrap_err();
    assert!(matches!(err, GeonavError::InvalidParameter { name, .. } if name == "latitude"));
    assert!(viewer.frame().abs_diff_eq(&before, 0.0));
}

#[test]
fn test_rapid_sequential_mutations_each_satisfy_limits() {
    let mut viewer = Viewer::new(Options::default()).unwrap();
    let max_2d = viewer.navigator().limits().ranges().max_range_2d;
    for step in 0..100 {
        let value = f64::from(step) * 7.3;
        let nav = viewer.navigator_mut();
        nav.set_tilt(value).unwrap();
        assert!(nav.state().tilt() <= 90.0);
        nav.set_range(value * 1e6 + 1.0).unwrap();
        assert!(nav.range() <= max_2d);
        nav.set_heading(value * 11.0).unwrap();
        assert!((0.0..360.0).contains(&nav.state().heading()));
    }
}

#[test]
fn test_viewer_from_json_options() {
    let options = Options::from_json_str(
        r#"{
            "globe": { "ellipsoid": { "semi_major_axis": 1737400.0, "inverse_flattening": 0.0 } },
            "navigator": {
                "look_at_location": { "latitude": 0.0, "longitude": 0.0 },
                "range": 5000000.0,
                "enable_2d_limits": false
            }
        }"#,
    )
    .unwrap();
    let viewer = Viewer::new(options).unwrap();
    let camera = viewer.frame();
    // Spherical moon-sized globe, looking straight down at (0, 0).
    assert!(camera
        .eye_position
        .abs_diff_eq(DVec3::new(1_737_400.0 + 5_000_000.0, 0.0, 0.0), 1e-6));
    assert!(camera.view_direction.abs_diff_eq(DVec3::NEG_X, 1e-12));
    assert!(camera.up_vector.abs_diff_eq(DVec3::Z, 1e-12));
}

#[test]
fn test_free_eye_strategy_through_trait_object() {
    let globe = Globe::default();
    let strategies: Vec<Box<dyn CameraStrategy>> = vec![
        Box::new(LookAtNavigator::new()),
        Box::new(FreeEyeNavigator::new(Position::new(0.0, 0.0, 1000.0)).unwrap()),
    ];
    for strategy in &strategies {
        let camera = strategy.compute_camera_transform(&globe);
        assert!((camera.view_direction.length() - 1.0).abs() < 1e-12);
        assert!(camera.view_direction.dot(camera.up_vector).abs() < 1e-12);
        assert_eq!(strategy.state().field_of_view(), 45.0);
    }
}

proptest! {
    #[test]
    fn transform_is_total_and_orthonormal(
        heading in -1.0e4f64..1.0e4,
        tilt in -1.0e3f64..1.0e3,
        roll in -1.0e4f64..1.0e4,
        range in 1.0e-6f64..1.0e12,
        lat in -90.0f64..=90.0,
        lon in -540.0f64..540.0,
        limits_2d in any::<bool>(),
        flat in any::<bool>(),
    ) {
        let mut viewer = Viewer::new(Options::default()).unwrap();
        if flat {
            viewer.set_projection(GlobeProjection::Equirectangular2D);
        }
        let nav = viewer.navigator_mut();
        nav.set_enable_2d_limits(limits_2d);
        nav.set_heading(heading).unwrap();
        nav.set_tilt(tilt).unwrap();
        nav.set_roll(roll).unwrap();
        nav.set_range(range).unwrap();
        nav.set_look_at_location(Location::new(lat, lon)).unwrap();

        let camera = viewer.frame();
        prop_assert!(camera.eye_position.is_finite());
        prop_assert!((camera.view_direction.length() - 1.0).abs() < 1e-9);
        prop_assert!((camera.up_vector.length() - 1.0).abs() < 1e-9);
        prop_assert!(camera.view_direction.dot(camera.up_vector).abs() < 1e-9);

        let target = viewer.globe().compute_point_from_location(&viewer.navigator().look_at_location());
        let distance = (camera.eye_position - target).length();
        let expected = viewer.navigator().range();
        prop_assert!((distance - expected).abs() <= 1e-6 + expected * 1e-9);
    }
}
