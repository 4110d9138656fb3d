use rkn_roulette_domain::wheel::{MAX_SEGMENTS, SPIN_MIN_DURATION_MS, SPIN_MIN_ROTATION_DEG};
use rkn_roulette_domain::{SpinPlan, WheelLayout};

mod helpers;
use helpers::services;

#[test]
fn test_layout_caps_segments_at_twelve() {
    let ids: Vec<u32> = (1..=20).collect();
    let layout = WheelLayout::build(&services(&ids));

    assert_eq!(layout.segment_count(), MAX_SEGMENTS);
    assert_eq!(layout.segment_angle(), Some(30.0));
    assert_eq!(layout.segments()[11].service_id, 12);
}

#[test]
fn test_layout_angles_follow_index() {
    let layout = WheelLayout::build(&services(&[10, 20, 30, 40]));

    let angles: Vec<f64> = layout.segments().iter().map(|s| s.angle).collect();
    assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
}

#[test]
fn test_empty_layout_lands_nowhere() {
    let layout = WheelLayout::build(&[]);

    assert!(layout.is_empty());
    assert_eq!(layout.segment_angle(), None);
    assert_eq!(layout.landed_index(1234.0), None);
    assert!(layout.segment_at(10.0).is_none());
}

#[test]
fn test_landed_index_at_rest_is_first_segment() {
    let layout = WheelLayout::build(&services(&[1, 2, 3, 4]));

    assert_eq!(layout.landed_index(0.0), Some(0));
    assert_eq!(layout.landed_index(1440.0), Some(0));
}

#[test]
fn test_landed_index_counts_backwards_from_pointer() {
    let layout = WheelLayout::build(&services(&[1, 2, 3, 4]));

    // 360 - 100 = 260 -> segment 2 of 90-degree slices
    assert_eq!(layout.landed_index(100.0), Some(2));
    assert_eq!(layout.landed_index(1080.0 + 100.0), Some(2));
    assert_eq!(layout.landed_index(350.0), Some(0));
    assert_eq!(layout.landed_index(10.0), Some(3));
    assert_eq!(layout.segment_at(10.0).unwrap().service_id, 4);
}

#[test]
fn test_single_service_always_lands() {
    let layout = WheelLayout::build(&services(&[5]));

    for rotation in [0.0, 45.5, 180.0, 359.9, 1799.0] {
        assert_eq!(layout.segment_at(rotation).unwrap().service_id, 5);
    }
}

#[test]
fn test_spin_plan_ranges() {
    let low = SpinPlan::from_unit_samples(0.0, 0.0);
    assert_eq!(low.target_rotation_deg, SPIN_MIN_ROTATION_DEG);
    assert_eq!(low.duration_ms, SPIN_MIN_DURATION_MS);

    let mid = SpinPlan::from_unit_samples(0.5, 0.5);
    assert_eq!(mid.target_rotation_deg, 1440.0);
    assert_eq!(mid.duration_ms, 4000);

    let high = SpinPlan::from_unit_samples(0.999, 0.999);
    assert!(high.target_rotation_deg < 1800.0);
    assert!(high.duration_ms < 5000);
}
