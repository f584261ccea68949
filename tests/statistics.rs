use stride::Workout;

fn assert_close(found: f64, expected: f64) {
    assert!(
        (found - expected).abs() < 1e-9,
        "found {found}, expected {expected}"
    );
}

#[test]
fn running_statistics() {
    let workout = Workout::Running {
        action: 15000,
        duration_h: 1.0,
        weight_kg: 75.0,
    };

    assert_close(workout.distance_km(), 9.75);
    assert_close(workout.mean_speed_kmh(), 9.75);
    assert_close(workout.calories_kcal(), (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0);
}

#[test]
fn swimming_mean_speed_ignores_strokes() {
    let workout = Workout::Swimming {
        action: 720,
        duration_h: 1.0,
        weight_kg: 80.0,
        pool_length_m: 25.0,
        pool_count: 40.0,
    };

    // 25 m * 40 lengths over one hour, regardless of the 720 strokes.
    assert_eq!(workout.mean_speed_kmh(), 1.0);
    assert_close(workout.calories_kcal(), 336.0);
}

#[test]
fn swimming_distance_uses_stroke_length() {
    let workout = Workout::Swimming {
        action: 720,
        duration_h: 1.0,
        weight_kg: 80.0,
        pool_length_m: 25.0,
        pool_count: 40.0,
    };

    assert_close(workout.distance_km(), 0.9936);
}

#[test]
fn walking_calories_floor_quotient_below_one() {
    let workout = Workout::SportsWalking {
        action: 9000,
        duration_h: 1.0,
        weight_kg: 75.0,
        height_cm: 180.0,
    };

    // Mean speed is 5.85 km/h; 5.85² / 180 floors to zero, leaving only the
    // weight term.
    assert_close(workout.calories_kcal(), 0.035 * 75.0 * 60.0);
}

#[test]
fn walking_calories_floor_quotient_above_one() {
    let workout = Workout::SportsWalking {
        action: 9000,
        duration_h: 1.0,
        weight_kg: 75.0,
        height_cm: 30.0,
    };

    // 5.85² / 30 is about 1.14, floored to exactly one.
    assert_close(workout.calories_kcal(), (0.035 * 75.0 + 0.029 * 75.0) * 60.0);
}

#[test]
fn statistics_are_pure() {
    let workout = Workout::Running {
        action: 15000,
        duration_h: 1.0,
        weight_kg: 75.0,
    };

    assert_eq!(workout.calories_kcal(), workout.calories_kcal());
    assert_eq!(workout.summary(), workout.summary());
}
