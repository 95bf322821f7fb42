//! Resolver property tests
//!
//! Verifies over seeded random inputs:
//! - Index always in range
//! - Full turns never change the outcome
//! - Shifting wheel and pointer together never changes the outcome
//! - Corrections stay bounded and land the winner on the pointer
//! - Winners match the literal resolution formula, exact ties included

use approx::assert_abs_diff_eq;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use rf_wheel::{
    DEFAULT_DEADBAND_DEGREES, SpinGenerator, WheelConfig, WheelResolver, circular_distance,
    correction_for, resolve,
};

const CASES: usize = 5_000;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5EED)
}

#[test]
fn concrete_six_segment_cases() {
    let r = resolve(0.0, 6, 270.0).unwrap();
    assert_eq!((r.base_modulo, r.target_angle, r.index), (0.0, 270.0, 4));

    let r = resolve(90.0, 6, 270.0).unwrap();
    assert_eq!((r.base_modulo, r.target_angle, r.index), (90.0, 180.0, 2));
    assert_eq!(r.centers[r.index], 150.0);

    let r = resolve(1800.0, 6, 270.0).unwrap();
    assert_eq!(r.index, resolve(0.0, 6, 270.0).unwrap().index);
}

/// Resolution written out as one literal expression chain, no shared helpers
fn literal_index(rotation: f64, n: usize, pointer: f64) -> usize {
    let seg = 360.0 / n as f64;
    let base = ((rotation % 360.0) + 360.0) % 360.0;
    let target = (((pointer - base) % 360.0) + 360.0) % 360.0;
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for i in 0..n {
        let c = (i as f64 * seg + seg / 2.0) % 360.0;
        let d = (((c - target + 540.0) % 360.0) - 180.0).abs();
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

#[test]
fn matches_literal_formula_on_uneven_layouts() {
    // 27 segments, full turns only: the pointer sits exactly between two centers
    assert_eq!(resolve(1800.0, 27, 0.0).unwrap().index, 0);
    assert_eq!(literal_index(1800.0, 27, 0.0), 0);

    let mut rng = rng();
    for _ in 0..CASES {
        let n = rng.random_range(1..=64usize);
        let rotation = if rng.random_bool(0.5) {
            rng.random_range(-20..=20i32) as f64 * 360.0 + rng.random_range(0..360i32) as f64
        } else {
            rng.random_range(-1e5..1e5)
        };
        let pointer = if rng.random_bool(0.5) {
            rng.random_range(0..360i32) as f64
        } else {
            rng.random_range(0.0..360.0)
        };
        assert_eq!(
            resolve(rotation, n, pointer).unwrap().index,
            literal_index(rotation, n, pointer),
            "rotation={} n={} pointer={}",
            rotation,
            n,
            pointer
        );
    }

    // every whole-degree rotation against every layout up to 40 segments
    for n in 1..=40usize {
        for deg in 0..360i32 {
            for pointer in [0.0, 90.0, 270.0] {
                let rotation = 1800.0 + deg as f64;
                assert_eq!(
                    resolve(rotation, n, pointer).unwrap().index,
                    literal_index(rotation, n, pointer),
                    "rotation={} n={} pointer={}",
                    rotation,
                    n,
                    pointer
                );
            }
        }
    }
}

#[test]
fn index_always_in_range() {
    let mut rng = rng();
    for _ in 0..CASES {
        let n = rng.random_range(1..=48usize);
        let rotation = rng.random_range(-1e6..1e6);
        let pointer = rng.random_range(-720.0..720.0);
        let r = resolve(rotation, n, pointer).unwrap();
        assert!(r.index < n, "index {} for n={}", r.index, n);
        assert!((0.0..360.0).contains(&r.base_modulo));
        assert!((0.0..360.0).contains(&r.target_angle));
    }
}

#[test]
fn full_turns_do_not_change_outcome() {
    let mut rng = rng();
    for _ in 0..CASES {
        let n = rng.random_range(1..=24usize);
        // whole degrees keep r + 360k exact in f64
        let rotation = rng.random_range(0..360i32) as f64;
        let k = rng.random_range(-20..=20i32) as f64;
        let a = resolve(rotation, n, 270.0).unwrap();
        let b = resolve(rotation + 360.0 * k, n, 270.0).unwrap();
        assert_eq!(a.index, b.index, "rotation={} k={}", rotation, k);
    }
}

#[test]
fn shifting_wheel_and_pointer_together() {
    let mut rng = rng();
    for _ in 0..CASES {
        let n = rng.random_range(1..=24usize);
        let rotation = rng.random_range(0..3600i32) as f64;
        let pointer = rng.random_range(0..360i32) as f64;
        let shift = rng.random_range(-1080..1080i32) as f64;
        let a = resolve(rotation, n, pointer).unwrap();
        let b = resolve(rotation + shift, n, pointer + shift).unwrap();
        assert_eq!(a.index, b.index, "r={} p={} d={}", rotation, pointer, shift);
    }
}

#[test]
fn resolution_is_deterministic() {
    let a = resolve(1937.25, 7, 270.0).unwrap();
    let b = resolve(1937.25, 7, 270.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn winner_is_nearest_center() {
    let mut rng = rng();
    for _ in 0..CASES {
        let n = rng.random_range(1..=16usize);
        let r = resolve(rng.random_range(0.0..7200.0), n, 270.0).unwrap();
        let best = circular_distance(r.centers[r.index], r.target_angle);
        for c in &r.centers {
            assert!(best <= circular_distance(*c, r.target_angle));
        }
        assert!(best <= r.segment_angle / 2.0 + 1e-9);
    }
}

#[test]
fn correction_bounded_and_lands_on_pointer() {
    let mut rng = rng();
    for _ in 0..CASES {
        let n = rng.random_range(1..=16usize);
        let pointer = rng.random_range(0.0..360.0);
        let rotation = rng.random_range(0.0..7200.0);
        let r = resolve(rotation, n, pointer).unwrap();
        let c = correction_for(rotation, r.index, &r.centers, pointer).unwrap();

        assert!((-180.0..=180.0).contains(&c));
        let landed = r.centers[r.index] + rotation + c;
        let miss = circular_distance(landed, pointer);
        if c == 0.0 {
            assert!(miss < DEFAULT_DEADBAND_DEGREES + 1e-9);
        } else {
            assert_abs_diff_eq!(miss, 0.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn planned_spins_keep_their_winner() {
    let resolver = WheelResolver::new(WheelConfig::default()).unwrap();
    let mut generator = SpinGenerator::new(Some(2024));
    for _ in 0..CASES {
        let plan = resolver.spin(&mut generator).unwrap();
        assert_eq!(
            resolver.resolve(plan.final_rotation).unwrap().index,
            plan.prize_index()
        );
    }
}

#[test]
fn six_segment_distribution_is_uniform() {
    let config = WheelConfig::default();
    let resolver = WheelResolver::new(config.clone()).unwrap();
    let mut generator = SpinGenerator::new(Some(99));
    let draws = 200_000;
    let mut counts = [0usize; 6];

    for _ in 0..draws {
        let rotation = generator.draw_rotation(&config);
        counts[resolver.resolve(rotation).unwrap().index] += 1;
    }

    for (i, count) in counts.iter().enumerate() {
        let freq = *count as f64 / draws as f64;
        assert!((freq - 1.0 / 6.0).abs() < 0.01, "index {} freq {}", i, freq);
    }
}

#[test]
fn invalid_configuration_rejected() {
    assert!(resolve(10.0, 0, 270.0).unwrap_err().is_invalid_configuration());
    assert!(resolve(f64::NEG_INFINITY, 6, 270.0).unwrap_err().is_invalid_configuration());
    assert!(resolve(0.0, usize::MAX, 270.0).unwrap_err().is_invalid_configuration());
}
