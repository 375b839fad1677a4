//! Per-behavior heading decisions.
//!
//! Steering is a pure function of the sensor readings and the species
//! behavior. Only [`Behavior::Explorer`] consumes randomness.

use std::f64::consts::FRAC_PI_4;

use rand::Rng;
use slimeweb_core::Behavior;

use crate::sensor::SensorReadings;

/// Chance per tick that an explorer ignores its sensors.
pub const EXPLORER_WANDER_PROBABILITY: f64 = 0.1;
/// Largest heading perturbation an explorer applies when wandering.
pub const EXPLORER_WANDER_RANGE: f64 = FRAC_PI_4;

/// The shared rule: hold course if the front reading is the strict
/// maximum, otherwise turn toward the larger side. Ties go right.
pub fn base_turn(readings: &SensorReadings, turn: f64) -> f64 {
    let SensorReadings { front, left, right } = *readings;
    if front > left && front > right {
        0.0
    } else if left > right {
        -turn
    } else {
        turn
    }
}

/// Heading delta for `behavior` given `readings`.
///
/// `turn` is the particle's own turn increment. The random draw happens
/// only for explorers, so other behaviors never advance `rng`.
pub fn steer<R: Rng + ?Sized>(
    behavior: Behavior,
    readings: &SensorReadings,
    turn: f64,
    rng: &mut R,
) -> f64 {
    match behavior {
        Behavior::TrailFollower => base_turn(readings, turn),
        Behavior::Explorer => {
            if rng.random::<f64>() < EXPLORER_WANDER_PROBABILITY {
                rng.random_range(-EXPLORER_WANDER_RANGE..=EXPLORER_WANDER_RANGE)
            } else {
                base_turn(readings, turn)
            }
        }
        Behavior::Cautious => base_turn(readings, turn * 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const TURN: f64 = std::f64::consts::PI / 8.0;

    fn r(front: f64, left: f64, right: f64) -> SensorReadings {
        SensorReadings { front, left, right }
    }

    #[test]
    fn strict_front_maximum_holds_course() {
        assert_eq!(base_turn(&r(1.0, 0.5, 0.5), TURN), 0.0);
    }

    #[test]
    fn larger_side_wins() {
        assert_eq!(base_turn(&r(0.0, 2.0, 1.0), TURN), -TURN);
        assert_eq!(base_turn(&r(0.0, 1.0, 2.0), TURN), TURN);
    }

    #[test]
    fn ties_resolve_right() {
        assert_eq!(base_turn(&r(1.0, 1.0, 1.0), TURN), TURN);
        assert_eq!(base_turn(&r(1.0, 1.0, 0.0), TURN), -TURN);
        assert_eq!(base_turn(&r(0.0, 0.0, 0.0), TURN), TURN);
    }

    #[test]
    fn obstacle_side_is_avoided() {
        assert_eq!(base_turn(&r(-1.0, -1.0, 0.0), TURN), TURN);
        assert_eq!(base_turn(&r(-1.0, 0.0, -1.0), TURN), -TURN);
    }

    #[test]
    fn cautious_turns_half_as_far() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let d = steer(Behavior::Cautious, &r(0.0, 1.0, 0.0), TURN, &mut rng);
        assert_eq!(d, -TURN / 2.0);
    }

    #[test]
    fn trail_follower_does_not_touch_rng() {
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = a.clone();
        steer(Behavior::TrailFollower, &r(0.0, 1.0, 0.0), TURN, &mut a);
        steer(Behavior::Cautious, &r(0.0, 1.0, 0.0), TURN, &mut a);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn explorer_sometimes_wanders() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let readings = r(10.0, 0.0, 0.0);
        let wandered = (0..2000)
            .filter(|_| steer(Behavior::Explorer, &readings, TURN, &mut rng) != 0.0)
            .count();
        // Expect around 200 out of 2000.
        assert!((100..=320).contains(&wandered), "wandered {wandered} times");
    }

    proptest! {
        #[test]
        fn explorer_delta_is_bounded(seed in any::<u64>(), f in -1.0f64..400.0, l in -1.0f64..400.0, rt in -1.0f64..400.0) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let d = steer(Behavior::Explorer, &r(f, l, rt), TURN, &mut rng);
            prop_assert!(d.abs() <= EXPLORER_WANDER_RANGE);
        }

        #[test]
        fn base_turn_is_one_of_three(f in -1.0f64..400.0, l in -1.0f64..400.0, rt in -1.0f64..400.0) {
            let d = base_turn(&r(f, l, rt), TURN);
            prop_assert!(d == 0.0 || d == TURN || d == -TURN);
        }
    }
}
