//! Unit tests for bc-core primitives.

#[cfg(test)]
mod heading {
    use std::f64::consts::FRAC_PI_2;

    use crate::{Direction, DirectionSet, Turn};

    #[test]
    fn flip_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.flip().flip(), d);
            assert_ne!(d.flip(), d);
        }
        assert_eq!(Direction::N.flip(), Direction::S);
        assert_eq!(Direction::E.flip(), Direction::W);
    }

    #[test]
    fn clockwise_order() {
        assert_eq!(Direction::N.rotated_cw(1), Direction::E);
        assert_eq!(Direction::W.rotated_cw(1), Direction::N);
        assert_eq!(Direction::N.rotated_ccw(1), Direction::W);
        assert_eq!(Direction::S.rotated_ccw(3), Direction::W);
    }

    #[test]
    fn masks_use_nesw_bit_order() {
        assert_eq!(Direction::N.bit(), 1);
        assert_eq!(Direction::E.bit(), 2);
        assert_eq!(Direction::S.bit(), 4);
        assert_eq!(Direction::W.bit(), 8);
    }

    #[test]
    fn turn_classification() {
        assert_eq!(Turn::between(Direction::N, Direction::E), Some(Turn::Right));
        assert_eq!(Turn::between(Direction::N, Direction::W), Some(Turn::Left));
        assert_eq!(Turn::between(Direction::W, Direction::N), Some(Turn::Right));
        assert_eq!(Turn::between(Direction::E, Direction::E), Some(Turn::Straight));
        assert_eq!(Turn::between(Direction::S, Direction::N), None);
    }

    #[test]
    fn turn_always_in_unit_range() {
        for from in Direction::ALL {
            for to in Direction::ALL {
                if let Some(turn) = Turn::between(from, to) {
                    assert!((-1..=1).contains(&turn.value()));
                    assert_eq!(from.turned(turn), to);
                } else {
                    assert_eq!(to, from.flip());
                }
            }
        }
    }

    #[test]
    fn turn_distances() {
        assert!((Turn::Left.distance() - 0.7 * FRAC_PI_2).abs() < 1e-12);
        assert!((Turn::Right.distance() - 0.3 * FRAC_PI_2).abs() < 1e-12);
        assert_eq!(Turn::Straight.distance(), 1.0);
    }

    #[test]
    fn direction_set_iterates_in_order() {
        let set = DirectionSet::from_bits(0b1010);
        let dirs: Vec<_> = set.iter().collect();
        assert_eq!(dirs, [Direction::E, Direction::W]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.nth(1), Some(Direction::W));
        assert_eq!(set.nth(2), None);
    }

    #[test]
    fn direction_set_rotation() {
        // A west-facing connector turned a quarter counter-clockwise faces south.
        let west = DirectionSet::from_bits(Direction::W.bit());
        assert_eq!(west.rotated_ccw(1).bits(), Direction::S.bit());
        assert_eq!(DirectionSet::ALL.rotated_ccw(3), DirectionSet::ALL);
        assert!(DirectionSet::EMPTY.rotated_ccw(2).is_empty());
    }
}

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn step_moves_one_tile() {
        let c = Cell::new(4, 4);
        assert_eq!(c.step(Direction::N), Cell::new(3, 4));
        assert_eq!(c.step(Direction::E), Cell::new(4, 5));
        assert_eq!(c.step(Direction::S), Cell::new(5, 4));
        assert_eq!(c.step(Direction::W), Cell::new(4, 3));
    }

    #[test]
    fn step_off_the_edge_goes_negative() {
        assert_eq!(Cell::new(0, 0).step(Direction::N), Cell::new(-1, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(2, 7).to_string(), "(2, 7)");
    }
}

#[cfg(test)]
mod config {
    use crate::{CityConfig, CoreError};

    #[test]
    fn default_is_thirteen_by_thirteen() {
        let cfg = CityConfig::default();
        assert_eq!(cfg.grid_size(), 13);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_blocks_rejected() {
        let cfg = CityConfig { num_blocks: 0, ..CityConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn inverted_speed_range_rejected() {
        let cfg = CityConfig { min_speed: 0.04, max_speed: 0.01, ..CityConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn speed_above_right_turn_rejected() {
        let cfg = CityConfig { max_speed: 0.5, ..CityConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::{FrameClock, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(10).offset(3), Tick(13));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = FrameClock::new(60);
        for _ in 0..90 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(90));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, VehicleId, VehicleRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = VehicleRng::new(12345, VehicleId(0));
        let mut r2 = VehicleRng::new(12345, VehicleId(0));
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_vehicles_differ() {
        let mut r0 = VehicleRng::new(1, VehicleId(0));
        let mut r1 = VehicleRng::new(1, VehicleId(1));
        let a: Vec<u64> = (0..4).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..4).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent vehicles should diverge");
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
