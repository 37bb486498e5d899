//! Unit tests for ex-core primitives.

#[cfg(test)]
mod cell {
    use crate::{Cell, CellState};

    #[test]
    fn neighbor_order_is_fixed() {
        let c = Cell::new(5, 5);
        assert_eq!(
            c.neighbors_4(),
            [Cell::new(5, 6), Cell::new(5, 4), Cell::new(6, 5), Cell::new(4, 5)]
        );
    }

    #[test]
    fn manhattan_and_adjacency() {
        let a = Cell::new(1, 1);
        assert_eq!(a.manhattan(Cell::new(4, -1)), 5);
        assert!(a.is_adjacent(Cell::new(1, 2)));
        assert!(!a.is_adjacent(Cell::new(2, 2)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn state_codes_match_matrix_format() {
        assert_eq!(CellState::Wall.code(), 0);
        assert_eq!(CellState::Free.code(), 1);
        assert_eq!(CellState::Unknown.code(), 2);
        for s in [CellState::Wall, CellState::Free, CellState::Unknown] {
            assert_eq!(CellState::from_code(s.code()), Some(s));
        }
        assert_eq!(CellState::from_code(3), None);
    }

    #[test]
    fn default_state_is_unknown() {
        assert_eq!(CellState::default(), CellState::Unknown);
        assert!(!CellState::Unknown.is_known());
        assert!(CellState::Wall.is_known());
    }
}

#[cfg(test)]
mod geo {
    use crate::{Cell, CoreError, WorldGeometry, WorldPoint};

    fn geometry() -> WorldGeometry {
        WorldGeometry { cols: 10, rows: 8, cell_size: 20.0, agent_radius: 9.0 }
    }

    #[test]
    fn cell_of_uses_floor_division() {
        let g = geometry();
        assert_eq!(g.cell_of(WorldPoint::new(50.0, 50.0)), Cell::new(2, 2));
        assert_eq!(g.cell_of(WorldPoint::new(19.99, 0.0)), Cell::new(0, 0));
        assert_eq!(g.cell_of(WorldPoint::new(-0.5, 3.0)), Cell::new(-1, 0));
    }

    #[test]
    fn cell_center_round_trips() {
        let g = geometry();
        let c = Cell::new(3, 7);
        assert_eq!(g.cell_center(c), WorldPoint::new(70.0, 150.0));
        assert_eq!(g.cell_of(g.cell_center(c)), c);
    }

    #[test]
    fn cell_checked_rejects_off_grid_points() {
        let g = geometry();
        assert!(g.cell_checked(WorldPoint::new(199.0, 159.0)).is_ok());
        assert_eq!(
            g.cell_checked(WorldPoint::new(200.0, 10.0)),
            Err(CoreError::OutOfBounds { x: 10, y: 0, cols: 10, rows: 8 })
        );
    }

    #[test]
    fn clamp_keeps_body_inside() {
        let g = geometry();
        let p = g.clamp(WorldPoint::new(-5.0, 500.0));
        assert_eq!(p, WorldPoint::new(9.0, 160.0 - 9.0));
    }

    #[test]
    fn advanced_moves_along_heading() {
        let p = WorldPoint::new(0.0, 0.0).advanced(std::f32::consts::FRAC_PI_2, 3.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn geometry_validation() {
        assert!(geometry().validate().is_ok());
        let mut g = geometry();
        g.cols = 0;
        assert!(g.validate().is_err());
        let mut g = geometry();
        g.agent_radius = 100.0;
        assert!(g.validate().is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{Completion, ExploreConfig, SimConfig, TerminationPolicy};

    #[test]
    fn defaults_are_valid() {
        assert!(ExploreConfig::default().validate().is_ok());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn coverage_goal_must_be_a_fraction() {
        for goal in [0.0, -0.1, 1.01, f64::NAN] {
            let cfg = ExploreConfig {
                termination: TerminationPolicy::Coverage { goal, then: Completion::Idle },
                ..ExploreConfig::default()
            };
            assert!(cfg.validate().is_err(), "goal {goal} accepted");
        }
    }

    #[test]
    fn speeds_must_be_positive() {
        let cfg = ExploreConfig { nav_speed: 0.0, ..ExploreConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = ExploreConfig { wander_noise_bound: -1.0, ..ExploreConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn sensor_radius_bounded_by_grid_span() {
        let mut cfg = ExploreConfig::default();
        cfg.sensor_radius = 0;
        assert!(cfg.validate().is_ok());
        cfg.sensor_radius = cfg.geometry.cols.max(cfg.geometry.rows);
        assert!(cfg.validate().is_ok());
        cfg.sensor_radius += 1;
        assert!(cfg.validate().is_err());
        cfg.sensor_radius = u32::MAX;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_tick_rate_rejected() {
        let cfg = SimConfig { tick_rate_hz: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn clock_advances_and_converts() {
        let mut clock = SimClock::new(60);
        for _ in 0..120 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(120));
        assert!((clock.elapsed_secs() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3) + 4, Tick(7));
        assert_eq!(Tick(7).since(Tick(3)), 4);
        assert_eq!(Tick(3).since(Tick(7)), 0);
        assert_eq!(Tick(9).to_string(), "T9");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.heading(), b.heading());
        }
    }

    #[test]
    fn symmetric_respects_bound() {
        let mut r = SimRng::new(1);
        for _ in 0..1000 {
            let v = r.symmetric(0.7);
            assert!((-0.7..=0.7).contains(&v));
        }
        assert_eq!(r.symmetric(0.0), 0.0);
    }

    #[test]
    fn heading_in_range() {
        let mut r = SimRng::new(3);
        for _ in 0..1000 {
            let h = r.heading();
            assert!((0.0..std::f32::consts::TAU).contains(&h));
        }
    }
}
