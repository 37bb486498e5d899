//! Unit tests for ex-mobility.

#[cfg(test)]
mod helpers {
    use ex_core::{ExploreConfig, WorldGeometry};
    use ex_grid::{TruthGrid, TruthGridBuilder};

    use crate::MotionController;

    /// 10×10 cells of 20 units, agent radius 5.
    pub fn config(noise: f32) -> ExploreConfig {
        ExploreConfig {
            geometry: WorldGeometry { cols: 10, rows: 10, cell_size: 20.0, agent_radius: 5.0 },
            wander_speed: 8.0,
            nav_speed: 5.0,
            wander_noise_bound: noise,
            ..ExploreConfig::default()
        }
    }

    pub fn controller(noise: f32) -> MotionController {
        MotionController::new(&config(noise))
    }

    pub fn open_world() -> TruthGrid {
        TruthGridBuilder::new(10, 10).unwrap().build()
    }

    /// Open world with a vertical wall at x = 5.
    pub fn wall_column() -> TruthGrid {
        TruthGridBuilder::new(10, 10).unwrap().wall_rect(5, 0, 1, 10).build()
    }

    /// Open world with a horizontal wall at y = 5.
    pub fn wall_row() -> TruthGrid {
        TruthGridBuilder::new(10, 10).unwrap().wall_rect(0, 5, 10, 1).build()
    }
}

// ── Collision primitive ───────────────────────────────────────────────────────

#[cfg(test)]
mod blocked {
    use ex_core::{Cell, CellState, WorldPoint};
    use ex_grid::OccupancyGrid;

    use super::helpers::{controller, wall_column};

    #[test]
    fn wall_and_off_grid_block() {
        let m = controller(0.0);
        let truth = wall_column();
        assert!(m.blocked(WorldPoint::new(105.0, 50.0), truth.as_grid()));
        assert!(m.blocked(WorldPoint::new(-1.0, 50.0), truth.as_grid()));
        assert!(m.blocked(WorldPoint::new(50.0, 200.0), truth.as_grid()));
        assert!(!m.blocked(WorldPoint::new(95.0, 50.0), truth.as_grid()));
    }

    #[test]
    fn unknown_does_not_block() {
        let m = controller(0.0);
        let mut g = OccupancyGrid::new(10, 10, CellState::Unknown).unwrap();
        assert!(!m.blocked(WorldPoint::new(30.0, 30.0), &g));
        g.set(Cell::new(1, 1), CellState::Wall).unwrap();
        assert!(m.blocked(WorldPoint::new(30.0, 30.0), &g));
    }
}

// ── Route following ───────────────────────────────────────────────────────────

#[cfg(test)]
mod follow {
    use ex_core::{Cell, WorldPoint};

    use crate::{AgentState, FollowStep};
    use super::helpers::controller;

    #[test]
    fn empty_route_does_nothing() {
        let m = controller(0.0);
        let mut a = AgentState::new(WorldPoint::new(30.0, 30.0), 0.0);
        assert_eq!(m.follow_route(&mut a), FollowStep::NoRoute);
        assert_eq!(a.position, WorldPoint::new(30.0, 30.0));
    }

    #[test]
    fn moves_at_nav_speed_toward_cell_center() {
        let m = controller(0.0);
        let mut a = AgentState::new(WorldPoint::new(10.0, 10.0), 1.0);
        a.set_route([Cell::new(1, 0)]);
        assert_eq!(m.follow_route(&mut a), FollowStep::Moving);
        assert!((a.position.x - 15.0).abs() < 1e-4);
        assert!((a.position.y - 10.0).abs() < 1e-4);
        assert!(a.heading.abs() < 1e-6);
        assert_eq!(a.route.len(), 1);
    }

    #[test]
    fn snaps_when_within_one_step() {
        let m = controller(0.0);
        let mut a = AgentState::new(WorldPoint::new(27.0, 10.0), 0.0);
        a.set_route([Cell::new(1, 0), Cell::new(2, 0)]);
        assert_eq!(m.follow_route(&mut a), FollowStep::Reached(Cell::new(1, 0)));
        assert_eq!(a.position, WorldPoint::new(30.0, 10.0));
        assert_eq!(a.route_goal(), Some(Cell::new(2, 0)));
    }

    #[test]
    fn route_runs_to_completion() {
        let m = controller(0.0);
        let mut a = AgentState::new(WorldPoint::new(10.0, 10.0), 0.0);
        a.set_route([Cell::new(1, 0), Cell::new(1, 1), Cell::new(2, 1)]);
        let mut ticks = 0;
        while a.has_route() {
            m.follow_route(&mut a);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(a.position, WorldPoint::new(50.0, 30.0));
        // Each 20-unit leg: four 5-unit moves, then a snap.
        assert_eq!(ticks, 15);
    }
}

// ── Wandering ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander {
    use std::f32::consts::{FRAC_PI_2, PI};

    use ex_core::{SimRng, WorldPoint};

    use crate::AgentState;
    use super::helpers::{controller, open_world, wall_column, wall_row};

    #[test]
    fn straight_line_without_hit() {
        let m = controller(0.7);
        let mut rng = SimRng::new(1);
        let mut a = AgentState::new(WorldPoint::new(50.0, 50.0), 0.0);
        assert!(!m.wander(&mut a, &open_world(), &mut rng));
        assert!((a.position.x - 58.0).abs() < 1e-4);
        assert!(a.heading.abs() < 1e-6);
    }

    #[test]
    fn reflects_off_left_border() {
        let m = controller(0.0);
        let mut rng = SimRng::new(1);
        let mut a = AgentState::new(WorldPoint::new(11.0, 50.0), PI);
        assert!(m.wander(&mut a, &open_world(), &mut rng));
        assert!(a.heading.abs() < 1e-3, "heading {}", a.heading);
        assert!((a.position.x - 19.0).abs() < 1e-3);
    }

    #[test]
    fn reflects_dx_off_vertical_wall() {
        let m = controller(0.0);
        let mut rng = SimRng::new(1);
        let mut a = AgentState::new(WorldPoint::new(95.0, 110.0), 0.0);
        assert!(m.wander(&mut a, &wall_column(), &mut rng));
        assert!((a.heading.abs() - PI).abs() < 1e-3, "heading {}", a.heading);
        assert!((a.position.x - 87.0).abs() < 1e-3);
    }

    #[test]
    fn reflects_dy_off_horizontal_wall() {
        let m = controller(0.0);
        let mut rng = SimRng::new(1);
        let mut a = AgentState::new(WorldPoint::new(110.0, 95.0), FRAC_PI_2);
        assert!(m.wander(&mut a, &wall_row(), &mut rng));
        assert!((a.heading + FRAC_PI_2).abs() < 1e-3, "heading {}", a.heading);
        assert!((a.position.y - 87.0).abs() < 1e-3);
    }

    #[test]
    fn bounce_noise_is_bounded() {
        let m = controller(0.7);
        let mut rng = SimRng::new(99);
        for _ in 0..200 {
            let mut a = AgentState::new(WorldPoint::new(95.0, 110.0), 0.0);
            assert!(m.wander(&mut a, &wall_column(), &mut rng));
            // Reflected heading is π; perturbation within ±0.7.
            let deviation = PI - a.heading.rem_euclid(std::f32::consts::TAU);
            assert!(deviation.abs() <= 0.7 + 1e-4, "heading {}", a.heading);
        }
    }

    #[test]
    fn stays_inside_world_bounds() {
        let m = controller(0.7);
        let mut rng = SimRng::new(5);
        let truth = wall_column();
        let mut a = AgentState::new(WorldPoint::new(40.0, 40.0), 0.3);
        for _ in 0..2_000 {
            m.wander(&mut a, &truth, &mut rng);
            assert!(a.position.x >= 5.0 && a.position.x <= 195.0);
            assert!(a.position.y >= 5.0 && a.position.y <= 195.0);
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        let m = controller(0.35);
        let truth = wall_row();
        let run = |seed| {
            let mut rng = SimRng::new(seed);
            let mut a = AgentState::new(WorldPoint::new(40.0, 40.0), 1.0);
            for _ in 0..500 {
                m.wander(&mut a, &truth, &mut rng);
            }
            a
        };
        assert_eq!(run(3), run(3));
    }
}

// ── Manual steps ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod manual {
    use ex_core::WorldPoint;

    use crate::AgentState;
    use super::helpers::{controller, wall_column};

    #[test]
    fn free_step_moves() {
        let m = controller(0.0);
        let mut a = AgentState::new(WorldPoint::new(50.0, 50.0), 0.0);
        assert!(m.manual_step(&mut a, 0.0, 8.0, &wall_column()));
        assert_eq!(a.position, WorldPoint::new(50.0, 58.0));
    }

    #[test]
    fn wall_step_is_refused() {
        let m = controller(0.0);
        let mut a = AgentState::new(WorldPoint::new(95.0, 50.0), 0.0);
        assert!(!m.manual_step(&mut a, 8.0, 0.0, &wall_column()));
        assert_eq!(a.position, WorldPoint::new(95.0, 50.0));
    }

    #[test]
    fn off_grid_step_is_refused() {
        let m = controller(0.0);
        let mut a = AgentState::new(WorldPoint::new(6.0, 50.0), 0.0);
        assert!(!m.manual_step(&mut a, -8.0, 0.0, &wall_column()));
        assert_eq!(a.position, WorldPoint::new(6.0, 50.0));
    }

    #[test]
    fn step_is_clamped_to_body_radius() {
        let m = controller(0.0);
        let mut a = AgentState::new(WorldPoint::new(8.0, 50.0), 0.0);
        assert!(m.manual_step(&mut a, -6.0, 0.0, &wall_column()));
        assert_eq!(a.position, WorldPoint::new(5.0, 50.0));
    }
}
