//! Unit tests for ex-spatial.
//!
//! Grids are drawn as ASCII: `#` Wall, `.` Free, `?` Unknown.  Row 0 is the
//! first line.

#[cfg(test)]
mod helpers {
    use std::collections::VecDeque;

    use ex_core::{Cell, CellState, SimRng};
    use ex_grid::OccupancyGrid;

    use crate::Passability;

    pub fn grid(rows: &[&str]) -> OccupancyGrid {
        let rows = rows
            .iter()
            .map(|r| {
                r.chars()
                    .map(|c| match c {
                        '#' => CellState::Wall,
                        '.' => CellState::Free,
                        _   => CellState::Unknown,
                    })
                    .collect()
            })
            .collect();
        OccupancyGrid::from_rows(rows).unwrap()
    }

    /// Random grid with roughly `wall_pct` % walls and `unknown_pct` % unknown.
    pub fn random_grid(rng: &mut SimRng, cols: u32, rows: u32, wall_pct: u32, unknown_pct: u32) -> OccupancyGrid {
        let cells = (0..cols * rows)
            .map(|_| {
                let roll: u32 = rng.gen_range(0..100);
                if roll < wall_pct {
                    CellState::Wall
                } else if roll < wall_pct + unknown_pct {
                    CellState::Unknown
                } else {
                    CellState::Free
                }
            })
            .collect();
        OccupancyGrid::from_cells(cols, rows, cells).unwrap()
    }

    /// Plain BFS hop distances from `start` under `passability`; the start
    /// cell is not checked.  `u32::MAX` marks unreachable cells.
    pub fn bfs_distances(grid: &OccupancyGrid, start: Cell, passability: Passability) -> Vec<u32> {
        let mut dist = vec![u32::MAX; grid.len()];
        let mut queue = VecDeque::new();
        dist[grid.index(start).unwrap()] = 0;
        queue.push_back(start);
        while let Some(c) = queue.pop_front() {
            let d = dist[grid.index(c).unwrap()];
            for n in c.neighbors_4() {
                if let Some(i) = grid.index(n) {
                    if dist[i] == u32::MAX && passability.permits(grid.cells()[i]) {
                        dist[i] = d + 1;
                        queue.push_back(n);
                    }
                }
            }
        }
        dist
    }
}

// ── Frontier search ───────────────────────────────────────────────────────────

#[cfg(test)]
mod frontier {
    use ex_core::{Cell, CellState, SimRng};

    use crate::{nearest_unknown, Passability};
    use super::helpers::{bfs_distances, grid, random_grid};

    #[test]
    fn finds_adjacent_unknown() {
        let g = grid(&[
            ".....",
            "..?..",
            ".....",
        ]);
        assert_eq!(nearest_unknown(&g, Cell::new(2, 0)), Some(Cell::new(2, 1)));
    }

    #[test]
    fn start_cell_unknown_is_returned() {
        let g = grid(&["?.."]);
        assert_eq!(nearest_unknown(&g, Cell::new(0, 0)), Some(Cell::new(0, 0)));
    }

    #[test]
    fn expands_through_unknown_but_not_walls() {
        let g = grid(&[
            "..#??",
            "..#??",
            "..###",
        ]);
        assert_eq!(nearest_unknown(&g, Cell::new(0, 0)), None);
    }

    #[test]
    fn tie_broken_by_neighbor_order() {
        // Both (1,0) and (1,2) are at distance 1 from (1,1); +y comes first.
        let g = grid(&[
            ".?.",
            "...",
            ".?.",
        ]);
        assert_eq!(nearest_unknown(&g, Cell::new(1, 1)), Some(Cell::new(1, 2)));
    }

    #[test]
    fn walks_around_a_wall() {
        let g = grid(&[
            ".#?",
            ".#.",
            "...",
        ]);
        assert_eq!(nearest_unknown(&g, Cell::new(0, 0)), Some(Cell::new(2, 0)));
    }

    #[test]
    fn off_grid_start_is_none() {
        let g = grid(&["??"]);
        assert_eq!(nearest_unknown(&g, Cell::new(5, 5)), None);
    }

    #[test]
    fn result_is_nearest_reachable_unknown() {
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            let g = random_grid(&mut rng, 12, 9, 30, 10);
            let start = Cell::new(rng.gen_range(0..12), rng.gen_range(0..9));
            let dist = bfs_distances(&g, start, Passability::NotWall);

            let best = g
                .iter()
                .filter(|&(_, s)| s == CellState::Unknown)
                .filter_map(|(c, _)| {
                    let d = dist[g.index(c).unwrap()];
                    (d != u32::MAX).then_some(d)
                })
                .min();

            match nearest_unknown(&g, start) {
                Some(found) => {
                    assert_eq!(g.get(found), Some(CellState::Unknown));
                    assert_eq!(Some(dist[g.index(found).unwrap()]), best);
                }
                None => assert_eq!(best, None, "missed a reachable unknown from {start}"),
            }
        }
    }
}

// ── A* router ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use ex_core::{Cell, CellState, SimRng};

    use crate::{AStarRouter, Passability, Router, SpatialError};
    use super::helpers::{bfs_distances, grid, random_grid};

    #[test]
    fn straight_corridor() {
        let g = grid(&["....."]);
        let r = AStarRouter
            .route(&g, Cell::new(0, 0), Cell::new(4, 0), Passability::KnownFree)
            .unwrap();
        assert_eq!(
            r.cells,
            vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0), Cell::new(4, 0)]
        );
        assert_eq!(r.goal(), Some(Cell::new(4, 0)));
    }

    #[test]
    fn same_cell_gives_empty_route() {
        let g = grid(&["..."]);
        let r = AStarRouter
            .route(&g, Cell::new(1, 0), Cell::new(1, 0), Passability::KnownFree)
            .unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn unknown_blocks_known_free_routing() {
        let g = grid(&[
            ".?.",
            "###",
        ]);
        let err = AStarRouter
            .route(&g, Cell::new(0, 0), Cell::new(2, 0), Passability::KnownFree)
            .unwrap_err();
        assert_eq!(err, SpatialError::NoPath { from: Cell::new(0, 0), to: Cell::new(2, 0) });

        let r = AStarRouter
            .route(&g, Cell::new(0, 0), Cell::new(2, 0), Passability::NotWall)
            .unwrap();
        assert_eq!(r.cells, vec![Cell::new(1, 0), Cell::new(2, 0)]);
    }

    #[test]
    fn wall_goal_is_unreachable() {
        let g = grid(&["..#"]);
        assert!(matches!(
            AStarRouter.route(&g, Cell::new(0, 0), Cell::new(2, 0), Passability::NotWall),
            Err(SpatialError::NoPath { .. })
        ));
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let g = grid(&["..."]);
        assert_eq!(
            AStarRouter.route(&g, Cell::new(0, 0), Cell::new(0, 3), Passability::KnownFree),
            Err(SpatialError::OutOfBounds(Cell::new(0, 3)))
        );
        assert_eq!(
            AStarRouter.route(&g, Cell::new(-1, 0), Cell::new(0, 0), Passability::KnownFree),
            Err(SpatialError::OutOfBounds(Cell::new(-1, 0)))
        );
    }

    #[test]
    fn detours_around_wall() {
        let g = grid(&[
            ".....",
            ".###.",
            ".....",
        ]);
        let r = AStarRouter
            .route(&g, Cell::new(0, 1), Cell::new(4, 1), Passability::KnownFree)
            .unwrap();
        assert_eq!(r.len(), 6);
    }

    #[test]
    fn start_cell_is_not_checked() {
        let g = grid(&["#.."]);
        let r = AStarRouter
            .route(&g, Cell::new(0, 0), Cell::new(2, 0), Passability::KnownFree)
            .unwrap();
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn optimal_adjacent_and_passable_on_random_grids() {
        let mut rng = SimRng::new(11);
        for passability in [Passability::KnownFree, Passability::NotWall] {
            for _ in 0..300 {
                let g = random_grid(&mut rng, 15, 10, 25, 10);
                let start = Cell::new(rng.gen_range(0..15), rng.gen_range(0..10));
                let goal  = Cell::new(rng.gen_range(0..15), rng.gen_range(0..10));
                let dist = bfs_distances(&g, start, passability);
                let expected = dist[g.index(goal).unwrap()];

                match AStarRouter.route(&g, start, goal, passability) {
                    Ok(route) => {
                        assert_eq!(route.len() as u32, expected, "{start} -> {goal}");
                        let mut prev = start;
                        for &c in &route.cells {
                            assert!(prev.is_adjacent(c));
                            assert_ne!(g.get(c), Some(CellState::Wall));
                            assert!(passability.permits(g.get(c).unwrap()));
                            prev = c;
                        }
                        if start != goal {
                            assert_eq!(route.goal(), Some(goal));
                        }
                    }
                    Err(SpatialError::NoPath { .. }) => {
                        assert_eq!(expected, u32::MAX, "{start} -> {goal} is reachable");
                    }
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
        }
    }

    #[test]
    fn deterministic_choice_among_equal_paths() {
        let g = grid(&[
            "...",
            "...",
            "...",
        ]);
        let a = AStarRouter.route(&g, Cell::new(0, 0), Cell::new(2, 2), Passability::KnownFree).unwrap();
        let b = AStarRouter.route(&g, Cell::new(0, 0), Cell::new(2, 2), Passability::KnownFree).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }
}
