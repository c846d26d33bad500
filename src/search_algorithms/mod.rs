pub mod astar;
pub mod bfs;
pub mod heuristic;
pub mod matrix;
pub mod node;
pub mod tour;
pub mod ucs;

pub use astar::{solve_astar, AStar};
pub use bfs::{solve_bfs, Bfs};
pub use heuristic::heuristic;
pub use matrix::{path_cost, DistanceMatrix};
pub use node::SearchNode;
pub use tour::Tour;
pub use ucs::{solve_ucs, UniformCost};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Counters collected while a solver drains its frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Nodes put on the frontier, the root included.
    pub generated: usize,
    pub max_frontier: usize,
}

impl SearchStats {
    pub(crate) fn record_push(&mut self, frontier_len: usize) {
        self.generated += 1;
        self.max_frontier = self.max_frontier.max(frontier_len);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Bfs,
    UniformCost,
    AStar,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub tour: Option<Tour>,
    pub stats: SearchStats,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::UniformCost, Strategy::AStar];

    pub fn title(self) -> &'static str {
        match self {
            Strategy::Bfs => "Breadth First Search",
            Strategy::UniformCost => "Uniform Cost Search",
            Strategy::AStar => "A* Search",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::UniformCost => "UCS",
            Strategy::AStar => "A*",
        }
    }

    pub fn solve(self, matrix: &DistanceMatrix, start: usize) -> Result<Option<Tour>> {
        Ok(self.run(matrix, start)?.tour)
    }

    pub fn run(self, matrix: &DistanceMatrix, start: usize) -> Result<SearchOutcome> {
        let (tour, stats) = match self {
            Strategy::Bfs => {
                let mut bfs = Bfs::new(matrix, start)?;
                (bfs.run()?, bfs.stats())
            }
            Strategy::UniformCost => {
                let mut ucs = UniformCost::new(matrix, start)?;
                (ucs.run()?, ucs.stats())
            }
            Strategy::AStar => {
                let mut astar = AStar::new(matrix, start)?;
                (astar.find_path()?, astar.stats())
            }
        };
        Ok(SearchOutcome {
            strategy: self,
            tour,
            stats,
        })
    }
}

/// Appends the start city to a node that has visited every city.
pub(crate) fn close_tour(matrix: &DistanceMatrix, node: &SearchNode, start: usize) -> Tour {
    let closed = node.child(start, matrix.edge(node.city, start), 0);
    Tour::from_closed_path(closed.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_strategy_runs() {
        let matrix = DistanceMatrix::demo();
        for strategy in Strategy::ALL {
            let outcome = strategy.run(&matrix, 0).unwrap();
            assert_eq!(outcome.strategy, strategy);
            let tour = outcome.tour.unwrap();
            assert!(tour.visits_all(4), "{} returned {}", strategy.label(), tour);
            assert!(outcome.stats.generated >= outcome.stats.expanded);
        }
    }

    #[test]
    fn strategies_parse_from_snake_case() {
        let parsed: Vec<Strategy> =
            serde_json::from_str(r#"["bfs", "uniform_cost", "a_star"]"#).unwrap();
        assert_eq!(parsed, Strategy::ALL.to_vec());
    }
}
