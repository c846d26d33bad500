//! Breadth-first, uniform-cost and A* search over partial tours of the
//! Traveling Salesman Problem, with the binary heap the cost-ordered
//! searches run on.

pub mod config;
pub mod error;
pub mod priority_queue;
pub mod search_algorithms;
pub mod tour_view;

pub use error::{Result, SearchError};
pub use priority_queue::PriorityQueue;
pub use search_algorithms::{
    heuristic, path_cost, solve_astar, solve_bfs, solve_ucs, DistanceMatrix, SearchNode,
    SearchOutcome, SearchStats, Strategy, Tour,
};
