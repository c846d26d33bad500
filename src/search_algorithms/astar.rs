use super::heuristic::heuristic;
use super::matrix::DistanceMatrix;
use super::node::{by_priority, NodeQueue, SearchNode};
use super::tour::Tour;
use super::{close_tour, SearchStats};
use crate::error::Result;
use log::{debug, trace, warn};

/// A* over partial tours, ordered by `cost + heuristic`.
///
/// A path that has visited every city is returned as soon as it leaves the
/// queue. Its estimate is 0, so the closing leg never affects which complete
/// path wins and the returned cycle is not always the cheapest one.
pub struct AStar<'a> {
    matrix: &'a DistanceMatrix,
    start: usize,
    open_set: NodeQueue,
    stats: SearchStats,
}

impl<'a> AStar<'a> {
    pub fn new(matrix: &'a DistanceMatrix, start: usize) -> Result<Self> {
        let mut astar = AStar {
            matrix,
            start,
            open_set: NodeQueue::new(by_priority),
            stats: SearchStats::default(),
        };
        if !matrix.is_empty() {
            matrix.check_city(start)?;
            astar.open_set.enqueue(SearchNode::root(start));
            astar.stats.record_push(astar.open_set.size());
        }
        Ok(astar)
    }

    pub fn find_path(&mut self) -> Result<Option<Tour>> {
        let size = self.matrix.size();
        while !self.open_set.is_empty() {
            let current = self.open_set.dequeue()?;

            if current.is_complete(size) {
                let tour = close_tour(self.matrix, &current, self.start);
                debug!(
                    "a* found {} (open path cost {}) after expanding {} nodes",
                    tour, current.cost, self.stats.expanded
                );
                return Ok(Some(tour));
            }

            self.stats.expanded += 1;
            trace!(
                "a* expanding {:?} at cost {} + {}",
                current.path,
                current.cost,
                current.heuristic
            );
            for city in current.unvisited(size) {
                let mut neighbor = current.child(city, self.matrix.edge(current.city, city), 0);
                neighbor.heuristic = heuristic(self.matrix, city, self.start, &neighbor.path)?;
                self.open_set.enqueue(neighbor);
                self.stats.record_push(self.open_set.size());
            }
        }
        warn!("a* exhausted its open set without a complete tour");
        Ok(None)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

pub fn solve_astar(matrix: &DistanceMatrix, start: usize) -> Result<Option<Tour>> {
    AStar::new(matrix, start)?.find_path()
}
