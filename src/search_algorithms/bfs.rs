use super::matrix::DistanceMatrix;
use super::node::SearchNode;
use super::tour::Tour;
use super::{close_tour, SearchStats};
use crate::error::Result;
use log::{debug, trace, warn};
use std::collections::VecDeque;

/// Breadth-first search over partial tours.
///
/// Expands strictly level by level, so the first complete tour found is the
/// first in index order, not the cheapest.
pub struct Bfs<'a> {
    matrix: &'a DistanceMatrix,
    start: usize,
    queue: VecDeque<SearchNode>,
    stats: SearchStats,
}

impl<'a> Bfs<'a> {
    pub fn new(matrix: &'a DistanceMatrix, start: usize) -> Result<Self> {
        let mut bfs = Bfs {
            matrix,
            start,
            queue: VecDeque::new(),
            stats: SearchStats::default(),
        };
        if !matrix.is_empty() {
            matrix.check_city(start)?;
            bfs.queue.push_back(SearchNode::root(start));
            bfs.stats.record_push(bfs.queue.len());
        }
        Ok(bfs)
    }

    pub fn run(&mut self) -> Result<Option<Tour>> {
        let size = self.matrix.size();
        while let Some(node) = self.queue.pop_front() {
            if node.is_complete(size) {
                let tour = close_tour(self.matrix, &node, self.start);
                debug!(
                    "bfs found {} with cost {} after expanding {} nodes",
                    tour,
                    node.cost + u64::from(self.matrix.edge(node.city, self.start)),
                    self.stats.expanded
                );
                return Ok(Some(tour));
            }

            self.stats.expanded += 1;
            trace!("bfs expanding {:?} at cost {}", node.path, node.cost);
            for city in node.unvisited(size) {
                let child = node.child(city, self.matrix.edge(node.city, city), 0);
                self.queue.push_back(child);
                self.stats.record_push(self.queue.len());
            }
        }
        warn!("bfs exhausted its frontier without a complete tour");
        Ok(None)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

pub fn solve_bfs(matrix: &DistanceMatrix, start: usize) -> Result<Option<Tour>> {
    Bfs::new(matrix, start)?.run()
}
