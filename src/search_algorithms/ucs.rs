use super::matrix::DistanceMatrix;
use super::node::{by_cost, NodeQueue, SearchNode};
use super::tour::Tour;
use super::SearchStats;
use crate::error::Result;
use log::{debug, trace, warn};

/// Uniform-cost search over partial tours.
///
/// A path that has visited every city is not a goal by itself: its closing
/// leg back to the start is pushed as one more successor, and only a closed
/// tour leaving the queue ends the search. The first closed tour out of the
/// queue is therefore the cheapest cycle.
pub struct UniformCost<'a> {
    matrix: &'a DistanceMatrix,
    start: usize,
    frontier: NodeQueue,
    stats: SearchStats,
}

impl<'a> UniformCost<'a> {
    pub fn new(matrix: &'a DistanceMatrix, start: usize) -> Result<Self> {
        let mut ucs = UniformCost {
            matrix,
            start,
            frontier: NodeQueue::new(by_cost),
            stats: SearchStats::default(),
        };
        if !matrix.is_empty() {
            matrix.check_city(start)?;
            ucs.frontier.enqueue(SearchNode::root(start));
            ucs.stats.record_push(ucs.frontier.size());
        }
        Ok(ucs)
    }

    pub fn run(&mut self) -> Result<Option<Tour>> {
        let size = self.matrix.size();
        while !self.frontier.is_empty() {
            let node = self.frontier.dequeue()?;

            if node.is_closed(size) {
                debug!(
                    "ucs found {:?} with cost {} after expanding {} nodes",
                    node.path, node.cost, self.stats.expanded
                );
                return Ok(Some(Tour::from_closed_path(node.path)));
            }

            self.stats.expanded += 1;
            trace!("ucs expanding {:?} at cost {}", node.path, node.cost);
            if node.is_complete(size) {
                let closing = node.child(self.start, self.matrix.edge(node.city, self.start), 0);
                self.frontier.enqueue(closing);
                self.stats.record_push(self.frontier.size());
                continue;
            }

            for city in node.unvisited(size) {
                let child = node.child(city, self.matrix.edge(node.city, city), 0);
                self.frontier.enqueue(child);
                self.stats.record_push(self.frontier.size());
            }
        }
        warn!("ucs exhausted its frontier without a complete tour");
        Ok(None)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

pub fn solve_ucs(matrix: &DistanceMatrix, start: usize) -> Result<Option<Tour>> {
    UniformCost::new(matrix, start)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_cheapest_cycle() {
        let matrix = DistanceMatrix::new(vec![
            vec![0, 29, 20, 21],
            vec![29, 0, 15, 17],
            vec![20, 15, 0, 28],
            vec![21, 17, 28, 0],
        ])
        .unwrap();
        let tour = solve_ucs(&matrix, 0).unwrap().unwrap();
        assert!(tour.visits_all(4));
        assert_eq!(tour.start(), Some(0));
        assert_eq!(tour.cost(&matrix).unwrap(), 73);
    }

    #[test]
    fn return_leg_counts_on_asymmetric_costs() {
        // 0 -> 1 -> 2 is the cheaper open path but 2 -> 0 is expensive
        let matrix = DistanceMatrix::new(vec![
            vec![0, 1, 2],
            vec![1, 0, 1],
            vec![100, 2, 0],
        ])
        .unwrap();
        let tour = solve_ucs(&matrix, 0).unwrap().unwrap();
        assert_eq!(tour.cities(), &[0, 2, 1, 0]);
        assert_eq!(tour.cost(&matrix).unwrap(), 5);
    }

    #[test]
    fn starts_from_any_city() {
        let matrix = DistanceMatrix::new(vec![
            vec![0, 29, 20, 21],
            vec![29, 0, 15, 17],
            vec![20, 15, 0, 28],
            vec![21, 17, 28, 0],
        ])
        .unwrap();
        let tour = solve_ucs(&matrix, 2).unwrap().unwrap();
        assert_eq!(tour.start(), Some(2));
        assert_eq!(tour.cities().last(), Some(&2));
        assert_eq!(tour.cost(&matrix).unwrap(), 73);
    }

    #[test]
    fn large_edges_keep_the_exact_cost() {
        let edge = u32::MAX / 2 + 1;
        let matrix = DistanceMatrix::new(vec![vec![0, edge], vec![edge, 0]]).unwrap();
        let tour = solve_ucs(&matrix, 0).unwrap().unwrap();
        assert_eq!(tour.cities(), &[0, 1, 0]);
        assert_eq!(tour.cost(&matrix).unwrap(), 2 * u64::from(edge));
    }

    #[test]
    fn empty_matrix_has_no_solution() {
        let matrix = DistanceMatrix::new(Vec::new()).unwrap();
        let mut ucs = UniformCost::new(&matrix, 0).unwrap();
        assert!(ucs.run().unwrap().is_none());
        assert_eq!(ucs.stats().expanded, 0);
    }
}
