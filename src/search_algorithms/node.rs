use crate::priority_queue::PriorityQueue;
use std::cmp::Ordering;

/// A partial tour on the frontier.
///
/// Every node owns its own copy of the path; siblings share nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub city: usize,
    pub path: Vec<usize>,
    /// Sum of the path's edges, widened so long paths of large edges fit.
    pub cost: u64,
    pub heuristic: u32,
}

pub type NodeOrder = fn(&SearchNode, &SearchNode) -> Ordering;

/// Frontier used by the cost-ordered solvers.
pub type NodeQueue = PriorityQueue<SearchNode, NodeOrder>;

impl SearchNode {
    pub fn root(start: usize) -> Self {
        Self {
            city: start,
            path: vec![start],
            cost: 0,
            heuristic: 0,
        }
    }

    /// Extends a copy of this path by `city`.
    pub fn child(&self, city: usize, step_cost: u32, heuristic: u32) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(city);
        Self {
            city,
            path,
            cost: self.cost + u64::from(step_cost),
            heuristic,
        }
    }

    pub fn priority(&self) -> u64 {
        self.cost + u64::from(self.heuristic)
    }

    pub fn has_visited(&self, city: usize) -> bool {
        self.path.contains(&city)
    }

    /// Cities in `0..size` that are not on the path yet, in index order.
    pub fn unvisited(&self, size: usize) -> impl Iterator<Item = usize> + '_ {
        (0..size).filter(move |city| !self.has_visited(*city))
    }

    /// All `size` cities are on the path; the cycle is still open.
    pub fn is_complete(&self, size: usize) -> bool {
        self.path.len() == size
    }

    /// The path has returned to its first city.
    pub fn is_closed(&self, size: usize) -> bool {
        self.path.len() == size + 1 && self.path.first() == self.path.last()
    }
}

/// Accumulated cost only.
pub fn by_cost(a: &SearchNode, b: &SearchNode) -> Ordering {
    a.cost.cmp(&b.cost)
}

/// Accumulated cost plus the heuristic estimate.
pub fn by_priority(a: &SearchNode, b: &SearchNode) -> Ordering {
    a.priority().cmp(&b.priority())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_copy_the_path() {
        let root = SearchNode::root(0);
        let left = root.child(2, 20, 0);
        let right = root.child(3, 21, 5);

        assert_eq!(root.path, vec![0]);
        assert_eq!(left.path, vec![0, 2]);
        assert_eq!(right.path, vec![0, 3]);
        assert_eq!(right.cost, 21);
        assert_eq!(right.priority(), 26);
    }

    #[test]
    fn unvisited_skips_path_cities() {
        let node = SearchNode::root(1).child(3, 4, 0);
        assert_eq!(node.unvisited(5).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert!(!node.is_complete(5));
        assert!(node.is_complete(2));
    }

    #[test]
    fn closing_returns_to_start() {
        let node = SearchNode::root(0).child(1, 3, 0);
        assert!(node.is_complete(2));
        let closed = node.child(0, 2, 0);
        assert!(closed.is_closed(2));
        assert_eq!(closed.cost, 5);
    }

    #[test]
    fn large_edges_do_not_overflow() {
        let edge = u32::MAX / 2 + 1;
        let node = SearchNode::root(0).child(1, edge, edge).child(0, edge, edge);
        assert_eq!(node.cost, 2 * u64::from(edge));
        assert_eq!(node.priority(), 3 * u64::from(edge));
    }

    #[test]
    fn orders_compare_different_keys() {
        let cheap = SearchNode::root(0).child(1, 5, 10);
        let dear = SearchNode::root(0).child(2, 8, 0);
        assert_eq!(by_cost(&cheap, &dear), Ordering::Less);
        assert_eq!(by_priority(&cheap, &dear), Ordering::Greater);
    }
}
