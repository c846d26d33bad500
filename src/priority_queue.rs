use crate::error::{Result, SearchError};
use std::cmp::Ordering;
use std::fmt;

/// Binary min-heap backed by a `Vec`.
///
/// The queue has no opinion on how its items compare: the comparator passed
/// to [`PriorityQueue::new`] decides which item is "smaller". Items that
/// compare equal come out in whatever order the heap structure leaves them.
pub struct PriorityQueue<T, F> {
    nodes: Vec<T>,
    compare: F,
}

impl<T: fmt::Display, F> fmt::Display for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, val) in self.nodes.iter().enumerate() {
            let left_idx = 2 * idx + 1;
            let right_idx = 2 * idx + 2;

            write!(f, "{}", val)?;
            if left_idx < self.nodes.len() {
                write!(f, " -> {}", self.nodes[left_idx])?;
            }
            if right_idx < self.nodes.len() {
                write!(f, " {}", self.nodes[right_idx])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<T: Ord> PriorityQueue<T, fn(&T, &T) -> Ordering> {
    /// Queue ordered by the items' own `Ord`, smallest first.
    pub fn min_first() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self {
            nodes: Vec::new(),
            compare,
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.nodes.push(item);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the smallest item.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.nodes.is_empty() {
            return Err(SearchError::EmptyQueue);
        }
        // swap_remove moves the last slot into the root
        let root = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear()
    }

    /// Checks that no child is smaller than its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.nodes.len()).all(|idx| !self.less(idx, (idx - 1) / 2))
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent_idx = (idx - 1) / 2;
            if self.less(idx, parent_idx) {
                self.nodes.swap(idx, parent_idx);
                idx = parent_idx;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let end = self.nodes.len();
        loop {
            let mut child = 2 * idx + 1;
            if child >= end {
                break;
            }
            let right = child + 1;
            // left wins ties
            if right < end && self.less(right, child) {
                child = right;
            }
            if self.less(child, idx) {
                self.nodes.swap(idx, child);
                idx = child;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.nodes[a], &self.nodes[b]) == Ordering::Less
    }
}
