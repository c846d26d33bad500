use super::matrix::{path_cost, DistanceMatrix};
use crate::error::Result;
use std::fmt;

/// A closed tour: starts and ends at the same city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    pub(crate) fn from_closed_path(cities: Vec<usize>) -> Self {
        debug_assert!(cities.first() == cities.last());
        Self { cities }
    }

    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    pub fn start(&self) -> Option<usize> {
        self.cities.first().copied()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Consecutive `(from, to)` pairs, including the closing leg.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cities.windows(2).map(|leg| (leg[0], leg[1]))
    }

    pub fn cost(&self, matrix: &DistanceMatrix) -> Result<u64> {
        path_cost(matrix, &self.cities)
    }

    /// Every city of `0..size` appears exactly once between the two ends.
    pub fn visits_all(&self, size: usize) -> bool {
        if self.cities.len() != size + 1 || self.cities.first() != self.cities.last() {
            return false;
        }
        let mut seen = vec![false; size];
        for &city in &self.cities[..size] {
            if city >= size || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, city) in self.cities.iter().enumerate() {
            if idx > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", city)?;
        }
        Ok(())
    }
}
