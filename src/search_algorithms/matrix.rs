use crate::error::{Result, SearchError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Square table of non-negative travel costs, `costs[from][to]`.
///
/// Symmetry is not required; the diagonal is conventionally zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct DistanceMatrix {
    costs: Vec<Vec<u32>>,
}

impl DistanceMatrix {
    pub fn new(costs: Vec<Vec<u32>>) -> Result<Self> {
        let size = costs.len();
        if let Some((row, len)) = costs
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != size)
        {
            return Err(SearchError::NotSquare { row, len, size });
        }
        Ok(Self { costs })
    }

    /// The four-city instance the demo runs when no configuration is given.
    pub fn demo() -> Self {
        Self {
            costs: vec![
                vec![0, 29, 20, 21],
                vec![29, 0, 15, 17],
                vec![20, 15, 0, 28],
                vec![21, 17, 28, 0],
            ],
        }
    }

    /// Symmetric matrix with a zero diagonal and every other cost drawn from
    /// `1..=max_cost`.
    pub fn random<R: Rng + ?Sized>(size: usize, max_cost: u32, rng: &mut R) -> Self {
        let max_cost = max_cost.max(1);
        let mut costs = vec![vec![0; size]; size];
        for from in 0..size {
            for to in (from + 1)..size {
                let cost = rng.gen_range(1..=max_cost);
                costs[from][to] = cost;
                costs[to][from] = cost;
            }
        }
        Self { costs }
    }

    pub fn size(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn cost(&self, from: usize, to: usize) -> Result<u32> {
        self.check_city(from)?;
        self.check_city(to)?;
        Ok(self.costs[from][to])
    }

    pub fn row(&self, city: usize) -> Result<&[u32]> {
        self.check_city(city)?;
        Ok(&self.costs[city])
    }

    pub fn check_city(&self, city: usize) -> Result<()> {
        if city < self.size() {
            Ok(())
        } else {
            Err(SearchError::CityOutOfRange {
                city,
                size: self.size(),
            })
        }
    }

    pub fn max_cost(&self) -> u32 {
        self.costs.iter().flatten().copied().max().unwrap_or(0)
    }

    // Callers guarantee both cities are in range.
    #[inline]
    pub(crate) fn edge(&self, from: usize, to: usize) -> u32 {
        self.costs[from][to]
    }
}

impl TryFrom<Vec<Vec<u32>>> for DistanceMatrix {
    type Error = SearchError;

    fn try_from(costs: Vec<Vec<u32>>) -> Result<Self> {
        Self::new(costs)
    }
}

impl From<DistanceMatrix> for Vec<Vec<u32>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.costs
    }
}

/// Sum of the edge costs between consecutive cities of `path`.
///
/// The path is not checked for completeness; only its indices are validated.
/// The sum is taken in `u64`, so no path of `u32` edges can overflow it.
pub fn path_cost(matrix: &DistanceMatrix, path: &[usize]) -> Result<u64> {
    for &city in path {
        matrix.check_city(city)?;
    }
    Ok(path
        .windows(2)
        .map(|leg| u64::from(matrix.edge(leg[0], leg[1])))
        .sum())
}
