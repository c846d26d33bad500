use super::matrix::DistanceMatrix;
use crate::error::Result;

/// Cheapest single edge from `current` to any city not in `visited`.
///
/// Looks one hop ahead only and never estimates the closing edge back to
/// `start`; `start` is bounds-checked but does not affect the result. Once
/// every city is visited the estimate is 0.
pub fn heuristic(
    matrix: &DistanceMatrix,
    current: usize,
    start: usize,
    visited: &[usize],
) -> Result<u32> {
    matrix.check_city(start)?;
    let row = matrix.row(current)?;

    Ok(row
        .iter()
        .enumerate()
        .filter(|(city, _)| !visited.contains(city))
        .map(|(_, cost)| *cost)
        .min()
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::new(vec![
            vec![0, 29, 20, 21],
            vec![29, 0, 15, 17],
            vec![20, 15, 0, 28],
            vec![21, 17, 28, 0],
        ])
        .unwrap()
    }

    #[test]
    fn one_unvisited_city_gives_its_edge() {
        let matrix = sample();
        assert_eq!(heuristic(&matrix, 1, 0, &[0, 2, 1]).unwrap(), 17);
        assert_eq!(heuristic(&matrix, 2, 0, &[0, 1, 3, 2]).unwrap(), 0);
        assert_eq!(heuristic(&matrix, 3, 0, &[0, 1, 3]).unwrap(), 28);
    }

    #[test]
    fn picks_the_cheapest_unvisited_edge() {
        let matrix = sample();
        assert_eq!(heuristic(&matrix, 0, 0, &[0]).unwrap(), 20);
        assert_eq!(heuristic(&matrix, 3, 0, &[0, 3]).unwrap(), 17);
    }

    #[test]
    fn start_city_does_not_change_the_estimate() {
        let matrix = sample();
        let from_zero = heuristic(&matrix, 2, 0, &[0, 2]).unwrap();
        let from_three = heuristic(&matrix, 2, 3, &[0, 2]).unwrap();
        assert_eq!(from_zero, from_three);
    }

    #[test]
    fn everything_visited_estimates_zero() {
        let matrix = sample();
        assert_eq!(heuristic(&matrix, 3, 0, &[0, 1, 2, 3]).unwrap(), 0);
    }

    #[test]
    fn rejects_out_of_range_cities() {
        let matrix = sample();
        assert!(matches!(
            heuristic(&matrix, 4, 0, &[0]),
            Err(SearchError::CityOutOfRange { city: 4, size: 4 })
        ));
        assert!(matches!(
            heuristic(&matrix, 1, 9, &[0]),
            Err(SearchError::CityOutOfRange { city: 9, size: 4 })
        ));
    }
}
