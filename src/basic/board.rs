use itertools::Itertools;
use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};

/// Sorted (row-major) and deduplicated list of the given cells
pub fn get_occupied_cells<'a>(cells: impl IntoIterator<Item = &'a GridPoint>) -> Vec<GridPoint> {
    cells.into_iter().copied().sorted_unstable().dedup().collect()
}

/// Uniformly random cell of the board that isn't in `occupied_cells`,
/// `occupied_cells` must be sorted and deduplicated and lie on the board
pub fn random_free_spot(occupied_cells: &[GridPoint], board_dim: GridDim, rng: &mut impl Rng) -> Option<GridPoint> {
    let free_spaces = board_dim.area() - occupied_cells.len();
    if free_spaces == 0 {
        return None;
    }

    // skip over occupied cells, they're sorted so every skip can only
    // push the index past later occupied cells
    let mut new_idx = (0..free_spaces).sample_single(rng);
    for &cell in occupied_cells {
        if board_dim.linear_index(cell) <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < board_dim.area());
    Some(board_dim.from_linear_index(new_idx))
}

/// Rejection sampling over the whole board with at most `attempts` tries,
/// falls back to [`random_free_spot`] which always terminates. Both pick
/// uniformly among free cells.
pub fn sample_free_spot(
    occupied: &[GridPoint],
    board_dim: GridDim,
    attempts: usize,
    rng: &mut impl Rng,
) -> Option<GridPoint> {
    for _ in 0..attempts {
        let candidate = GridPoint {
            col: rng.gen_range(0..board_dim.col),
            row: rng.gen_range(0..board_dim.row),
        };
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    random_free_spot(&get_occupied_cells(occupied), board_dim, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_cells(dim: GridDim) -> Vec<GridPoint> {
        (0..dim.row)
            .cartesian_product(0..dim.col)
            .map(|(row, col)| GridPoint { col, row })
            .collect()
    }

    #[test]
    fn free_spot_is_never_occupied() {
        let dim = GridDim { col: 6, row: 5 };
        let mut rng = StdRng::seed_from_u64(7);
        // every other cell taken
        let occupied = get_occupied_cells(all_cells(dim).iter().step_by(2));

        for _ in 0..500 {
            let spot = random_free_spot(&occupied, dim, &mut rng).unwrap();
            assert!(dim.contains(spot));
            assert!(!occupied.contains(&spot), "{spot:?} is occupied");
        }
    }

    #[test]
    fn free_spot_finds_the_last_hole() {
        let dim = GridDim { col: 4, row: 3 };
        let hole = GridPoint { col: 2, row: 1 };
        let cells = all_cells(dim);
        let occupied = get_occupied_cells(cells.iter().filter(|&&c| c != hole));
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            assert_eq!(random_free_spot(&occupied, dim, &mut rng), Some(hole));
            assert_eq!(sample_free_spot(&occupied, dim, 3, &mut rng), Some(hole));
        }
    }

    #[test]
    fn full_board_has_no_free_spot() {
        let dim = GridDim { col: 3, row: 3 };
        let cells = all_cells(dim);
        let occupied = get_occupied_cells(&cells);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(random_free_spot(&occupied, dim, &mut rng), None);
        assert_eq!(sample_free_spot(&cells, dim, 10, &mut rng), None);
    }

    #[test]
    fn every_free_cell_is_reachable() {
        let dim = GridDim { col: 3, row: 2 };
        let occupied = vec![GridPoint { col: 1, row: 0 }];
        let mut rng = StdRng::seed_from_u64(42);

        let seen = (0..1000)
            .filter_map(|_| random_free_spot(&occupied, dim, &mut rng))
            .unique()
            .count();
        assert_eq!(seen, dim.area() - occupied.len());
    }

    #[test]
    fn occupied_cells_are_sorted_and_deduplicated() {
        let cells = [
            GridPoint { col: 3, row: 1 },
            GridPoint { col: 0, row: 2 },
            GridPoint { col: 3, row: 1 },
            GridPoint { col: 5, row: 0 },
        ];
        assert_eq!(
            get_occupied_cells(&cells),
            vec![
                GridPoint { col: 5, row: 0 },
                GridPoint { col: 3, row: 1 },
                GridPoint { col: 0, row: 2 },
            ]
        );
    }
}
