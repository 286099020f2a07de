/// Offsets of the six neighbours of a cell on the rhombus. Row `r` is shifted half a cell relative
/// to row `r - 1`, so the diagonal `(r + 1, c + 1)` touches `(r, c)` while `(r + 1, c - 1)` does not.
///
/// ```text
///  (r-1,c-1) (r-1,c)
/// (r,c-1)  (r,c)  (r,c+1)
///       (r+1,c) (r+1,c+1)
/// ```
const NEIGHBOUR_OFFSETS: [(isize, isize); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, 0), (1, 1)];

pub fn row(size: usize, cell: usize) -> usize {
    cell / size
}

pub fn col(size: usize, cell: usize) -> usize {
    cell % size
}

pub fn position(size: usize, row: usize, col: usize) -> usize {
    row * size + col
}

pub fn neighbours(size: usize, cell: usize) -> impl Iterator<Item = usize> {
    let r = row(size, cell) as isize;
    let c = col(size, cell) as isize;
    let size = size as isize;

    NEIGHBOUR_OFFSETS.iter().filter_map(move |(dr, dc)| {
        let (nr, nc) = (r + dr, c + dc);
        if nr >= 0 && nr < size && nc >= 0 && nc < size {
            Some((nr * size + nc) as usize)
        } else {
            None
        }
    })
}

pub fn are_adjacent(size: usize, a: usize, b: usize) -> bool {
    neighbours(size, a).any(|n| n == b)
}

/// Maps a cell to its image under a half turn of the board.
pub fn rotate_180(size: usize, cell: usize) -> usize {
    size * size - 1 - cell
}

/// Maps a cell to its image when rows and columns are swapped.
pub fn transpose(size: usize, cell: usize) -> usize {
    position(size, col(size, cell), row(size, cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_has_three_neighbours() {
        let mut top_left: Vec<_> = neighbours(4, 0).collect();
        top_left.sort();
        assert_eq!(top_left, vec![1, 4, 5]);

        let mut bottom_right: Vec<_> = neighbours(4, 15).collect();
        bottom_right.sort();
        assert_eq!(bottom_right, vec![10, 11, 14]);
    }

    #[test]
    fn test_obtuse_corner_has_two_neighbours() {
        let mut top_right: Vec<_> = neighbours(4, 3).collect();
        top_right.sort();
        assert_eq!(top_right, vec![2, 7]);
    }

    #[test]
    fn test_centre_has_six_neighbours() {
        assert_eq!(neighbours(4, position(4, 1, 1)).count(), 6);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for a in 0..25 {
            for b in neighbours(5, a) {
                assert!(are_adjacent(5, b, a), "{} -> {}", a, b);
            }
        }
    }

    #[test]
    fn test_transpose_swaps_row_and_column() {
        assert_eq!(transpose(3, position(3, 0, 2)), position(3, 2, 0));
        assert_eq!(transpose(4, 6), 9);
        assert_eq!(transpose(4, 5), 5);

        for cell in 0..16 {
            assert_eq!(transpose(4, transpose(4, cell)), cell);
        }
    }

    #[test]
    fn test_adjacency_is_preserved_by_symmetries() {
        for a in 0..25 {
            for b in neighbours(5, a) {
                assert!(are_adjacent(5, rotate_180(5, a), rotate_180(5, b)));
                assert!(are_adjacent(5, transpose(5, a), transpose(5, b)));
            }
        }
    }
}
