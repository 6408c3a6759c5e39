use twenty48::{Grid, GridError};

#[test]
fn test_from_cells_length() {
    let ok = Grid::from_cells(2, vec![0u64, 2, 4, 8]);
    assert!(ok.is_ok());

    let err = Grid::from_cells(3, vec![0u64; 8]);
    assert!(matches!(err, Err(GridError::LengthMismatch { expected: 9, found: 8 })));
}

#[test]
fn test_get_set_bounds() {
    let mut grid = Grid::<u64>::new(3);
    assert!(grid.cells().iter().all(|&v| v == 0));

    grid.set(1, 2, 8).unwrap();
    assert_eq!(grid.get(1, 2).unwrap(), 8);
    assert_eq!(grid.cells()[5], 8);

    assert_eq!(
        grid.set(3, 0, 2).unwrap_err(),
        GridError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert!(grid.get(0, 3).is_err());

    grid.clear_all();
    assert_eq!(grid.get(1, 2).unwrap(), 0);
}

#[test]
fn test_rotate_clockwise() {
    // 1 2      3 1
    // 3 4  ->  4 2
    let grid = Grid::from_cells(2, vec![1u64, 2, 3, 4]).unwrap();
    assert_eq!(grid.rotated(true).cells(), &[3, 1, 4, 2]);
    assert_eq!(grid.rotated(false).cells(), &[2, 4, 1, 3]);
}

#[test]
fn test_iter_and_rows() {
    let grid = Grid::from_cells(2, vec![0u64, 2, 4, 0]).unwrap();
    let set: Vec<_> = grid.iter().filter(|&(_, _, v)| v != 0).collect();
    assert_eq!(set, vec![(0, 1, 2), (1, 0, 4)]);
    let rows: Vec<&[u64]> = grid.rows().collect();
    assert_eq!(rows, vec![&[0u64, 2][..], &[4u64, 0][..]]);
}
