//! This program partitions a $3\times20$ board into the twelve pentominoes,
//! each used exactly once, and prints every arrangement.
//!
//! The matrix has one column per piece, which makes every piece appear once,
//! followed by one column per cell of the board. Each way of placing a piece,
//! in any of its rotations and reflections, becomes a row that covers the
//! column of the piece and the columns of its five cells. The board admits
//! just two essentially different solutions, as C. J. Bouwkamp discovered in
//! 1967; each of them shows up four times because the rectangle has four
//! symmetries.
use dlx_matrix::validate::validate;
use dlx_matrix::{Matrix, Solution};
use smallvec::SmallVec;
use std::ops::ControlFlow;

/// The number of rows of the board.
const HEIGHT: i32 = 3;

/// The number of columns of the board.
const WIDTH: i32 = 20;

/// The cells of a piece, relative to its bounding box.
type Shape = SmallVec<[(i32, i32); 5]>;

/// The twelve pentominoes, in Conway's naming.
const PIECES: [(char, [(i32, i32); 5]); 12] = [
    ('F', [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]),
    ('I', [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
    ('L', [(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]),
    ('N', [(0, 1), (1, 1), (2, 0), (2, 1), (3, 0)]),
    ('P', [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]),
    ('T', [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]),
    ('U', [(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]),
    ('V', [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
    ('W', [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]),
    ('X', [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]),
    ('Y', [(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)]),
    ('Z', [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]),
];

/// Returns the distinct rotations and reflections of a piece, each shifted
/// so that its smallest coordinates are zero.
fn orientations(cells: &[(i32, i32); 5]) -> Vec<Shape> {
    let transforms: [fn((i32, i32)) -> (i32, i32); 8] = [
        |(x, y)| (x, y),
        |(x, y)| (x, -y),
        |(x, y)| (-x, y),
        |(x, y)| (-x, -y),
        |(x, y)| (y, x),
        |(x, y)| (y, -x),
        |(x, y)| (-y, x),
        |(x, y)| (-y, -x),
    ];
    let mut shapes: Vec<Shape> = Vec::new();
    for transform in transforms {
        let mut shape: Shape = cells.iter().copied().map(transform).collect();
        let min_x = shape.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let min_y = shape.iter().map(|&(_, y)| y).min().unwrap_or(0);
        for (x, y) in &mut shape {
            *x -= min_x;
            *y -= min_y;
        }
        shape.sort_unstable();
        if !shapes.contains(&shape) {
            shapes.push(shape);
        }
    }
    shapes
}

/// Returns the matrix column that stands for a cell of the board.
fn cell(x: i32, y: i32) -> usize {
    PIECES.len() + (x * WIDTH + y) as usize
}

fn main() -> dlx_matrix::Result<()> {
    let mut matrix = Matrix::new(PIECES.len() + (HEIGHT * WIDTH) as usize);

    // For every row of the matrix, the piece and the cells it occupies.
    let mut placements: Vec<(char, Shape)> = Vec::new();
    for (piece, (name, cells)) in PIECES.iter().enumerate() {
        for shape in orientations(cells) {
            let height = shape.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
            let width = shape.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
            for dx in 0..=HEIGHT - height {
                for dy in 0..=WIDTH - width {
                    let placed: Shape = shape.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
                    let mut columns = vec![piece];
                    columns.extend(placed.iter().map(|&(x, y)| cell(x, y)));
                    matrix.add_row(columns)?;
                    placements.push((*name, placed));
                }
            }
        }
    }
    if let Err(defects) = validate(&matrix) {
        panic!("malformed matrix: {defects:?}");
    }

    let count = matrix.search_with(usize::MAX, |solution: &Solution<'_>| {
        let mut board = [['.'; WIDTH as usize]; HEIGHT as usize];
        for row in solution.rows() {
            let (name, placed) = &placements[row];
            for &(x, y) in placed {
                board[x as usize][y as usize] = *name;
            }
        }
        println!("Solution {}:", solution.count());
        for line in &board {
            println!("{}", line.iter().collect::<String>());
        }
        ControlFlow::Continue(())
    });
    println!("{count} arrangements");
    assert_eq!(count, 8);
    Ok(())
}
