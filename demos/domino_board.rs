//! This program determines in how many ways 18 dominoes can fill a $6\times6$
//! board, and draws the first arrangement found. We set up an exact cover
//! matrix with one column for each of the $6\times6=36$ cells, and one row
//! for each of the $2\times6\times5=60$ placements of a domino.
//!
//! P. W. Kasteleyn obtained a closed formula for the number of domino coverings
//! of an $m\times n$ rectangle \[_Physica_ **27** (1961), pp. 1209–1225].
//! Interested readers can learn more by working out exercise 7.51 in the second
//! edition of the book _Concrete Mathematics_ (Addison–Wesley, 1994) by R. Graham,
//! D. E. Knuth and O. Patashnik.
use dlx_matrix::{Matrix, Solution};
use std::ops::ControlFlow;

/// The number $m$ of rows of the board.
const ROWS: usize = 6;

/// The number $n$ of columns of the board.
const COLUMNS: usize = 6;

/// Returns the matrix column that stands for a cell.
fn cell(x: usize, y: usize) -> usize {
    x * COLUMNS + y
}

fn main() -> dlx_matrix::Result<()> {
    let mut matrix = Matrix::new(ROWS * COLUMNS);

    // Remember which pair of cells each row stands for. We start with the
    // $m(n-1)$ horizontal placements,
    let mut dominoes = Vec::new();
    for x in 0..ROWS {
        for y in 0..COLUMNS - 1 {
            dominoes.push([(x, y), (x, y + 1)]);
        }
    }
    // and continue with the $n(m-1)$ vertical ones.
    for y in 0..COLUMNS {
        for x in 0..ROWS - 1 {
            dominoes.push([(x, y), (x + 1, y)]);
        }
    }
    for [(x0, y0), (x1, y1)] in &dominoes {
        matrix.add_row([cell(*x0, *y0), cell(*x1, *y1)])?;
    }

    let mut board = [['.'; COLUMNS]; ROWS];
    let count = matrix.search_with(usize::MAX, |solution: &Solution<'_>| {
        if solution.count() == 1 {
            for row in solution.rows() {
                let [(x0, y0), (x1, y1)] = dominoes[row];
                let (a, b) = if x0 == x1 { ('<', '>') } else { ('^', 'v') };
                board[x0][y0] = a;
                board[x1][y1] = b;
            }
        }
        ControlFlow::Continue(())
    });

    for line in &board {
        println!("{}", line.iter().collect::<String>());
    }
    println!("{count} tilings");
    assert_eq!(count, 6728);
    Ok(())
}
