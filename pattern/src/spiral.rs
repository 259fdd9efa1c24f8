//! Boundary-peeling fill of a square matrix.
//!
//! Each visited cell gets `counter * boundary`, where `boundary` is the index of
//! the row or column currently being walked. The counter advances once per cell.

use crate::kind::PatternKind;
use crate::shape::{Cell, CellStyle, Row, Shape};
use crate::size::Size;

const GRID: CellStyle = CellStyle::new(4, " ");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spiral {
    pub grid: Vec<Vec<u32>>,
    pub visits: usize,
}

pub fn fill(size: Size) -> Spiral {
    let n = size.get();
    let mut grid = vec![vec![0u32; n]; n];
    let mut visits = 0usize;

    // signed so `right` and `bottom` can step past zero
    let (mut top, mut bottom) = (0isize, n as isize - 1);
    let (mut left, mut right) = (0isize, n as isize - 1);
    let mut num: u32 = 1;

    let mut visit = |grid: &mut [Vec<u32>], row: isize, col: isize, boundary: isize| {
        grid[row as usize][col as usize] = num * boundary as u32;
        num += 1;
        visits += 1;
    };

    while left <= right && top <= bottom {
        for col in left..=right {
            visit(&mut grid, top, col, top);
        }
        top += 1;

        for row in top..=bottom {
            visit(&mut grid, row, right, right);
        }
        right -= 1;

        if top <= bottom {
            for col in (left..=right).rev() {
                visit(&mut grid, bottom, col, bottom);
            }
            bottom -= 1;
        }

        if left <= right {
            for row in (top..=bottom).rev() {
                visit(&mut grid, row, left, left);
            }
            left += 1;
        }
    }

    Spiral { grid, visits }
}

pub fn render(size: Size) -> Shape {
    let rows = fill(size)
        .grid
        .into_iter()
        .map(|values| Row::new(values.into_iter().map(Cell::Number).collect()))
        .collect();
    Shape::new(PatternKind::SpiralMatrix, GRID, rows)
}
