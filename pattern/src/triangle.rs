//! Triangles, pyramids and the alternating table.
//!
//! Rows and columns are 1-based here, matching how the patterns are described.

use crate::kind::PatternKind;
use crate::shape::{Cell, CellStyle, Row, Shape};
use crate::size::Size;

const WIDE: CellStyle = CellStyle::new(4, "");
const NARROW: CellStyle = CellStyle::new(3, "");
const PAIRED: CellStyle = CellStyle::new(2, " ");
const TABLE: CellStyle = CellStyle::new(3, " ");

pub fn multiplication(size: Size) -> Shape {
    let rows = (1..=size.as_u32())
        .map(|i| Row::new((1..=i).map(|j| Cell::Number(i * j)).collect()))
        .collect();
    Shape::new(PatternKind::MultiplicationTriangle, WIDE, rows)
}

pub fn odd(size: Size) -> Shape {
    let mut num = 1;
    let mut rows = Vec::with_capacity(size.get());
    for i in 1..=size.get() {
        let mut cells = Vec::with_capacity(i);
        for _ in 0..i {
            cells.push(Cell::Number(num));
            num += 2;
        }
        rows.push(Row::new(cells));
    }
    Shape::new(PatternKind::OddTriangle, WIDE, rows)
}

pub fn reverse(size: Size) -> Shape {
    let n = size.as_u32();
    let rows = (1..=n)
        .rev()
        .map(|i| Row::indented((n - i) as usize, (1..=i).map(Cell::Number).collect()))
        .collect();
    Shape::new(PatternKind::ReverseTriangle, WIDE, rows)
}

pub fn hollow_multiplication(size: Size) -> Shape {
    let n = size.as_u32();
    let rows = (1..=n)
        .map(|i| {
            let cells = (1..=i)
                .map(|j| {
                    if j == 1 || j == i || i == n {
                        Cell::Number(i * j)
                    } else {
                        Cell::Blank
                    }
                })
                .collect();
            Row::new(cells)
        })
        .collect();
    Shape::new(PatternKind::HollowMultiplicationTriangle, WIDE, rows)
}

pub fn number_pyramid(size: Size) -> Shape {
    let n = size.get();
    let mut num = 1;
    let mut rows = Vec::with_capacity(n);
    for i in 1..=n {
        let mut cells = Vec::with_capacity(2 * i - 1);
        for _ in 0..(2 * i - 1) {
            cells.push(Cell::Number(num));
            num = (num % 9) + 1;
        }
        rows.push(Row::indented(n - i, cells));
    }
    Shape::new(PatternKind::NumberPyramid, NARROW, rows)
}

pub fn multiplication_pyramid(size: Size) -> Shape {
    let n = size.as_u32();
    let rows = (1..=n)
        .map(|i| {
            let cells = (1..=i)
                .chain((1..i).rev())
                .map(|j| Cell::Number(i * j))
                .collect();
            Row::indented((n - i) as usize, cells)
        })
        .collect();
    Shape::new(PatternKind::MultiplicationPyramid, PAIRED, rows)
}

pub fn alternating_table(size: Size) -> Shape {
    let n = size.as_u32();
    let rows = (1..=n)
        .map(|i| {
            let cells = (1..=n)
                .map(|j| {
                    // even rows run right to left
                    let factor = if i % 2 == 0 { n - j + 1 } else { j };
                    Cell::Number(i * factor)
                })
                .collect();
            Row::new(cells)
        })
        .collect();
    Shape::new(PatternKind::AlternatingTable, TABLE, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: i64) -> Size {
        Size::new(n).unwrap()
    }

    #[test]
    fn test_multiplication_cell_is_row_times_column() {
        for n in 3..=9 {
            let shape = multiplication(size(n));
            for (i, row) in shape.rows.iter().enumerate() {
                let i = i as u32 + 1;
                assert_eq!(row.cells.len(), i as usize);
                for (j, cell) in row.cells.iter().enumerate() {
                    assert_eq!(*cell, Cell::Number(i * (j as u32 + 1)));
                }
            }
        }
    }

    #[test]
    fn test_multiplication_text_for_three() {
        assert_eq!(
            multiplication(size(3)).to_string(),
            "   1\n   2   4\n   3   6   9\n"
        );
    }

    #[test]
    fn test_odd_sequence_continues_across_rows() {
        let shape = odd(size(5));
        let values: Vec<u32> = shape.rows.iter().flat_map(|row| row.numbers()).collect();

        for (i, row) in shape.rows.iter().enumerate() {
            assert_eq!(row.cells.len(), i + 1);
        }
        assert_eq!(values.len(), 15);
        assert_eq!(values[0], 1);
        for pair in values.windows(2) {
            assert_eq!(pair[1], pair[0] + 2);
        }
        assert!(values.iter().all(|v| v % 2 == 1));
    }

    #[test]
    fn test_reverse_triangle_starts_with_longest_row() {
        let lines = reverse(size(3)).lines();
        assert_eq!(lines, vec!["   1   2   3", "       1   2", "           1"]);
    }

    #[test]
    fn test_hollow_multiplication_keeps_outline_only() {
        let shape = hollow_multiplication(size(5));
        assert_eq!(shape.rows[3].cells[0], Cell::Number(4));
        assert_eq!(shape.rows[3].cells[1], Cell::Blank);
        assert_eq!(shape.rows[3].cells[2], Cell::Blank);
        assert_eq!(shape.rows[3].cells[3], Cell::Number(16));
        assert_eq!(shape.rows[4].numbers(), vec![5, 10, 15, 20, 25]);
    }

    #[test]
    fn test_number_pyramid_wraps_after_nine() {
        let shape = number_pyramid(size(4));
        let rows: Vec<Vec<u32>> = shape.rows.iter().map(|row| row.numbers()).collect();
        assert_eq!(
            rows,
            vec![
                vec![1],
                vec![2, 3, 4],
                vec![5, 6, 7, 8, 9],
                vec![1, 2, 3, 4, 5, 6, 7],
            ]
        );
        assert_eq!(shape.rows[0].indent, 3);
        assert_eq!(shape.rows[3].indent, 0);
    }

    #[test]
    fn test_multiplication_pyramid_is_mirrored() {
        let shape = multiplication_pyramid(size(4));
        assert_eq!(shape.rows[2].numbers(), vec![3, 6, 9, 6, 3]);
        assert_eq!(shape.lines()[0], "          1 ");
    }

    #[test]
    fn test_alternating_table_flips_even_rows() {
        let shape = alternating_table(size(3));
        let rows: Vec<Vec<u32>> = shape.rows.iter().map(|row| row.numbers()).collect();
        assert_eq!(rows, vec![vec![1, 2, 3], vec![6, 4, 2], vec![3, 6, 9]]);
        assert_eq!(shape.lines()[1], "  6   4   2 ");
    }
}
