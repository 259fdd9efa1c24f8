use crate::kind::PatternKind;
use crate::shape::{Cell, CellStyle, Row, Shape};
use crate::size::Size;

const STAR: CellStyle = CellStyle::new(1, " ");
const NUMERIC: CellStyle = CellStyle::new(3, "");

/// Row widths 1..n then back down to 1, yielding `2n - 1` rows.
fn widths(size: Size) -> impl Iterator<Item = usize> {
    let n = size.get();
    (1..=n).chain((1..n).rev())
}

pub fn hollow(size: Size) -> Shape {
    let n = size.get();
    let rows = widths(size)
        .map(|i| {
            let last = 2 * i - 1;
            let cells = (1..=last)
                .map(|j| if j == 1 || j == last { Cell::Mark } else { Cell::Blank })
                .collect();
            Row::indented(n - i, cells)
        })
        .collect();
    Shape::new(PatternKind::HollowDiamond, STAR, rows)
}

pub fn numeric(size: Size) -> Shape {
    let n = size.get();
    let rows = widths(size)
        .map(|i| {
            let peak = i as u32;
            let cells = (1..=peak)
                .chain((1..peak).rev())
                .map(Cell::Number)
                .collect();
            Row::indented(n - i, cells)
        })
        .collect();
    Shape::new(PatternKind::NumberDiamond, NUMERIC, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: i64) -> Size {
        Size::new(n).unwrap()
    }

    #[test]
    fn test_hollow_marks_edges_and_blanks_interior() {
        for n in 3..=9 {
            let shape = hollow(size(n));
            assert_eq!(shape.height(), 2 * n as usize - 1);
            for row in &shape.rows {
                let last = row.cells.len() - 1;
                assert_eq!(row.cells[0], Cell::Mark);
                assert_eq!(row.cells[last], Cell::Mark);
                assert!(row.cells[1..last.max(1)].iter().all(|c| *c == Cell::Blank));
            }
        }
    }

    #[test]
    fn test_hollow_is_symmetric_about_midline() {
        let lines = hollow(size(6)).lines();
        let height = lines.len();
        for k in 0..height / 2 {
            assert_eq!(lines[k], lines[height - 1 - k]);
        }
        assert_eq!(lines[5], format!("* {}* ", "  ".repeat(9)));
    }

    #[test]
    fn test_hollow_text_for_three() {
        assert_eq!(
            hollow(size(3)).to_string(),
            "    * \n  *   * \n*       * \n  *   * \n    * \n"
        );
    }

    #[test]
    fn test_numeric_rows_count_up_and_back_down() {
        let shape = numeric(size(4));
        let rows: Vec<Vec<u32>> = shape.rows.iter().map(|row| row.numbers()).collect();
        assert_eq!(
            rows,
            vec![
                vec![1],
                vec![1, 2, 1],
                vec![1, 2, 3, 2, 1],
                vec![1, 2, 3, 4, 3, 2, 1],
                vec![1, 2, 3, 2, 1],
                vec![1, 2, 1],
                vec![1],
            ]
        );
    }

    #[test]
    fn test_numeric_counter_restarts_every_row() {
        let shape = numeric(size(9));
        assert!(shape.rows.iter().all(|row| row.numbers()[0] == 1));
        assert_eq!(shape.lines()[0], format!("{}  1", " ".repeat(24)));
    }
}
