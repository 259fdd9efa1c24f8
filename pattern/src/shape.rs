use std::fmt;

use crate::kind::PatternKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Number(u32),
    Mark,
    Blank,
}

/// Field width and trailing separator shared by every cell of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub width: usize,
    pub separator: &'static str,
}

impl CellStyle {
    pub const fn new(width: usize, separator: &'static str) -> Self {
        Self { width, separator }
    }

    /// Columns taken by one cell, and by one unit of indentation.
    pub fn unit(&self) -> usize {
        self.width + self.separator.len()
    }

    fn write_cell(&self, out: &mut String, cell: Cell) {
        let width = self.width;
        match cell {
            Cell::Number(n) => out.push_str(&format!("{n:>width$}")),
            Cell::Mark => out.push_str(&format!("{:>width$}", "*")),
            Cell::Blank => out.push_str(&" ".repeat(width)),
        }
        out.push_str(self.separator);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub indent: usize,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { indent: 0, cells }
    }

    pub fn indented(indent: usize, cells: Vec<Cell>) -> Self {
        Self { indent, cells }
    }

    pub fn numbers(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter_map(|cell| match cell {
                Cell::Number(n) => Some(*n),
                _ => None,
            })
            .collect()
    }
}

/// Output of a single rendering call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub kind: PatternKind,
    pub style: CellStyle,
    pub rows: Vec<Row>,
}

impl Shape {
    pub fn new(kind: PatternKind, style: CellStyle, rows: Vec<Row>) -> Self {
        Self { kind, style, rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Text lines, one per row, trailing padding included.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| self.render_row(row)).collect()
    }

    fn render_row(&self, row: &Row) -> String {
        let mut line = " ".repeat(row.indent * self.style.unit());
        for &cell in &row.cells {
            self.style.write_cell(&mut line, cell);
        }
        line
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
