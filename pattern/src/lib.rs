//! Console pattern rendering: size validation, the pattern generators, and the
//! menu programs that drive them.

pub mod diamond;
pub mod error;
pub mod kind;
pub mod program;
pub mod session;
pub mod shape;
pub mod size;
pub mod spiral;
pub mod triangle;

pub use error::{PatternError, Result, ResultExt};
pub use kind::PatternKind;
pub use program::{Mode, Program, ProgramKind, Selection};
pub use session::{InputPolicy, Outcome, Session, SessionSummary};
pub use shape::{Cell, CellStyle, Row, Shape};
pub use size::Size;

/// Validate `size` and render `kind` at that size.
pub fn render(kind: PatternKind, size: i64) -> Result<Shape> {
    let size = Size::new(size)?;
    Ok(kind.render(size))
}
