use clap::ValueEnum;
use serde::Deserialize;

use crate::shape::Shape;
use crate::size::Size;
use crate::{diamond, spiral, triangle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Row i holds i*1 .. i*i
    MultiplicationTriangle,
    /// Consecutive odd numbers, continuing across rows
    OddTriangle,
    /// Right-aligned rows counting 1..i, longest row first
    ReverseTriangle,
    /// Multiplication triangle with only its outline filled in
    HollowMultiplicationTriangle,
    /// Centered pyramid of digits cycling through 1..9
    NumberPyramid,
    /// Centered pyramid of i*j mirrored around the middle column
    MultiplicationPyramid,
    /// Square table whose rows alternate between ascending and descending
    AlternatingTable,
    /// Diamond outline made of asterisks
    HollowDiamond,
    /// Diamond whose rows count up to i and back down to 1
    NumberDiamond,
    /// Square matrix filled by walking its boundaries inward
    SpiralMatrix,
}

impl PatternKind {
    pub fn label(self) -> &'static str {
        match self {
            PatternKind::MultiplicationTriangle => "Multiplication Triangle",
            PatternKind::OddTriangle => "Odd Number Triangle",
            PatternKind::ReverseTriangle => "Reverse Triangle",
            PatternKind::HollowMultiplicationTriangle => "Hollow Multiplication Triangle",
            PatternKind::NumberPyramid => "Number Pattern Pyramid",
            PatternKind::MultiplicationPyramid => "Multiplication Pyramid",
            PatternKind::AlternatingTable => "Alternating Table",
            PatternKind::HollowDiamond => "Hollow Diamond",
            PatternKind::NumberDiamond => "Number Diamond",
            PatternKind::SpiralMatrix => "Spiral Matrix",
        }
    }

    pub fn is_diamond(self) -> bool {
        matches!(self, PatternKind::HollowDiamond | PatternKind::NumberDiamond)
    }

    /// Number of rows the pattern prints for `size`.
    pub fn height(self, size: Size) -> usize {
        if self.is_diamond() {
            2 * size.get() - 1
        } else {
            size.get()
        }
    }

    pub fn render(self, size: Size) -> Shape {
        match self {
            PatternKind::MultiplicationTriangle => triangle::multiplication(size),
            PatternKind::OddTriangle => triangle::odd(size),
            PatternKind::ReverseTriangle => triangle::reverse(size),
            PatternKind::HollowMultiplicationTriangle => triangle::hollow_multiplication(size),
            PatternKind::NumberPyramid => triangle::number_pyramid(size),
            PatternKind::MultiplicationPyramid => triangle::multiplication_pyramid(size),
            PatternKind::AlternatingTable => triangle::alternating_table(size),
            PatternKind::HollowDiamond => diamond::hollow(size),
            PatternKind::NumberDiamond => diamond::numeric(size),
            PatternKind::SpiralMatrix => spiral::render(size),
        }
    }
}
