use clap::ValueEnum;
use serde::Deserialize;

use crate::kind::PatternKind;

/// One of the console programs, each offering its own set of patterns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramKind {
    /// Multiplication, odd-number and reverse triangles
    Multiplication,
    /// Hollow diamond, number pyramid and hollow multiplication triangle
    #[default]
    Shapes,
    /// Multiplication pyramid, alternating table and spiral matrix
    Table,
    /// Single number diamond, asked for once
    Diamond,
}

impl ProgramKind {
    pub fn program(self) -> &'static Program {
        match self {
            ProgramKind::Multiplication => &MULTIPLICATION,
            ProgramKind::Shapes => &SHAPES,
            ProgramKind::Table => &TABLE,
            ProgramKind::Diamond => &DIAMOND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Show the menu again after every pattern until the exit item is chosen
    Menu,
    /// Ask for a size once, render this pattern, and stop
    SingleShot(PatternKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub kind: PatternKind,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Pattern(PatternKind),
    Exit,
    Unknown,
}

/// Texts and pattern list of a program. Every string is printed verbatim.
#[derive(Debug)]
pub struct Program {
    pub title: &'static str,
    pub rule: &'static str,
    pub items: &'static [MenuItem],
    pub exit_label: &'static str,
    pub choice_prompt: &'static str,
    pub size_prompt: &'static str,
    pub header: Option<&'static str>,
    pub size_error: &'static str,
    pub mode: Mode,
}

impl Program {
    /// Selector that ends the menu loop, numbered right after the last item.
    pub fn exit_selector(&self) -> i64 {
        self.items.len() as i64 + 1
    }

    pub fn select(&self, selector: i64) -> Selection {
        if selector == self.exit_selector() {
            return Selection::Exit;
        }
        usize::try_from(selector)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.items.get(idx))
            .map_or(Selection::Unknown, |item| Selection::Pattern(item.kind))
    }

    pub fn patterns(&self) -> Vec<PatternKind> {
        match self.mode {
            Mode::Menu => self.items.iter().map(|item| item.kind).collect(),
            Mode::SingleShot(kind) => vec![kind],
        }
    }

    /// Menu block printed before each selector prompt.
    pub fn menu_text(&self) -> String {
        let mut text = format!("\n{}\n{}\n", self.title, self.rule);
        for (idx, item) in self.items.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", idx + 1, item.label));
        }
        text.push_str(&format!("{}. {}\n", self.exit_selector(), self.exit_label));
        text.push_str(self.choice_prompt);
        text
    }
}

static MULTIPLICATION: Program = Program {
    title: "UAS PRAKTIKUM ALGORITMA PEMROGRAMAN 1",
    rule: "====================================",
    items: &[
        MenuItem {
            kind: PatternKind::MultiplicationTriangle,
            label: "Pola Segitiga Perkalian",
        },
        MenuItem {
            kind: PatternKind::OddTriangle,
            label: "Pola Segitiga Bilangan Ganjil",
        },
        MenuItem {
            kind: PatternKind::ReverseTriangle,
            label: "Pola Segitiga Terbalik",
        },
    ],
    exit_label: "Keluar",
    choice_prompt: "Pilih pola (1-4): ",
    size_prompt: "Masukkan ukuran (3-9): ",
    header: Some("Hasil:"),
    size_error: "Error: Ukuran harus antara 3-9!",
    mode: Mode::Menu,
};

static SHAPES: Program = Program {
    title: "UAS PRAKTIKUM ALGORITMA",
    rule: "======================",
    items: &[
        MenuItem {
            kind: PatternKind::HollowDiamond,
            label: "Hollow Diamond",
        },
        MenuItem {
            kind: PatternKind::NumberPyramid,
            label: "Number Pattern Pyramid",
        },
        MenuItem {
            kind: PatternKind::HollowMultiplicationTriangle,
            label: "Hollow Multiplication Triangle",
        },
    ],
    exit_label: "Exit",
    choice_prompt: "Choose pattern (1-4): ",
    size_prompt: "Enter size (3-9): ",
    header: Some("Output:"),
    size_error: "Error: Size must be between 3-9!",
    mode: Mode::Menu,
};

static TABLE: Program = Program {
    title: "UAS PRAKTIKUM ALGORITMA PEMROGRAMAN 2",
    rule: "====================================",
    items: &[
        MenuItem {
            kind: PatternKind::MultiplicationPyramid,
            label: "Piramida Perkalian",
        },
        MenuItem {
            kind: PatternKind::AlternatingTable,
            label: "Tabel Bolak-balik",
        },
        MenuItem {
            kind: PatternKind::SpiralMatrix,
            label: "Matriks Spiral",
        },
    ],
    exit_label: "Keluar",
    choice_prompt: "Pilih pola (1-4): ",
    size_prompt: "Masukkan ukuran : ",
    header: Some("Hasil:"),
    size_error: "Ukuran harus antara 3-9",
    mode: Mode::Menu,
};

static DIAMOND: Program = Program {
    title: "",
    rule: "",
    items: &[],
    exit_label: "",
    choice_prompt: "",
    size_prompt: "Masukan Angka Baris (3-9): ",
    header: None,
    size_error: "Invalid size! Must be between 3-9.",
    mode: Mode::SingleShot(PatternKind::NumberDiamond),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_map_in_menu_order() {
        let program = ProgramKind::Shapes.program();
        assert_eq!(program.select(1), Selection::Pattern(PatternKind::HollowDiamond));
        assert_eq!(program.select(2), Selection::Pattern(PatternKind::NumberPyramid));
        assert_eq!(
            program.select(3),
            Selection::Pattern(PatternKind::HollowMultiplicationTriangle)
        );
        assert_eq!(program.select(4), Selection::Exit);
        for unknown in [0, 5, -1, 99] {
            assert_eq!(program.select(unknown), Selection::Unknown);
        }
    }

    #[test]
    fn test_menu_text_lists_items_then_exit() {
        let text = ProgramKind::Multiplication.program().menu_text();
        assert_eq!(
            text,
            "\nUAS PRAKTIKUM ALGORITMA PEMROGRAMAN 1\n\
             ====================================\n\
             1. Pola Segitiga Perkalian\n\
             2. Pola Segitiga Bilangan Ganjil\n\
             3. Pola Segitiga Terbalik\n\
             4. Keluar\n\
             Pilih pola (1-4): "
        );
    }

    #[test]
    fn test_every_pattern_is_offered_by_some_program() {
        let offered: Vec<PatternKind> = ProgramKind::value_variants()
            .iter()
            .flat_map(|kind| kind.program().patterns())
            .collect();
        for kind in PatternKind::value_variants() {
            assert!(offered.contains(kind), "{:?} is not offered", kind);
        }
    }

    #[test]
    fn test_single_shot_program_has_no_menu_items() {
        let program = ProgramKind::Diamond.program();
        assert_eq!(program.mode, Mode::SingleShot(PatternKind::NumberDiamond));
        assert_eq!(program.patterns(), vec![PatternKind::NumberDiamond]);
    }
}
