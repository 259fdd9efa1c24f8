//! Read-validate-dispatch loop driving a [`Program`] over any reader and writer.
//!
//! Input is consumed as whitespace-separated tokens, so a selector and a size
//! may share one line. End of input always ends the session. A token that is
//! not an integer is handled according to the [`InputPolicy`].

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{Result, ResultExt};
use crate::kind::PatternKind;
use crate::program::{Mode, Program, Selection};
use crate::size::{Size, parse_integer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputPolicy {
    /// Stop the session at the first non-numeric answer
    #[default]
    Exit,
    /// Report the bad answer and ask the same question again
    Reprompt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The exit item was chosen, or a single-shot program finished
    Exited,
    EndOfInput,
    MalformedInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: Outcome,
    pub rendered: Vec<(PatternKind, Size)>,
    pub rejected: Vec<i64>,
}

enum Answer {
    Number(i64),
    Stop(Outcome),
}

struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            // raw bytes, so invalid UTF-8 becomes a malformed token instead of an I/O error
            let mut line = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .with_context(|| "Failed to read input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

pub struct Session<'p, R, W> {
    program: &'p Program,
    policy: InputPolicy,
    tokens: Tokens<R>,
    out: W,
    rendered: Vec<(PatternKind, Size)>,
    rejected: Vec<i64>,
}

impl<'p, R: BufRead, W: Write> Session<'p, R, W> {
    pub fn new(program: &'p Program, input: R, out: W) -> Self {
        Self {
            program,
            policy: InputPolicy::default(),
            tokens: Tokens::new(input),
            out,
            rendered: Vec::new(),
            rejected: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn run(mut self) -> Result<SessionSummary> {
        let outcome = match self.program.mode {
            Mode::Menu => self.run_menu()?,
            Mode::SingleShot(kind) => self.ask_and_render(kind)?.unwrap_or(Outcome::Exited),
        };
        self.out.flush()?;

        Ok(SessionSummary {
            outcome,
            rendered: self.rendered,
            rejected: self.rejected,
        })
    }

    fn run_menu(&mut self) -> Result<Outcome> {
        let menu = self.program.menu_text();
        loop {
            let selector = match self.ask(&menu)? {
                Answer::Number(value) => value,
                Answer::Stop(outcome) => return Ok(outcome),
            };

            match self.program.select(selector) {
                Selection::Exit => return Ok(Outcome::Exited),
                Selection::Unknown => continue,
                Selection::Pattern(kind) => {
                    if let Some(outcome) = self.ask_and_render(kind)? {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    /// Returns `Some` only when the session has to stop.
    fn ask_and_render(&mut self, kind: PatternKind) -> Result<Option<Outcome>> {
        let value = match self.ask(self.program.size_prompt)? {
            Answer::Number(value) => value,
            Answer::Stop(outcome) => return Ok(Some(outcome)),
        };

        match Size::new(value) {
            Ok(size) => self.render(kind, size)?,
            Err(err) if err.is_out_of_range() => {
                writeln!(self.out, "{}", self.program.size_error)?;
                self.rejected.push(value);
            }
            Err(err) => return Err(err),
        }
        Ok(None)
    }

    fn render(&mut self, kind: PatternKind, size: Size) -> Result<()> {
        if let Some(header) = self.program.header {
            write!(self.out, "\n{}\n", header)?;
        }
        write!(self.out, "{}", kind.render(size))?;
        self.rendered.push((kind, size));
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Answer> {
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;

            let Some(token) = self.tokens.next()? else {
                return Ok(Answer::Stop(Outcome::EndOfInput));
            };
            if let Some(value) = parse_integer(&token) {
                return Ok(Answer::Number(value));
            }

            match self.policy {
                InputPolicy::Exit => return Ok(Answer::Stop(Outcome::MalformedInput)),
                InputPolicy::Reprompt => {
                    self.tokens.discard_line();
                    writeln!(self.out, "\nInvalid input '{}', please enter a number.", token)?;
                }
            }
        }
    }
}
