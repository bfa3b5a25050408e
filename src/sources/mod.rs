use anyhow::Result;

use super::line::Line;

pub mod basic_tty;
pub mod script;

// Used in Line struct to identify source
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SourceKind {
    Tty,
    Script(String), // String contains script pathname
}

pub trait Source {
    // `Ok(None)` once the source is exhausted
    fn get_line(&mut self) -> Result<Option<Line>>;
    fn is_tty(&self) -> bool;
    fn print_error(&mut self) -> Result<()>;
}
