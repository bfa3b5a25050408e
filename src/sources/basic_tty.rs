// Reads commands from STDIN, one line at a time, behind a `: ` prompt.
// No line editing: STDIN may just as well be a pipe or a file.

use anyhow::Result;

use std::io::{self, Stdin, Write};

use super::{Source, SourceKind};
use crate::line::Line;

const PROMPT: &str = ": ";

pub struct BasicTty {
    stdin: Stdin,
    line_num: usize,
    last_line: Option<Line>,
}

impl BasicTty {
    pub fn build_source() -> Box<dyn Source> {
        let stdin = io::stdin();

        Box::new(BasicTty { stdin, line_num: 0, last_line: None })
    }
}

impl Source for BasicTty {
    fn get_line(&mut self) -> Result<Option<Line>> {
        let mut buffer = String::new();

        print!("{}", PROMPT);
        io::stdout().flush()?;

        let num_bytes_read = self.stdin.read_line(&mut buffer)?;

        if num_bytes_read == 0 {
            Ok(None) // EOF was found
        } else {
            self.line_num += 1;

            let line = Line::new(buffer, self.line_num, SourceKind::Tty);

            self.last_line = Some(line.clone());

            Ok(Some(line))
        }
    }

    fn is_tty(&self) -> bool {
        true
    }

    fn print_error(&mut self) -> Result<()> {
        if let Some(line) = &self.last_line {
            eprintln!("{}", line);
        }

        Ok(())
    }
}
