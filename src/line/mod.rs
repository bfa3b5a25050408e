use std::fmt;

use anyhow::Result;
use log::debug;

use crate::shell::Shell;
use crate::sources::SourceKind;

pub mod command;
use command::Command;
pub mod token;
use token::get_tokens;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LineIdentifier {
    source: SourceKind,
    line_num: usize,
}

impl LineIdentifier {
    pub fn source(&self) -> &SourceKind {
        &self.source
    }

    pub fn line_num(&self) -> usize {
        self.line_num
    }
}

// One line of input given to the shell, as read.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line {
    rawline: String,    // Does not include trailing newlines
    line_identifier: LineIdentifier,
}

impl Line {
    pub fn new(mut rawline: String, line_num: usize, source: SourceKind) -> Line {
        while rawline.ends_with('\n') || rawline.ends_with('\r') {
            rawline.pop();
        }

        Line {
            rawline,
            line_identifier: LineIdentifier { source, line_num },
        }
    }

    pub fn command(&self, smallsh: &Shell) -> Command {
        Command::new(get_tokens(&self.rawline, smallsh.state().pid()))
    }

    // Blank and comment lines are dropped here, before anything is
    // looked up or launched.
    pub fn execute(&self, smallsh: &mut Shell) -> Result<()> {
        let command = self.command(smallsh);

        if command.is_blank() || command.is_comment() {
            return Ok(());
        }

        debug!("{}: {:?}", self.line_identifier.line_num(), command);

        if let Some(f) = command.program().and_then(|x| smallsh.get_builtin(x)) {
            f(smallsh, command.argv())
        } else {
            smallsh.execute_external_command(&command)
        }
    }

    pub fn rawline(&self) -> &str {
        &self.rawline
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_num = self.line_identifier.line_num();

        match self.line_identifier.source() {
            SourceKind::Tty => {
                write!(f, "\tTTY line {}: {}", line_num, self.rawline())
            }
            SourceKind::Script(s) => {
                write!(f, "\tScript `{}` line {}: {}", s, line_num, self.rawline())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trailing_newlines_are_removed() {
        let line = Line::new("ls -l\r\n".to_string(), 3, SourceKind::Tty);

        assert_eq!("ls -l", line.rawline());
        assert_eq!(3, line.line_identifier.line_num());
    }

    #[test]
    fn newline_only_is_empty() {
        let line = Line::new("\n".to_string(), 1, SourceKind::Tty);

        assert_eq!("", line.rawline());
    }

    #[test]
    fn display_names_the_source() {
        let tty = Line::new("cd /nowhere".to_string(), 2, SourceKind::Tty);
        let script = Line::new("status".to_string(), 5, SourceKind::Script("init".to_string()));

        assert_eq!("\tTTY line 2: cd /nowhere", tty.to_string());
        assert_eq!("\tScript `init` line 5: status", script.to_string());
    }
}
