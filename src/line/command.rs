use anyhow::{anyhow, Result};

use std::ffi::CString;

use super::token::Token;

// A single command, ready to be handed to a builtin or to the launcher.
// Built fresh for every line and dropped when the line is done.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Command {
    args: Vec<String>,
    input: Option<String>,
    output: Option<String>,
    background: bool,
}

impl Command {
    // Later redirections of the same stream replace earlier ones.
    pub fn new(tokens: Vec<Token>) -> Command {
        let mut command = Command::default();

        for token in tokens {
            match token {
                Token::Argument(arg) => command.args.push(arg),
                Token::Background => command.background = true,
                Token::InputRedirect(path) => command.input = Some(path),
                Token::OutputRedirect(path) => command.output = Some(path),
            }
        }

        command
    }

    pub fn argv(&self) -> Vec<&str> {
        self.args.iter().map(|x| x.as_str()).collect()
    }

    // Argument vector in the form `execvp` wants it
    pub fn c_argv(&self) -> Result<Vec<CString>> {
        self.args
            .iter()
            .map(|x| CString::new(x.as_str()).map_err(|_| anyhow!("{}: Argument contains a NUL byte", x)))
            .collect()
    }

    pub fn program(&self) -> Option<&str> {
        self.args.first().map(|x| x.as_str())
    }

    // Blank lines and lines of only spaces
    pub fn is_blank(&self) -> bool {
        self.program().map_or(true, |x| x.is_empty())
    }

    pub fn is_comment(&self) -> bool {
        self.program().map_or(false, |x| x.starts_with('#'))
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn background(&self) -> bool {
        self.background
    }
}
