use crate::line::command::Command;
use crate::line::Line;
use crate::sources::Source;
use anyhow::Result;

use std::collections::HashMap;
use std::io::{self, Write};

mod modules;
use modules::*;
mod init;
use init::init;
mod launch;
use launch::{launch, Launch};
mod reaper;
use reaper::Reaper;
mod signals;
mod state;
use state::State;
mod status;

pub struct Shell {
    sources: Vec<Box<dyn Source>>,
    builtins: HashMap<&'static str, Builtin>,
    state: State,
    reaper: Reaper,
}

impl Shell {
    pub fn new() -> Result<Shell> {
        init()
    }

    pub fn run(&mut self) -> Result<()> {
        while let Some(line) = self.get_line()? {
            line.execute(self)?;
        }

        Ok(())
    }

    // Background children are reported here, once per command cycle,
    // before the next line is read.
    fn get_line(&mut self) -> Result<Option<Line>> {
        self.report_background()?;

        if let Some(mut source) = self.sources.pop() {
            match source.get_line() {
                Ok(Some(line)) => {
                    self.sources.push(source);
                    Ok(Some(line))
                }
                Ok(None) => self.get_line(),
                Err(e) => {
                    self.sources.push(source);
                    Err(e)
                }
            }
        } else {
            Ok(None)
        }
    }

    fn report_background(&mut self) -> Result<()> {
        let done = self.reaper.reap()?;

        if !done.is_empty() {
            let mut stdout = io::stdout();
            for (pid, status) in done {
                writeln!(stdout, "child {} terminated", pid)?;
                writeln!(stdout, "{}", status)?;
            }
            stdout.flush()?;
        }

        Ok(())
    }

    pub fn execute_external_command(&mut self, command: &Command) -> Result<()> {
        match launch(command)? {
            Launch::Foreground(status) => {
                self.state.set_last_status(status);
            }
            Launch::Background(pid) => {
                self.reaper.track(pid);
                println!("background pid is {}", pid);
                io::stdout().flush()?;
            }
        }

        Ok(())
    }

    pub fn get_builtin(&self, command: &str) -> Option<Builtin> {
        self.builtins.get(command).copied()
    }

    pub fn push_source(&mut self, source: Box<dyn Source>) {
        self.sources.push(source)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn reaper(&self) -> &Reaper {
        &self.reaper
    }

    // Prints the offending line of a non-interactive source.  The source
    // stays on the stack and carries on with its next line.
    pub fn backtrace(&mut self) {
        if let Some(source) = self.sources.last_mut() {
            if !source.is_tty() {
                let _ = source.print_error();
            }
        }
    }
}
