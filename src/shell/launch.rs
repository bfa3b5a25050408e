use anyhow::{anyhow, Result};
use log::debug;
use nix::errno::Errno;
use nix::fcntl::{open, OFlag};
use nix::libc;
use nix::sys::stat::Mode;
use nix::sys::wait::waitpid;
use nix::unistd::{close, dup2, execvp, fork, ForkResult, Pid};

use std::ffi::CString;
use std::io::{self, Write};
use std::os::unix::io::RawFd;
use std::process;

use super::signals::{self, Disposition};
use super::status::ExitStatus;
use crate::line::command::Command;

// Exit codes of a child that never reached its program
const REDIRECT_FAILURE: i32 = 1;
const EXEC_FAILURE: i32 = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Launch {
    Foreground(ExitStatus),
    Background(Pid),
}

// Forks exactly one child for `command`.  A foreground launch returns once
// that child has terminated; a background launch returns immediately.
pub fn launch(command: &Command) -> Result<Launch> {
    // Read once; the child and the parent must agree.
    let disposition = if command.background() && !signals::foreground_only() {
        Disposition::Background
    } else {
        if command.background() {
            debug!("foreground-only mode: running {:?} in the foreground", command.program());
        }
        Disposition::Foreground
    };

    let argv = command.c_argv()?;
    if argv.is_empty() {
        return Err(anyhow!("launch: Empty argument vector."));
    }

    // Anything still buffered would otherwise be written twice.
    io::stdout().flush()?;

    match unsafe { fork() } {
        Ok(ForkResult::Parent { child, .. }) => {
            debug!("launched {} ({:?})", child, disposition);

            match disposition {
                Disposition::Background => Ok(Launch::Background(child)),
                Disposition::Foreground => Ok(Launch::Foreground(wait_for(child)?)),
            }
        }
        Ok(ForkResult::Child) => exec_child(command, &argv, disposition),
        Err(e) => {
            eprintln!("smallsh: fork: {}", e);
            process::exit(1);
        }
    }
}

fn wait_for(child: Pid) -> Result<ExitStatus> {
    loop {
        match waitpid(child, None) {
            Ok(status) => {
                if let Some((_, status)) = ExitStatus::from_wait_status(status) {
                    return Ok(status);
                }
            }
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

fn exec_child(command: &Command, argv: &[CString], disposition: Disposition) -> ! {
    if let Err(e) = signals::restore_child(disposition) {
        eprintln!("smallsh: {}", e);
    }

    if let Some(path) = command.input() {
        if let Err(e) = redirect(path, OFlag::O_RDONLY, libc::STDIN_FILENO) {
            eprintln!("smallsh: {}: {}", path, e);
            process::exit(REDIRECT_FAILURE);
        }
    }

    if let Some(path) = command.output() {
        let flags = OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC;

        if let Err(e) = redirect(path, flags, libc::STDOUT_FILENO) {
            eprintln!("smallsh: {}: {}", path, e);
            process::exit(REDIRECT_FAILURE);
        }
    }

    // execvp only ever returns on failure
    let Err(e) = execvp(&argv[0], argv);
    eprintln!("smallsh: {}: {}", command.program().unwrap_or_default(), e);

    process::exit(EXEC_FAILURE);
}

fn redirect(path: &str, flags: OFlag, target: RawFd) -> nix::Result<()> {
    let mode = Mode::from_bits_truncate(0o666);

    let fd = open(path, flags, mode)?;
    dup2(fd, target)?;
    close(fd)?;

    Ok(())
}
