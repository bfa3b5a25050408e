// Process-wide signal dispositions.
//
// The shell itself ignores SIGINT, so Ctrl-C never kills it.  SIGTSTP
// (Ctrl-Z) flips foreground-only mode, in which `&` is ignored.  Children
// are set up by `restore_child` between fork and exec.

use anyhow::Result;
use nix::libc;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::unistd;

use std::sync::atomic::{AtomicBool, Ordering};

static FOREGROUND_ONLY: AtomicBool = AtomicBool::new(false);

const ENTER_MESSAGE: &str = "\nEntering foreground-only mode (& is now ignored)\n";
const EXIT_MESSAGE: &str = "\nExiting foreground-only mode\n";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Disposition {
    Foreground,
    Background,
}

pub fn install() -> Result<()> {
    let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
    let toggle = SigAction::new(
        SigHandler::Handler(toggle_foreground_only),
        SaFlags::SA_RESTART,
        SigSet::all(),
    );

    unsafe {
        sigaction(Signal::SIGINT, &ignore)?;
        sigaction(Signal::SIGTSTP, &toggle)?;
    }

    Ok(())
}

pub fn foreground_only() -> bool {
    FOREGROUND_ONLY.load(Ordering::SeqCst)
}

// Runs in the child, before exec.  Only a foreground child may be
// interrupted; no child is stopped by Ctrl-Z, which belongs to the shell.
// SIGPIPE is ignored by the Rust runtime and must not leak into children.
pub fn restore_child(disposition: Disposition) -> Result<()> {
    let interrupt = match disposition {
        Disposition::Foreground => SigHandler::SigDfl,
        Disposition::Background => SigHandler::SigIgn,
    };

    let interrupt = SigAction::new(interrupt, SaFlags::empty(), SigSet::empty());
    let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
    let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());

    unsafe {
        sigaction(Signal::SIGINT, &interrupt)?;
        sigaction(Signal::SIGTSTP, &ignore)?;
        sigaction(Signal::SIGPIPE, &default)?;
    }

    Ok(())
}

// Signal context: atomics and write(2) only.
extern "C" fn toggle_foreground_only(_: libc::c_int) {
    let message = if FOREGROUND_ONLY.fetch_xor(true, Ordering::SeqCst) {
        EXIT_MESSAGE
    } else {
        ENTER_MESSAGE
    };

    let _ = unistd::write(libc::STDOUT_FILENO, message.as_bytes());
}
