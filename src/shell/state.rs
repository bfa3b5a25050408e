use nix::unistd::Pid;

use super::status::ExitStatus;

pub struct State {
    // Captured once at startup; used for `$$` only.
    pid: Pid,

    // Set by every foreground command.  Background completions are
    // reported but never recorded here.
    last_status: ExitStatus,
}

impl State {
    pub fn new(pid: Pid) -> Self {
        State {
            pid,
            last_status: ExitStatus::default(),
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn last_status(&self) -> ExitStatus {
        self.last_status
    }

    pub fn set_last_status(&mut self, status: ExitStatus) {
        self.last_status = status;
    }
}
