use anyhow::Result;
use log::debug;
use nix::errno::Errno;
use nix::libc;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use std::collections::BTreeSet;

use super::status::ExitStatus;

// Background children that have been launched and not yet collected.
// Only ever polled between commands, so it never competes with the
// launcher's wait on a foreground child.
#[derive(Default, Debug)]
pub struct Reaper {
    jobs: BTreeSet<libc::pid_t>,
}

impl Reaper {
    pub fn new() -> Self {
        Reaper::default()
    }

    pub fn track(&mut self, pid: Pid) {
        self.jobs.insert(pid.as_raw());
    }

    pub fn outstanding(&self) -> impl Iterator<Item = Pid> + '_ {
        self.jobs.iter().map(|x| Pid::from_raw(*x))
    }

    // Collects every child that has already terminated, without blocking.
    pub fn reap(&mut self) -> Result<Vec<(Pid, ExitStatus)>> {
        let mut done = Vec::<(Pid, ExitStatus)>::new();

        loop {
            match waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)) {
                Ok(WaitStatus::StillAlive) | Err(Errno::ECHILD) => break,
                Ok(status) => {
                    if let Some((pid, status)) = ExitStatus::from_wait_status(status) {
                        debug!("reaped {}: {}", pid, status);
                        self.jobs.remove(&pid.as_raw());
                        done.push((pid, status));
                    }
                }
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(done)
    }
}
