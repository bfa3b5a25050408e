use crate::shell::Shell;

use anyhow::{anyhow, Result};
use log::debug;
use std::env;
use std::io::{self, Write};

// Arguments past the first are ignored.
pub fn chdir(_smallsh: &mut Shell, argv: Vec<&str>) -> Result<()> {
    if argv.len() == 1 {
        if let Some(dir) = env::var_os("HOME") {
            env::set_current_dir(&dir)
                .map_err(|e| anyhow!("cd: {}: {}", dir.to_string_lossy(), e))?;
        } else {
            return Err(anyhow!("cd: HOME not set"));
        }
    } else {
        env::set_current_dir(argv[1]).map_err(|e| anyhow!("cd: {}: {}", argv[1], e))?;
    }

    Ok(())
}

pub fn status(smallsh: &mut Shell, _argv: Vec<&str>) -> Result<()> {
    println!("{}", smallsh.state().last_status());
    io::stdout().flush()?;

    Ok(())
}

// Background children are left running.
pub fn exit(smallsh: &mut Shell, _argv: Vec<&str>) -> Result<()> {
    for pid in smallsh.reaper().outstanding() {
        debug!("exit: leaving background child {} running", pid);
    }

    io::stdout().flush()?;
    std::process::exit(0);
}
