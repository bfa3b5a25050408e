use anyhow::Result;
use log::{debug, warn};
use nix::unistd::getpid;
use xdg::BaseDirectories;

use crate::sources::{basic_tty::BasicTty, script::Script};
use super::modules::Module;
use super::reaper::Reaper;
use super::signals;
use super::state::State;
use super::{Shell, Builtin, load_module};

use std::collections::HashMap;
use std::path::PathBuf;

pub fn init() -> Result<Shell> {
    signals::install()?;

    let sources = vec![BasicTty::build_source()];
    let builtins = HashMap::<&'static str, Builtin>::new();
    let state = State::new(getpid());
    let reaper = Reaper::new();

    let mut smallsh = Shell {
        sources,
        builtins,
        state,
        reaper,
    };

    load_module(&mut smallsh, Module::Core);

    if let Err(e) = push_init_script(&mut smallsh) {
        warn!("init script: {}", e);
    }

    Ok(smallsh)
}

// Lines of `$XDG_CONFIG_HOME/smallsh/init` run before the first prompt.
pub fn push_init_script(smallsh: &mut Shell) -> Result<()> {
    let base_dirs = BaseDirectories::new()?;

    let temp = PathBuf::from("smallsh/init");

    if let Some(path) = base_dirs.find_config_file(temp) {
        debug!("init script: {}", path.display());
        smallsh.push_source(Script::build_source(path)?);
    }

    Ok(())
}
