use super::Shell;
use anyhow::Result;

mod core;

pub type Builtin = fn(&mut Shell, Vec<&str>) -> Result<()>;

pub enum Module {
    Core,
}

pub fn load_module(smallsh: &mut Shell, module: Module) {
    match module {
        Module::Core => {
            smallsh.builtins.insert("cd", core::chdir);
            smallsh.builtins.insert("status", core::status);
            smallsh.builtins.insert("exit", core::exit);
        }
    }
}
