mod line;
mod shell;
mod sources;

use shell::Shell;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut smallsh = match Shell::new() {
        Ok(smallsh) => smallsh,
        Err(e) => {
            eprintln!("smallsh: {}", e);
            std::process::exit(1);
        }
    };

    while let Err(e) = smallsh.run() {
        eprintln!("smallsh: {}", e);

        smallsh.backtrace();
    }
}
