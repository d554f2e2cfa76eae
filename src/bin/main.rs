use std::io;
use std::process;
use twentynine::{LoadConfig, cli};

fn main() {
    env_logger::init();

    let config = LoadConfig::from_features();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = cli::run(&config, &mut stdout.lock(), &mut stderr.lock());
    process::exit(code);
}
