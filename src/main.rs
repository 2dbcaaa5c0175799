// src/main.rs

use std::process;

use log::debug;
use env_logger::Env;

use calcs::cli::{self, Command, Invocation, USAGE};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match Invocation::parse(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            process::exit(1);
        }
    };

    if invocation.command == Command::Help {
        println!("{}", USAGE);
        return;
    }

    let config = match invocation.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("CALCS_LOG", config.log_level.as_str())
        .write_style_or("CALCS_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();
    debug!("Loaded configuration: {:?}", config);

    match cli::execute(&invocation.command, &config).and_then(|reports| cli::render(&reports, invocation.json)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
