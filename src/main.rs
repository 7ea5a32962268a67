use std::env;
use std::process::ExitCode;

use char_count::{count_characters, Cli};

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout only ever carries the result line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = match Cli::try_parse_args(env::args_os()) {
        Ok(cli) => cli,
        Err(usage) => {
            println!("{usage}");
            return ExitCode::FAILURE;
        }
    };

    match count_characters(&cli.file_path) {
        Ok(count) => {
            println!("Number of characters: {count}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
