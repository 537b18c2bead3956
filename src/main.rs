mod cli;
mod data;
mod error;
mod processor;
mod runner;
mod templating;

use cli::Invocation;
use error::UsageError;
use runner::Runner;

fn main() {
    let invocation = match Invocation::from_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(UsageError::Flags(e)) => e.exit(),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let runner = Runner::new(invocation);
    if let Err(e) = runner.run(&mut std::io::stderr()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
