mod cli;
mod error;
mod generator;
mod random;
mod sample;
mod scalar;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use cli::Cli;
use error::GenResult;
use generator::SampleGenerator;
use log::{error, info};
use random::Random;

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            e.report(&mut io::stderr()).ok();
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> GenResult<()> {
    let cli = Cli::try_from_args(std::env::args_os())?;
    info!("generating {} samples", cli.count);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut generator = SampleGenerator::new(Random::new());
    generator.run(cli.count, &mut out)?;
    Ok(())
}
