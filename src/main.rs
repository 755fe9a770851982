//! azkeyget entry point

use std::{io, process::ExitCode};

use clap::Parser;

use azkeyget::{
    RunError,
    cli::Cli,
    config::{ConfigFlags, ProcessEnvironment, Settings},
    fetch::{fetch_secret, write_secret},
    logging,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let code = if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _printed = error.print();

            return code;
        }
    };

    match run(cli.flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "errors are reported on stderr whether or not logging is enabled"
            )]
            {
                eprintln!("Error: {error}");
            }

            ExitCode::FAILURE
        }
    }
}

async fn run(flags: ConfigFlags) -> Result<(), RunError> {
    let settings = Settings::resolve(flags, &ProcessEnvironment);

    logging::init(settings.debug)?;

    let config = settings.into_effective()?;

    let value = fetch_secret(&config).await?;

    write_secret(&mut io::stdout().lock(), &value)
}
