mod commands;
mod terminal;

use std::process::ExitCode;

use animalia_common::Error;
use commands::{CommandLine, generate, list};
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.log_level());
    print::banner(commands.no_banner, commands.quiet);

    let cfg = commands.to_config();

    let result = if commands.list_skin_types {
        print::header("available skin types", commands.quiet);
        list::list(&commands, &cfg)
    } else {
        print::header("generating page", commands.quiet);
        generate::generate(&commands, &cfg)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>()
        .map(Error::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
