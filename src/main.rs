use makegen::cli::commands::{CliArgs, Commands};
use makegen::cli::handlers::{handle_detect, handle_generate};
use makegen::util::logging::{init_logging, parse_level, LoggingConfig};
use makegen::{MakegenConfig, VERSION};

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_env().with_level_override(level_from_flags(&args)));

    debug!("makegen v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = MakegenConfig::default();
    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args),
        Commands::Generate(generate_args) => handle_generate(generate_args, args.quiet, config),
    };

    std::process::exit(exit_code);
}

fn level_from_flags(args: &CliArgs) -> Option<Level> {
    if let Some(level_str) = &args.log_level {
        Some(parse_level(level_str))
    } else if args.verbose {
        Some(Level::DEBUG)
    } else if args.quiet {
        Some(Level::ERROR)
    } else {
        None
    }
}
