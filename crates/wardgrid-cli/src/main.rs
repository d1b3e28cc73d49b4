use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use wardgrid_cli::config::from_arguments;
use wardgrid_cli::demo::run_demo;
use wardgrid_cli::guard_suite::run_guard_suite;

fn config_arg() -> Arg {
    Arg::new("config")
        .help("Path to a JSON driver configuration file")
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("WARDGRID_LOG", "error,wardgrid=info"))
        .init();

    let matches = Command::new("wardgrid")
        .version(clap::crate_version!())
        .about("Dense 2D grid walkthrough and guarded-grid classifier")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Exercise construction, swaps, resize and copies of a grid")
                .arg(config_arg())
                .arg(
                    Arg::new("large_rows")
                        .long("large-rows")
                        .help("Rows of the scoped grid that is copied and dropped")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("large_cols")
                        .long("large-cols")
                        .help("Columns of the scoped grid that is copied and dropped")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("guard")
                .about("Classify the reference boolean grids as guarded or not")
                .arg(config_arg())
                .arg(
                    Arg::new("dim")
                        .short('d')
                        .long("dim")
                        .help("Side of the square grids. Overrides guard_dim from the config.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed for the random grid. Overrides seed from the config.")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_m)) => handle_demo(sub_m),
        Some(("guard", sub_m)) => handle_guard(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_demo(matches: &ArgMatches) -> Result<()> {
    let config = from_arguments(matches)?;
    let stdout = std::io::stdout();
    match run_demo(&config, &mut stdout.lock()) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Demo failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_guard(matches: &ArgMatches) -> Result<()> {
    let config = from_arguments(matches)?;
    let stdout = std::io::stdout();
    match run_guard_suite(&config, &mut stdout.lock()) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Guard suite failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
