use std::{io, path::PathBuf, process::exit};

use clap::{
    crate_authors, crate_description, crate_version, value_parser, Arg, ArgAction, ArgMatches,
    Command,
};

use constant_term::Config;
use constant_term_tools::{compute, demo};

fn run_compute(matches: &ArgMatches) -> anyhow::Result<()> {
    let mut config = Config::default();
    if let Some(&workers) = matches.get_one::<usize>("workers") {
        config.workers = workers;
    }
    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("document")
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    let verbose = matches.get_flag("verbose");

    compute(&paths, &config, verbose, &mut io::stdout().lock())
}

fn main() {
    let matches = Command::new("constant-term")
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .subcommand(
            Command::new("compute")
                .about("Compute the constant terms of root documents")
                .arg(
                    Arg::new("workers")
                        .help("Number of worker threads")
                        .long("workers")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("verbose")
                        .help("Print the roots selected for each constant term")
                        .long("verbose")
                        .short('v')
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("document")
                        .value_name("DOCUMENT")
                        .help("Root document filename")
                        .num_args(1..)
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("demo").about("Compute the constant terms of the bundled sample documents"),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("compute", compute_matches)) => run_compute(compute_matches),
        Some(("demo", _)) => demo(&mut io::stdout().lock()),
        _ => unreachable!("subcommand is required"),
    };

    if let Err(err) = result {
        eprintln!("error: {:#}", err);
        exit(1);
    }
}
