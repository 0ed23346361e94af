use clap::{Arg, ArgAction, Command};
use qbank::{config::Config, render, Library};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("qbank-show")
        .version("1.0")
        .about("Prints one problem from a collection")
        .arg(
            Arg::new("collection")
                .help("Collection name, e.g. architectureIntermediateProblems")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("id")
                .help("Problem id, e.g. arch-inter-1")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to the configuration file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the problem as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let library = Library::from_config(&config)?;

    // Both are required, clap has already rejected a missing one.
    let collection = matches
        .get_one::<String>("collection")
        .ok_or("missing collection")?;
    let id = matches.get_one::<String>("id").ok_or("missing id")?;

    let record = library.get_by_id(collection, id)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{}", render::render_record(record));
    }

    Ok(())
}
