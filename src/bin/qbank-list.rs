use clap::{Arg, ArgAction, Command};
use qbank::{config::Config, export::Export, render, Difficulty, Library};
use regex::Regex;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("qbank-list")
        .version("1.0")
        .about("Lists collections, or the problems of one collection")
        .arg(
            Arg::new("collection")
                .help("Collection name, e.g. nodeGeneralProblems")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to the configuration file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .help("Only problems in this category")
                .value_name("CATEGORY"),
        )
        .arg(
            Arg::new("difficulty")
                .long("difficulty")
                .help("Only problems of this difficulty (easy, medium, hard)")
                .value_name("LEVEL"),
        )
        .arg(
            Arg::new("grep")
                .long("grep")
                .help("Only problems whose title or description matches this regex")
                .value_name("REGEX"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the selection as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let library = Library::from_config(&config)?;

    let Some(name) = matches.get_one::<String>("collection") else {
        for collection in library.collections() {
            println!("{}\t{}", collection.name, collection.problems().len());
        }
        return Ok(());
    };

    let collection = library.collection(name)?;
    let mut problems: Vec<_> = collection.problems().iter().collect();

    if let Some(category) = matches.get_one::<String>("category") {
        problems.retain(|p| &p.category == category);
    }
    if let Some(level) = matches.get_one::<String>("difficulty") {
        let difficulty: Difficulty = level.parse()?;
        problems.retain(|p| p.difficulty == difficulty);
    }
    if let Some(pattern) = matches.get_one::<String>("grep") {
        let re = Regex::new(pattern)?;
        problems.retain(|p| re.is_match(&p.title) || re.is_match(&p.description));
    }

    if matches.get_flag("json") {
        println!("{}", Export::new(collection, problems).to_json()?);
    } else {
        print!("{}", render::render_summary(&problems));
    }

    Ok(())
}
