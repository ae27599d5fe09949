use std::path::PathBuf;

use clap::Parser;
use scholars_table::{Config, Error, ScholarsTable, data, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file to load the questions from instead of the built-in set
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Seed for Bob's message picks
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the rolling log file
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running scholars-table: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.assistant.seed = Some(seed);
    }
    if let Some(dir) = args.log_dir {
        config.logging.directory = dir;
    }

    let _guard = logging::init(&config.logging)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let _enter = runtime.enter();

    let table = match args.questions {
        Some(path) => ScholarsTable::from_json(path, &config)?,
        None => ScholarsTable::new(data::list_questions(), &config),
    };
    table.run()
}
