use std::{path::PathBuf, process::exit};

use chime::{
    config::{Config, ConfigError},
    runner::AlarmRunner,
    schedule,
    sound::SoundSink,
};
use chrono::Local;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// path to an alternate configuration file
    #[clap(long, short)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// write a default configuration file
    Init {
        /// overwrite an existing configuration
        #[clap(long, short)]
        force: bool,
    },
}

fn main() {
    // initilize the logger
    simple_file_logger::init_logger!("chime").expect("couldn't initialize logger");

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{e}");
        eprintln!("chime: {e}");
        eprintln!("see the chime log file for more details");
        exit(1);
    }
}

fn run(args: Args) -> Result<(), ConfigError> {
    match args.command {
        Some(Command::Init { force }) => init_config(args.config, force),
        None => run_alarms(args.config),
    }
}

fn config_path(config_override: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match config_override {
        Some(path) => Ok(path),
        None => Config::config_path().ok_or(ConfigError::ConfigDir),
    }
}

fn init_config(config_override: Option<PathBuf>, force: bool) -> Result<(), ConfigError> {
    let path = config_path(config_override)?;
    if path.exists() && !force {
        println!(
            "configuration already exists at {}, pass --force to overwrite",
            path.display()
        );
        return Ok(());
    }
    Config::new().save(&path)?;
    println!("wrote a default configuration to {}", path.display());
    Ok(())
}

fn run_alarms(config_override: Option<PathBuf>) -> Result<(), ConfigError> {
    let path = config_path(config_override)?;
    let config = Config::load(&path)?;
    config.validate()?;
    let times = config.alarm_times()?;

    // the date anchor and past/future cutoff for the whole run
    let reference = Local::now().naive_local();
    let queue = schedule::compile(&times, reference);
    if queue.is_empty() {
        log::info!("no alarm found");
        println!("no alarm found");
        return Ok(());
    }

    let mut sink = SoundSink::new(config.sound);
    let done = AlarmRunner::new(queue).run(&mut sink);
    log::info!("finished after {} alarm(s)", done.len());
    Ok(())
}
