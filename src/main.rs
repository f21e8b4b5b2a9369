use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{LevelFilter, Metadata, Record};

use cpu_sched::config::SimulationConfig;
use cpu_sched::models::{Algorithm, Process};
use cpu_sched::report::{render_comparison, render_gantt, render_table};
use cpu_sched::workload::WorkloadGenerator;
use cpu_sched::Result;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn cli() -> Command {
    Command::new("cpu-sched")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates FCFS, SJF and Round-Robin CPU scheduling")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("JSON simulation config (processes, quantum, algorithms)"),
        )
        .arg(
            Arg::new("random")
                .short('r')
                .long("random")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .conflicts_with("input")
                .help("Generate N random processes instead of reading a file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .default_value("0")
                .help("Seed for --random"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .value_parser(["fcfs", "sjf", "rr", "all"])
                .help("Algorithm to run [default: from config, else all]"),
        )
        .arg(
            Arg::new("quantum")
                .short('q')
                .long("quantum")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .help("Round-Robin time quantum"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log scheduling decisions to stderr (repeat for more)"),
        )
}

/// The three-process example used when no input is given.
fn default_processes() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5),
        Process::new("P2", 1, 3),
        Process::new("P3", 2, 8),
    ]
}

fn load_config(matches: &ArgMatches) -> Result<SimulationConfig> {
    let mut config = if let Some(path) = matches.get_one::<String>("input") {
        SimulationConfig::from_file(path)?
    } else if let Some(&count) = matches.get_one::<usize>("random") {
        let seed = matches.get_one::<u64>("seed").copied().unwrap_or(0);
        SimulationConfig::new(WorkloadGenerator::new(count).with_seed(seed).generate())
    } else {
        SimulationConfig::new(default_processes())
    };

    if let Some(&quantum) = matches.get_one::<i64>("quantum") {
        config.quantum = quantum;
    }
    if let Some(name) = matches.get_one::<String>("algorithm") {
        config.algorithms = match name.as_str() {
            "all" => Algorithm::ALL.to_vec(),
            other => vec![other.parse()?],
        };
    }
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    log::info!(
        "{} processes, quantum {}, algorithms {:?}",
        config.processes.len(),
        config.quantum,
        config.algorithms
    );
    let comparison = config.run()?;

    if matches.get_one::<String>("format").map(String::as_str) == Some("json") {
        let json = serde_json::to_string_pretty(&comparison)?;
        println!("{json}");
        return Ok(());
    }

    for entry in &comparison.entries {
        println!("{}", render_table(&entry.result, &entry.metrics));
        println!("{}", render_gantt(&entry.result, &entry.metrics));
    }
    if comparison.entries.len() > 1 {
        print!("{}", render_comparison(&comparison));
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        cli().try_get_matches_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_default_config() {
        let config = load_config(&matches(&["cpu-sched"])).unwrap();
        assert_eq!(config.processes, default_processes());
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_overrides() {
        let config = load_config(&matches(&["cpu-sched", "-a", "rr", "-q", "4"])).unwrap();
        assert_eq!(config.algorithms, vec![Algorithm::RoundRobin]);
        assert_eq!(config.quantum, 4);
    }

    #[test]
    fn test_random_workload() {
        let config =
            load_config(&matches(&["cpu-sched", "--random", "6", "--seed", "9"])).unwrap();
        assert_eq!(config.processes.len(), 6);
        assert!(config.run().is_ok());
    }

    #[test]
    fn test_negative_quantum_reaches_validation() {
        let config = load_config(&matches(&["cpu-sched", "-q", "-1"])).unwrap();
        assert!(config.run().is_err());
    }

    #[test]
    fn test_input_conflicts_with_random() {
        assert!(cli()
            .try_get_matches_from(["cpu-sched", "-i", "x.json", "-r", "3"])
            .is_err());
    }
}
