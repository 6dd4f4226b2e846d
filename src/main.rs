use std::process::ExitCode;

use clap::ArgMatches;

use objmodel::config::CONFIG;
use objmodel::scenarios::{self, Scenario, SCENARIOS};
use objmodel::vm::{DEFAULT_MAX_CALL_DEPTH, VM};

mod cli;

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();

    if matches.get_flag("list") {
        for scenario in SCENARIOS {
            println!("{:<12} {}", scenario.name, scenario.description);
        }
        return ExitCode::SUCCESS;
    }

    let max_call_depth =
        matches.get_one::<usize>("max_call_depth").copied().unwrap_or(DEFAULT_MAX_CALL_DEPTH);

    if let Err(err) = configure(matches.get_flag("debug"), max_call_depth) {
        eprintln!("{err}");
        return ExitCode::from(1);
    }

    init_logger();

    let selected = match select_scenarios(&matches) {
        Ok(selected) => selected,
        Err(name) => {
            eprintln!("Unknown scenario: {name} (use --list to see available scenarios)");
            return ExitCode::from(2);
        }
    };

    let mut failed = false;
    for (i, scenario) in selected.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let mut vm = VM::default();
        let result = (scenario.run)(&mut vm);
        for line in vm.take_output() {
            println!("{line}");
        }
        if let Err(err) = result {
            eprintln!("Scenario {} failed: {err}", scenario.name);
            failed = true;
        }
    }

    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Debug mode raises the default log filter so per-call logging from
/// the VM shows up without `RUST_LOG`.
fn init_logger() {
    let debug = match CONFIG.read() {
        Ok(config) => config.debug(),
        Err(_) => false,
    };
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
    if let Ok(config) = CONFIG.read() {
        for (name, val) in config.iter() {
            log::debug!("CONFIG: {name} = {val}");
        }
    }
}

fn configure(debug: bool, max_call_depth: usize) -> Result<(), String> {
    let mut config = CONFIG.write().map_err(|err| format!("Could not lock config: {err}"))?;
    config.set_bool("debug", debug).map_err(|err| err.to_string())?;
    config.set_usize("max_call_depth", max_call_depth).map_err(|err| err.to_string())?;
    Ok(())
}

/// Scenarios named on the command line, or all of them.
fn select_scenarios(matches: &ArgMatches) -> Result<Vec<&'static Scenario>, String> {
    match matches.get_many::<String>("scenarios") {
        Some(names) => names
            .map(|name| scenarios::find(name).ok_or_else(|| name.to_owned()))
            .collect(),
        None => Ok(SCENARIOS.iter().collect()),
    }
}
