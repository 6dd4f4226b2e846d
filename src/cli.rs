use clap::builder::FalseyValueParser;
use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let scenario_help = concat!(
        "Scenario(s) to run. When none are given, all scenarios run\n",
        "in order. Use --list to see the available names.\n",
    );

    Command::new("objmodel")
        .version("0.0.0")
        .about("Run method visibility and aliasing scenarios")
        .arg(
            Arg::new("max_call_depth")
                .short('x')
                .long("max-call-depth")
                .default_value("256")
                .value_parser(value_parser!(usize))
                .env("OBJMODEL_MAX_CALL_DEPTH")
                .help("Maximum call/recursion depth (0 means no limit)"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("OBJMODEL_DEBUG")
                .help("Enable debug mode?"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List available scenarios and exit"),
        )
        .arg(
            Arg::new("scenarios")
                .index(1)
                .num_args(0..)
                .required(false)
                .help(scenario_help),
        )
}
