// vlcvideo-cli/src/main.rs
//
// Entry point for the vlcvideo binary: parses arguments, sets up logging,
// binds `video` to a simulated player and dispatches the subcommand.

use clap::Parser;
use std::process;

use vlcvideo_cli::{
    Cli, CliResult, Commands, Host, load_player, logging, run_file, run_get, run_inspect, run_set,
};

fn run(cli: Cli) -> CliResult<()> {
    let player = load_player(&cli)?;
    let mut host = Host::new(player)?;

    match &cli.command {
        Commands::Inspect => run_inspect(&host, cli.json),
        Commands::Get(args) => run_get(&host, &args.path, cli.json),
        Commands::Set(args) => run_set(&mut host, &args.path, &args.value, cli.json),
        Commands::Run(args) => run_file(&mut host, &args.script, cli.json),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    log::debug!("Parsed arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        log::debug!("Underlying error: {:?}", e.root());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
