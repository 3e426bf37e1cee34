pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod pairing;
pub mod sanitize;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::TournamentService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_command(cli: Cli) -> Result<()> {
    let config = AppConfig::new().with_database_path(cli.database);
    let service = TournamentService::new(&config);

    match cli.command {
        Command::Init => service.initialize(),
        Command::Register { name } => handle_register(&service, &name),
        Command::Count => handle_count(&service),
        Command::Players => {
            output::print_players(&service.list_players()?);
            Ok(())
        }
        Command::Standings { json } => output::print_standings(&service.player_standings()?, json),
        Command::Report { winner, loser } => service.report_match(winner, loser).map(|_| ()),
        Command::Matches => {
            output::print_matches(&service.list_matches()?);
            Ok(())
        }
        Command::Pairings { json } => output::print_pairings(&service.swiss_pairings()?, json),
        Command::Reset { matches_only } => handle_reset(&service, matches_only),
        Command::Completions { shell } => handle_completions(shell),
    }
}

pub fn handle_register(service: &TournamentService, name: &str) -> Result<()> {
    let id = service.register_player(name)?;
    println!("{id}");
    Ok(())
}

pub fn handle_count(service: &TournamentService) -> Result<()> {
    println!("{}", service.count_players()?);
    Ok(())
}

pub fn handle_reset(service: &TournamentService, matches_only: bool) -> Result<()> {
    if matches_only {
        service.reset_matches()
    } else {
        service.reset_tournament()
    }
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
