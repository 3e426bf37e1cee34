use anyhow::Result;
use colored::Colorize;

use crate::database::{Match, Pairing, Player, Standing};

pub fn print_players(players: &[Player]) {
    for player in players {
        println!("{:>5}  {}", player.id.to_string().dimmed(), player.name);
    }
}

pub fn print_standings(standings: &[Standing], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(standings)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{:>5}  {:<30} {:>5} {:>7}", "id", "name", "wins", "matches").bold()
    );
    for standing in standings {
        println!(
            "{:>5}  {:<30} {:>5} {:>7}",
            standing.id,
            standing.name,
            standing.wins.to_string().green(),
            standing.matches
        );
    }
    Ok(())
}

pub fn print_matches(matches: &[Match]) {
    for recorded in matches {
        println!(
            "{:>5}  {} beat {}",
            recorded.id.to_string().dimmed(),
            recorded.winner.to_string().green(),
            recorded.loser.to_string().red()
        );
    }
}

pub fn print_pairings(pairings: &[Pairing], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(pairings)?);
        return Ok(());
    }

    for (table, pairing) in pairings.iter().enumerate() {
        println!(
            "{} {} (#{}) vs {} (#{})",
            format!("Table {}:", table + 1).bold(),
            pairing.name1,
            pairing.id1,
            pairing.name2,
            pairing.id2
        );
    }
    Ok(())
}
