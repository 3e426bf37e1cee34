use anyhow::Result;
use log::{debug, info, warn};

use crate::config::settings::AppConfig;
use crate::database::{self, Database, Match, Pairing, Player, PlayerId, Standing};
use crate::pairing::{self, PairingRound};

/// The tournament operations, each a single round trip to the database.
///
/// Nothing is held between calls: standings are read fresh every time and each
/// mutation commits on its own.
pub struct TournamentService {
    db: Database,
}

impl TournamentService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_database(Database::new(&config.database.path))
    }

    pub fn with_database(db: Database) -> Self {
        Self { db }
    }

    pub fn initialize(&self) -> Result<()> {
        database::setup::initialize_schema(&self.db)
    }

    /// Removes every match record.
    pub fn reset_matches(&self) -> Result<()> {
        let removed = database::matches::delete_all(&self.db)?;
        info!("Deleted {} matches", removed);
        Ok(())
    }

    /// Removes every player. Fails while matches still reference them, so
    /// reset matches first.
    pub fn reset_players(&self) -> Result<()> {
        let removed = database::players::delete_all(&self.db)?;
        info!("Deleted {} players", removed);
        Ok(())
    }

    /// Clears matches and then players.
    pub fn reset_tournament(&self) -> Result<()> {
        self.reset_matches()?;
        self.reset_players()
    }

    pub fn count_players(&self) -> Result<i64> {
        let count = database::players::count(&self.db)?;
        debug!("{} players registered", count);
        Ok(count)
    }

    /// Registers a player. Names need not be unique; the id assigned by the
    /// database is returned.
    pub fn register_player(&self, name: &str) -> Result<PlayerId> {
        let player = database::players::insert_player(&self.db, name)?;
        info!("Registered player {} as #{}", player.name, player.id);
        Ok(player.id)
    }

    pub fn list_players(&self) -> Result<Vec<Player>> {
        database::players::list_all(&self.db)
    }

    /// Players sorted by wins, most first.
    pub fn player_standings(&self) -> Result<Vec<Standing>> {
        let standings = database::standings::list_standings(&self.db)?;
        debug!("Fetched standings for {} players", standings.len());
        Ok(standings)
    }

    /// Records a single result. No check is made that the players exist,
    /// differ, or have not met already.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        let recorded = database::matches::insert_match(&self.db, winner, loser)?;
        info!("Recorded match #{}: {} beat {}", recorded.id, winner, loser);
        Ok(recorded)
    }

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        database::matches::list_all(&self.db)
    }

    /// Pairs players on equal wins for the next round.
    ///
    /// Each player appears in at most one pairing. Players left over in a
    /// group of odd size sit the round out.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        Ok(self.pairing_round()?.pairings)
    }

    /// Same as [`Self::swiss_pairings`], also naming the players the greedy
    /// pass could not place.
    pub fn pairing_round(&self) -> Result<PairingRound> {
        let candidates = database::standings::list_pairing_candidates(&self.db)?;
        debug!("Fetched {} pairing candidates", candidates.len());

        let round = pairing::deduplicate_pairings(candidates);
        if !round.unpaired.is_empty() {
            let ids: Vec<String> = round.unpaired.iter().map(|id| id.to_string()).collect();
            warn!(
                "{} players left without a pairing this round: {}",
                round.unpaired.len(),
                ids.join(", ")
            );
        }
        Ok(round)
    }
}
