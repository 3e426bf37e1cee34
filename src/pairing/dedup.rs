use std::collections::HashSet;

use crate::database::{Pairing, PlayerId};

/// Outcome of deduplicating one round's candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingRound {
    pub pairings: Vec<Pairing>,
    /// Players named by some candidate but left without a partner, in the
    /// order they were first seen.
    pub unpaired: Vec<PlayerId>,
}

/// Reduces raw equal-win candidates to a pairing where no player appears twice.
///
/// Candidates are visited in the order given, after dropping repeated rows. A
/// candidate is kept only if neither player has been assigned yet. This is a
/// greedy first fit: it never backtracks, so a player whose every candidate
/// was consumed earlier is left out of the round.
///
/// A player alone on their win count has no candidate at all and so never
/// shows up in `unpaired`.
pub fn deduplicate_pairings(candidates: Vec<Pairing>) -> PairingRound {
    let mut seen_candidates = HashSet::new();
    let mut seen_players: Vec<PlayerId> = Vec::new();
    let mut assigned: HashSet<PlayerId> = HashSet::new();
    let mut pairings = Vec::new();

    for candidate in candidates {
        if !seen_candidates.insert(candidate.clone()) {
            continue;
        }
        for id in [candidate.id1, candidate.id2] {
            if !seen_players.contains(&id) {
                seen_players.push(id);
            }
        }
        if assigned.contains(&candidate.id1) || assigned.contains(&candidate.id2) {
            log::trace!(
                "Dropping candidate {} vs {}: player already paired",
                candidate.id1,
                candidate.id2
            );
            continue;
        }
        assigned.insert(candidate.id1);
        assigned.insert(candidate.id2);
        pairings.push(candidate);
    }

    let unpaired = seen_players
        .into_iter()
        .filter(|id| !assigned.contains(id))
        .collect();

    PairingRound { pairings, unpaired }
}
