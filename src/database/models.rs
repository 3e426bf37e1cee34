use serde::Serialize;

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: i64,
    pub winner: PlayerId,
    pub loser: PlayerId,
}

/// One row of the `player_standings` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches: i64,
}

/// Two players scheduled to meet, `id1 < id2`.
///
/// Also the shape of a raw pairing candidate before deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}
