pub mod dedup;

pub use dedup::{deduplicate_pairings, PairingRound};
