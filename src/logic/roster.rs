//! Roster source: the built-in eight contestants, or a CSV file of `id,image_ref` rows.

use crate::models::{Contestant, ContestantId, TournamentError};
use std::io::Read;
use std::path::Path;

/// Number of contestants in the built-in roster.
pub const DEFAULT_ROSTER_SIZE: usize = 8;

/// Contestants 1..=8 with images `/1.jpeg` .. `/8.jpeg`.
pub fn default_roster() -> Vec<Contestant> {
    (1..=DEFAULT_ROSTER_SIZE as ContestantId)
        .map(|id| Contestant::new(id, format!("/{}.jpeg", id)))
        .collect()
}

/// Read a roster from CSV with an `id,image_ref` header. Size is checked by `initialize`.
pub fn load_roster_csv<R: Read>(reader: R) -> Result<Vec<Contestant>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize::<Contestant>()
        .map(|row| row.map_err(|e| TournamentError::RosterFile(e.to_string())))
        .collect()
}

/// Read a roster CSV from disk.
pub fn load_roster_file(path: impl AsRef<Path>) -> Result<Vec<Contestant>, TournamentError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| TournamentError::RosterFile(format!("{}: {}", path.display(), e)))?;
    let roster = load_roster_csv(file)?;
    log::info!("Loaded {} contestants from {}", roster.len(), path.display());
    Ok(roster)
}
