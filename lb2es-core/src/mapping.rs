//! LaunchBox -> EmulationStation field mapping.

use chrono::DateTime;

use crate::util::{rom_basename, strip_extension};
use crate::{EsGame, LbGame};

/// `strftime` pattern for ES release dates (`19950601T000000`).
pub const ES_DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Release date written when the catalog date can't be parsed: the zero
/// timestamp (0001-01-01 00:00:00) in [`ES_DATE_FORMAT`].
pub const ES_ZERO_DATE: &str = "00010101T000000";

/// Degraded-but-usable input noticed while mapping a game.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MappingWarning {
    #[error("{title}: MaxPlayers is blank")]
    BlankMaxPlayers { title: String },

    #[error("{title}: could not parse release date {value:?}: {reason}")]
    InvalidReleaseDate {
        title: String,
        value: String,
        reason: String,
    },
}

/// Result of mapping one game: the ES record plus any warnings to report.
#[derive(Debug, Clone)]
pub struct Mapping {
    pub game: EsGame,
    pub warnings: Vec<MappingWarning>,
}

/// Convert a LaunchBox game to its ES counterpart.
///
/// Never fails; blank player counts and unparseable dates are reported as
/// [`MappingWarning`]s and mapped to an empty player count and
/// [`ES_ZERO_DATE`] respectively.
pub fn map_game(game: &LbGame) -> Mapping {
    let mut warnings = Vec::new();

    let rom_filename = rom_basename(&game.application_path);

    let players = match convert_players(&game.max_players) {
        Some(p) => Some(p),
        None => {
            warnings.push(MappingWarning::BlankMaxPlayers {
                title: game.title.clone(),
            });
            None
        }
    };

    let release_date = match convert_release_date(&game.release_date) {
        Ok(d) => d,
        Err(e) => {
            warnings.push(MappingWarning::InvalidReleaseDate {
                title: game.title.clone(),
                value: game.release_date.clone(),
                reason: e.to_string(),
            });
            ES_ZERO_DATE.to_string()
        }
    };

    let es = EsGame {
        path: format!("./{rom_filename}"),
        name: game.title.clone(),
        description: game.notes.clone(),
        developer: non_empty(&game.developer),
        publisher: non_empty(&game.publisher),
        genre: non_empty(&convert_genre(&game.genre)),
        players,
        rating: convert_rating(game.star_rating),
        release_date,
        image_path: strip_extension(rom_filename).to_string(),
        video_path: None,
    };

    Mapping {
        game: es,
        warnings,
    }
}

/// Normalize a LaunchBox max-player count.
///
/// `"0"` and `"1"` both mean single player, anything else `N` becomes
/// `"1-N"`. Returns `None` for a blank count.
pub fn convert_players(max_players: &str) -> Option<String> {
    match max_players {
        "" => None,
        "0" | "1" => Some("1".to_string()),
        n => Some(format!("1-{n}")),
    }
}

/// Scale a 0-5 star rating to ES's 0-1 range with two decimals.
///
/// Out-of-range values are passed through unclamped.
pub fn convert_rating(star_rating: f32) -> String {
    format!("{:.2}", star_rating / 5.0)
}

/// Swap LaunchBox's `;` genre separator for ES's `,`.
pub fn convert_genre(genre: &str) -> String {
    genre.replace(';', ",")
}

/// Reformat an RFC 3339 timestamp as an ES release date.
///
/// The wall-clock time in the timestamp's own offset is kept, so
/// `1995-06-01T00:00:00-07:00` becomes `19950601T000000`.
pub fn convert_release_date(value: &str) -> Result<String, chrono::ParseError> {
    let parsed = DateTime::parse_from_rfc3339(value)?;
    Ok(parsed.format(ES_DATE_FORMAT).to_string())
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
#[path = "tests/mapping_tests.rs"]
mod tests;
