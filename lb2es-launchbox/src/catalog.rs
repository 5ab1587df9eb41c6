use std::io::BufRead;
use std::path::{Path, PathBuf};

use lb2es_core::LbGame;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::CatalogError;

/// Location of a platform's catalog: `<root>/Data/Platforms/<platform>.xml`.
pub fn catalog_path(launchbox_root: &Path, platform: &str) -> PathBuf {
    launchbox_root
        .join("Data")
        .join("Platforms")
        .join(format!("{platform}.xml"))
}

/// Parse a LaunchBox platform catalog from a file path.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<LbGame>, CatalogError> {
    if !path.is_file() {
        return Err(CatalogError::Missing(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_catalog(reader)
}

/// Parse every `<Game>` entry of a LaunchBox platform catalog, in file order.
///
/// Other top-level elements (`<Platform>`, `<AdditionalApplication>`, ...)
/// and unknown child elements are skipped. Field text is kept as written,
/// except that `\r\n` and lone `\r` line endings become `\n`.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Vec<LbGame>, CatalogError> {
    let mut xml = Reader::from_reader(reader);

    let mut buf = Vec::new();
    let mut games = Vec::new();

    let mut current_game: Option<PendingGame> = None;
    let mut current_tag = String::new();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if current_game.is_none() {
                    if tag_name == "Game" {
                        current_game = Some(PendingGame::default());
                    }
                } else {
                    current_tag = tag_name;
                }
            }
            Event::Text(ref e) => {
                if let Some(ref mut game) = current_game {
                    let text = e.unescape()?;
                    game.push_text(&current_tag, &text);
                }
            }
            Event::CData(ref e) => {
                if let Some(ref mut game) = current_game {
                    game.push_text(&current_tag, &String::from_utf8_lossy(e));
                }
            }
            Event::End(ref e) => {
                if current_game.is_some() && e.name().as_ref() == b"Game" {
                    if let Some(game) = current_game.take() {
                        games.push(game.finish()?);
                    }
                }
                current_tag.clear();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    log::debug!("parsed {} games from catalog", games.len());
    Ok(games)
}

/// A `<Game>` element being read. The star rating is kept as text until
/// the element closes so a bad value can be reported with the game's title.
#[derive(Default)]
struct PendingGame {
    game: LbGame,
    star_rating: String,
}

impl PendingGame {
    fn push_text(&mut self, tag: &str, text: &str) {
        let field = match tag {
            "ApplicationPath" => &mut self.game.application_path,
            "Developer" => &mut self.game.developer,
            "Genre" => &mut self.game.genre,
            "MaxPlayers" => &mut self.game.max_players,
            "Notes" => &mut self.game.notes,
            "Platform" => &mut self.game.platform,
            "Publisher" => &mut self.game.publisher,
            "ReleaseDate" => &mut self.game.release_date,
            "Title" => &mut self.game.title,
            "Region" => &mut self.game.region,
            "CommunityStarRating" => &mut self.star_rating,
            _ => return,
        };
        field.push_str(&normalize_newlines(text));
    }

    fn finish(mut self) -> Result<LbGame, CatalogError> {
        let rating = self.star_rating.trim();
        if !rating.is_empty() {
            self.game.star_rating =
                rating.parse().map_err(|_| CatalogError::InvalidField {
                    field: "CommunityStarRating",
                    title: self.game.title.clone(),
                    value: self.star_rating.clone(),
                })?;
        }
        Ok(self.game)
    }
}

/// XML 1.0 end-of-line handling, which quick-xml leaves to the caller.
fn normalize_newlines(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n").into()
    } else {
        text.into()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
