use std::fs;
use std::path::PathBuf;

use lb2es_core::EsGame;

use crate::{Frontend, FrontendError, PlatformLayout};

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Entities put back as literal characters after serialization. ES reads
/// these fine and its own editor writes them unescaped.
const RELAXED_ENTITIES: &[(&str, &str)] = &[("&apos;", "'"), ("&quot;", "\""), ("&#xA;", "\n")];

/// EmulationStation (ES / ES-DE) `gamelist.xml` frontend.
pub struct EsDeFrontend;

impl EsDeFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EsDeFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for EsDeFrontend {
    fn name(&self) -> &'static str {
        "ES-DE"
    }

    fn write_metadata(
        &self,
        games: &[EsGame],
        layout: &PlatformLayout,
    ) -> Result<PathBuf, FrontendError> {
        fs::create_dir_all(layout.root()).map_err(|e| FrontendError::io(layout.root(), e))?;

        let gamelist_path = layout.gamelist();
        fs::write(&gamelist_path, render_gamelist(games))
            .map_err(|e| FrontendError::io(&gamelist_path, e))?;

        log::debug!("wrote {} games to {}", games.len(), gamelist_path.display());
        Ok(gamelist_path)
    }
}

/// Serialize `games` as a complete `gamelist.xml` document, in order.
pub fn render_gamelist(games: &[EsGame]) -> String {
    let mut xml = String::new();
    xml.push_str("<gameList>\n");

    for game in games {
        xml.push_str("  <game>\n");
        write_tag(&mut xml, "path", &game.path);
        write_tag(&mut xml, "name", &game.name);
        write_tag(&mut xml, "desc", &game.description);
        write_tag(&mut xml, "rating", &game.rating);
        if !game.release_date.is_empty() {
            write_tag(&mut xml, "releasedate", &game.release_date);
        }
        write_optional_tag(&mut xml, "developer", &game.developer);
        write_optional_tag(&mut xml, "publisher", &game.publisher);
        write_optional_tag(&mut xml, "players", &game.players);
        write_optional_tag(&mut xml, "genre", &game.genre);
        xml.push_str("  </game>\n");
    }

    xml.push_str("</gameList>\n");

    format!("{XML_HEADER}{}", relax_entities(&xml))
}

fn write_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn write_optional_tag(xml: &mut String, tag: &str, value: &Option<String>) {
    if let Some(v) = value {
        write_tag(xml, tag, v);
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\t', "&#x9;")
        .replace('\n', "&#xA;")
        .replace('\r', "&#xD;")
}

/// Undo escaping of the entities in [`RELAXED_ENTITIES`] only.
fn relax_entities(xml: &str) -> String {
    RELAXED_ENTITIES
        .iter()
        .fold(xml.to_string(), |acc, (entity, literal)| {
            acc.replace(entity, literal)
        })
}

#[cfg(test)]
#[path = "tests/esde_tests.rs"]
mod tests;
