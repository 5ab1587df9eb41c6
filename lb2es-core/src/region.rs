use crate::LbGame;

/// Synthetic region given to games that LaunchBox has no region for.
///
/// Art for these games lives directly in the category folder rather than
/// in a per-region subfolder.
pub const UNIVERSAL_REGION: &str = "Universal";

/// Decides which catalog entries make it into the output.
#[derive(Debug, Clone, Default)]
pub struct RegionFilter {
    regions: Vec<String>,
    include_universal: bool,
}

impl RegionFilter {
    pub fn new(regions: Vec<String>, include_universal: bool) -> Self {
        Self {
            regions,
            include_universal,
        }
    }

    /// Returns true if `game` should be migrated.
    ///
    /// A game with no region is kept only when universal games are enabled,
    /// and is then tagged with [`UNIVERSAL_REGION`].
    pub fn include(&self, game: &mut LbGame) -> bool {
        if game.region.is_empty() {
            if self.include_universal {
                game.region = UNIVERSAL_REGION.to_string();
                return true;
            }
            return false;
        }
        self.regions.iter().any(|r| *r == game.region)
    }

    /// Apply [`include`](Self::include) to a whole catalog, preserving order.
    pub fn apply(&self, games: Vec<LbGame>) -> Vec<LbGame> {
        games
            .into_iter()
            .filter_map(|mut game| self.include(&mut game).then_some(game))
            .collect()
    }
}
