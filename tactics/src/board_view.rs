use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ActionTag, GridConfig, SubPosition, TacticsDefinition, Zone};

/// How the board is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// As the tactics were authored.
    #[default]
    Default,
    /// Rotated by 180°.
    Flipped,
}

impl TacticsDefinition {
    /// The tactics as they appear on a board shown with `orientation`.
    pub fn as_seen_from(&self, orientation: Orientation) -> TacticsDefinition {
        match orientation {
            Orientation::Default => self.clone(),
            Orientation::Flipped => self.rotated(),
        }
    }
}

/// Tests whether the field icon `tag` is shown at `sub_position` of `zone`
/// for the raw grid column `slot`.
///
/// A slot that the zone does not cover is never looked up and counts as
/// "not present".
pub fn shows_icon(
    tactics: &TacticsDefinition,
    grid: &GridConfig,
    zone: Zone,
    slot: i32,
    sub_position: &SubPosition,
    tag: &ActionTag,
) -> bool {
    match grid.adjust(zone, slot) {
        Ok(_) => tactics.get(zone, sub_position) == Some(tag),
        Err(err) => {
            debug!(%err, "Slot not covered by zone");
            false
        }
    }
}

/// The tactics of one formation prepared for display.
///
/// Unlike the rotation itself, building a view never fails: malformed
/// authored tactics are logged and shown as having no special tactic.
#[derive(Clone, Debug)]
pub struct BoardView {
    orientation: Orientation,
    grid: GridConfig,
    tactics: TacticsDefinition,
}

impl BoardView {
    pub fn new(tactics: &TacticsDefinition, orientation: Orientation, grid: GridConfig) -> Self {
        Self {
            orientation,
            grid,
            tactics: tactics.as_seen_from(orientation),
        }
    }

    pub fn from_authored(value: &Value, orientation: Orientation, grid: GridConfig) -> Self {
        let tactics = match TacticsDefinition::from_value(value) {
            Ok(tactics) => tactics,
            Err(err) => {
                warn!(%err, "Malformed tactics, showing no special tactic");
                TacticsDefinition::default()
            }
        };
        Self::new(&tactics, orientation, grid)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// The tactics after applying the orientation.
    pub fn tactics(&self) -> &TacticsDefinition {
        &self.tactics
    }

    pub fn shows_icon(
        &self,
        zone: Zone,
        slot: i32,
        sub_position: &SubPosition,
        tag: &ActionTag,
    ) -> bool {
        shows_icon(&self.tactics, &self.grid, zone, slot, sub_position, tag)
    }
}
