use serde::{Deserialize, Serialize};

use crate::{InvalidGridConfig, OutOfRangeSlot, Zone};

pub const DEFAULT_GRID_COLUMNS: u8 = 8;

/// The width of the pitch grid that slot indices refer to.
///
/// The two zones each cover a window of `columns - 1` columns, with the left
/// zone's window starting one column later. So a raw slot is shifted by -1
/// for the left zone and left alone for the right zone, and the result must
/// lie in `0..=columns - 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridConfigRaw")]
pub struct GridConfig {
    columns: u8,
}

#[derive(Deserialize)]
struct GridConfigRaw {
    columns: u8,
}

/// A slot index that has been shifted into a zone's coordinates and checked
/// against the zone's window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AdjustedSlot {
    pub zone: Zone,
    pub index: u8,
}

impl GridConfig {
    pub fn new(columns: u8) -> Result<Self, InvalidGridConfig> {
        if columns < 2 {
            return Err(InvalidGridConfig::TooFewColumns { columns });
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// The largest valid adjusted index.
    pub fn max_adjusted(&self) -> i32 {
        i32::from(self.columns) - 2
    }

    /// The shift applied to raw slots of a zone.
    pub fn zone_offset(zone: Zone) -> i32 {
        match zone {
            Zone::Left => -1,
            Zone::Right => 0,
        }
    }

    /// Shifts `slot` into the coordinates of `zone` and checks that the
    /// zone covers it.
    pub fn adjust(&self, zone: Zone, slot: i32) -> Result<AdjustedSlot, OutOfRangeSlot> {
        let adjusted = slot.saturating_add(Self::zone_offset(zone));
        if (0..=self.max_adjusted()).contains(&adjusted) {
            Ok(AdjustedSlot {
                zone,
                // The range check above guarantees the index fits
                index: adjusted as u8,
            })
        } else {
            Err(OutOfRangeSlot {
                zone,
                slot,
                adjusted,
                max_adjusted: self.max_adjusted(),
            })
        }
    }

    pub fn is_valid(&self, zone: Zone, slot: i32) -> bool {
        self.adjust(zone, slot).is_ok()
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

impl TryFrom<GridConfigRaw> for GridConfig {
    type Error = InvalidGridConfig;

    fn try_from(raw: GridConfigRaw) -> Result<Self, Self::Error> {
        Self::new(raw.columns)
    }
}
