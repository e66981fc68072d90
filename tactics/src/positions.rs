use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One horizontal half of the tactics grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Left,
    Right,
}

/// A relative location inside a [zone](Zone).
///
/// Only `top`, `down`, `left` and `right` are known to be orientation-sensitive.
/// Any other key found in authored data is kept as-is in [`SubPosition::Other`],
/// and it is never touched by a rotation.
///
/// The variant order is the order in which a zone is serialized:
/// `top`, `down`, `left`, `right`, then other keys alphabetically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubPosition {
    Top,
    Down,
    Left,
    Right,
    Other(String),
}

/// The tactical behavior assigned to a [sub-position](SubPosition).
///
/// Tags other than the known ones are carried verbatim in [`ActionTag::Other`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionTag {
    Press,
    Attack,
    None,
    Other(String),
}

impl Zone {
    pub const ALL: [Zone; 2] = [Zone::Left, Zone::Right];

    /// The zone that takes this zone's place when the board is rotated by 180°.
    pub fn opposite(self) -> Zone {
        match self {
            Zone::Left => Zone::Right,
            Zone::Right => Zone::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Left => "left",
            Zone::Right => "right",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error type for the [`FromStr`] instance of [`Zone`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseZoneError {
    pub input: String,
}

impl std::error::Error for ParseZoneError {}

impl std::fmt::Display for ParseZoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a zone, expected 'left' or 'right'", self.input)
    }
}

impl FromStr for Zone {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Zone::Left),
            "right" => Ok(Zone::Right),
            _ => Err(ParseZoneError {
                input: String::from(s),
            }),
        }
    }
}

impl SubPosition {
    /// Where this sub-position ends up after a 180° rotation.
    ///
    /// A point reflection swaps `top` with `down` and `left` with `right`.
    /// Unknown keys are returned unchanged.
    pub fn rotated(&self) -> SubPosition {
        match self {
            SubPosition::Top => SubPosition::Down,
            SubPosition::Down => SubPosition::Top,
            SubPosition::Left => SubPosition::Right,
            SubPosition::Right => SubPosition::Left,
            SubPosition::Other(key) => SubPosition::Other(key.clone()),
        }
    }

    pub fn is_orientation_sensitive(&self) -> bool {
        !matches!(self, SubPosition::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubPosition::Top => "top",
            SubPosition::Down => "down",
            SubPosition::Left => "left",
            SubPosition::Right => "right",
            SubPosition::Other(key) => key,
        }
    }
}

impl From<String> for SubPosition {
    fn from(key: String) -> Self {
        match key.as_str() {
            "top" => SubPosition::Top,
            "down" => SubPosition::Down,
            "left" => SubPosition::Left,
            "right" => SubPosition::Right,
            _ => SubPosition::Other(key),
        }
    }
}

impl From<&str> for SubPosition {
    fn from(key: &str) -> Self {
        SubPosition::from(String::from(key))
    }
}

impl From<SubPosition> for String {
    fn from(sub_position: SubPosition) -> Self {
        match sub_position {
            SubPosition::Other(key) => key,
            known => String::from(known.as_str()),
        }
    }
}

impl FromStr for SubPosition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SubPosition::from(s))
    }
}

impl std::fmt::Display for SubPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ActionTag {
    pub fn as_str(&self) -> &str {
        match self {
            ActionTag::Press => "press",
            ActionTag::Attack => "attack",
            ActionTag::None => "none",
            ActionTag::Other(tag) => tag,
        }
    }

    /// Single character used by the text visualization.
    pub fn symbol(&self) -> char {
        match self {
            ActionTag::Press => 'P',
            ActionTag::Attack => 'A',
            ActionTag::None => '·',
            ActionTag::Other(_) => '?',
        }
    }
}

impl From<String> for ActionTag {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "press" => ActionTag::Press,
            "attack" => ActionTag::Attack,
            "none" => ActionTag::None,
            _ => ActionTag::Other(tag),
        }
    }
}

impl From<&str> for ActionTag {
    fn from(tag: &str) -> Self {
        ActionTag::from(String::from(tag))
    }
}

impl From<ActionTag> for String {
    fn from(tag: ActionTag) -> Self {
        match tag {
            ActionTag::Other(tag) => tag,
            known => String::from(known.as_str()),
        }
    }
}

impl FromStr for ActionTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ActionTag::from(s))
    }
}

impl std::fmt::Display for ActionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
