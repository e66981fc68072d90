use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ActionTag, InvalidTacticsShape, SubPosition, Zone};

/// The actions of one zone, keyed by sub-position.
///
/// Only sub-positions with a special tactic are present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TacticsZone(BTreeMap<SubPosition, ActionTag>);

/// The positional behavior of one formation, as authored for the default
/// camera orientation.
///
/// Deserialization goes through [`TacticsDefinition::from_value()`], so a
/// missing or `null` zone becomes an empty zone and anything else that is not
/// a two-zone mapping is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct TacticsDefinition {
    pub left: TacticsZone,
    pub right: TacticsZone,
}

impl TacticsZone {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insertion, mostly for authoring fixtures in code.
    #[must_use]
    pub fn with(mut self, sub_position: SubPosition, tag: ActionTag) -> Self {
        self.0.insert(sub_position, tag);
        self
    }

    pub fn insert(&mut self, sub_position: SubPosition, tag: ActionTag) -> Option<ActionTag> {
        self.0.insert(sub_position, tag)
    }

    pub fn get(&self, sub_position: &SubPosition) -> Option<&ActionTag> {
        self.0.get(sub_position)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SubPosition, &ActionTag)> {
        self.0.iter()
    }

    /// Flips every sub-position of this zone. The tags are cloned unchanged.
    pub fn rotated(&self) -> TacticsZone {
        self.0
            .iter()
            .map(|(sub_position, tag)| (sub_position.rotated(), tag.clone()))
            .collect()
    }

    fn from_value(zone: Zone, value: &Value) -> Result<Self, InvalidTacticsShape> {
        let entries = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(entries) => entries,
            _ => return Err(InvalidTacticsShape::ZoneNotAnObject { zone }),
        };
        let mut result = Self::new();
        for (key, tag) in entries {
            let sub_position = SubPosition::from(key.as_str());
            let tag = match tag.as_str() {
                Some(tag) => ActionTag::from(tag),
                None => {
                    return Err(InvalidTacticsShape::ActionNotAString { zone, sub_position })
                }
            };
            result.insert(sub_position, tag);
        }
        Ok(result)
    }
}

impl FromIterator<(SubPosition, ActionTag)> for TacticsZone {
    fn from_iter<T: IntoIterator<Item = (SubPosition, ActionTag)>>(iter: T) -> Self {
        Self(BTreeMap::from_iter(iter))
    }
}

impl<'a> IntoIterator for &'a TacticsZone {
    type Item = (&'a SubPosition, &'a ActionTag);
    type IntoIter = std::collections::btree_map::Iter<'a, SubPosition, ActionTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TacticsDefinition {
    pub fn new(left: TacticsZone, right: TacticsZone) -> Self {
        Self { left, right }
    }

    pub fn zone(&self, zone: Zone) -> &TacticsZone {
        match zone {
            Zone::Left => &self.left,
            Zone::Right => &self.right,
        }
    }

    pub fn zone_mut(&mut self, zone: Zone) -> &mut TacticsZone {
        match zone {
            Zone::Left => &mut self.left,
            Zone::Right => &mut self.right,
        }
    }

    /// The action at a sub-position of a zone, if there is one.
    pub fn get(&self, zone: Zone, sub_position: &SubPosition) -> Option<&ActionTag> {
        self.zone(zone).get(sub_position)
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// The same tactical shape as seen after rotating the board by 180°.
    ///
    /// The zones swap places, and within each zone `top`/`down` and
    /// `left`/`right` swap as well. Rotating twice gives back the original.
    ///
    /// The result shares nothing with `self`.
    pub fn rotated(&self) -> TacticsDefinition {
        TacticsDefinition {
            left: self.zone(Zone::Left.opposite()).rotated(),
            right: self.zone(Zone::Right.opposite()).rotated(),
        }
    }

    /// All action tags in the definition, sorted, with repetitions.
    pub fn action_tags(&self) -> Vec<&ActionTag> {
        let mut tags: Vec<&ActionTag> = self
            .left
            .iter()
            .chain(self.right.iter())
            .map(|(_, tag)| tag)
            .collect();
        tags.sort();
        tags
    }

    /// Reads a definition from untyped data.
    ///
    /// A missing or `null` zone is read as an empty zone.
    pub fn from_value(value: &Value) -> Result<Self, InvalidTacticsShape> {
        let zones = value.as_object().ok_or(InvalidTacticsShape::NotAnObject)?;
        let mut tactics = TacticsDefinition::default();
        for (key, zone_value) in zones {
            let zone = key
                .parse::<Zone>()
                .map_err(|_| InvalidTacticsShape::UnexpectedZone { key: key.clone() })?;
            *tactics.zone_mut(zone) = TacticsZone::from_value(zone, zone_value)?;
        }
        Ok(tactics)
    }
}

impl TryFrom<Value> for TacticsDefinition {
    type Error = InvalidTacticsShape;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// Validates untyped tactics and returns their 180°-rotated counterpart.
///
/// Input without any zones rotates to a definition with two empty zones.
/// The input is not modified.
pub fn generate_rotated_tactics(value: &Value) -> Result<TacticsDefinition, InvalidTacticsShape> {
    let tactics = TacticsDefinition::from_value(value)?;
    Ok(tactics.rotated())
}
