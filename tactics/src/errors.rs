use crate::{SubPosition, Zone};

/// The error type for reading a tactics definition from untyped data,
/// e.g. for [`generate_rotated_tactics()`](crate::generate_rotated_tactics).
///
/// Malformed tactics are an authoring mistake, so they are reported instead of
/// being rotated into something that looks plausible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidTacticsShape {
    NotAnObject,
    UnexpectedZone { key: String },
    ZoneNotAnObject { zone: Zone },
    ActionNotAString { zone: Zone, sub_position: SubPosition },
}

impl std::error::Error for InvalidTacticsShape {}

impl std::fmt::Display for InvalidTacticsShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTacticsShape::NotAnObject =>
                write!(f, "Tactics must be an object with the zones 'left' and 'right'"),
            InvalidTacticsShape::UnexpectedZone { key } =>
                write!(f, "Tactics contain the unknown zone '{}', only 'left' and 'right' are allowed", key),
            InvalidTacticsShape::ZoneNotAnObject { zone } =>
                write!(f, "The '{}' zone must be an object mapping sub-positions to actions", zone),
            InvalidTacticsShape::ActionNotAString { zone, sub_position } =>
                write!(f, "The action at '{}.{}' must be a string", zone, sub_position),
        }
    }
}

/// A slot that, after adjusting it for its zone, lies outside of the zone's window.
///
/// This is not a hard failure: a membership test treats it as "not present".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRangeSlot {
    pub zone: Zone,
    pub slot: i32,
    pub adjusted: i32,
    pub max_adjusted: i32,
}

impl std::error::Error for OutOfRangeSlot {}

impl std::fmt::Display for OutOfRangeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slot {} adjusted for the {} zone is {}, which is outside of 0..={}",
            self.slot, self.zone, self.adjusted, self.max_adjusted
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidGridConfig {
    TooFewColumns { columns: u8 },
}

impl std::error::Error for InvalidGridConfig {}

impl std::fmt::Display for InvalidGridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGridConfig::TooFewColumns { columns } => write!(
                f,
                "A grid needs at least 2 columns to hold both zones, got {}",
                columns
            ),
        }
    }
}
