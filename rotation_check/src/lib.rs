use serde_json::Value;
use tactics::{
    generate_rotated_tactics, shows_icon, ActionTag, GridConfig, InvalidTacticsShape,
    SubPosition, TacticsDefinition, Zone,
};
use tracing::debug;

/// What to check on the original and the rotated tactics.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Raw grid column.
    pub slot: i32,
    pub target: ActionTag,
    pub sub_position: SubPosition,
    pub grid: GridConfig,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            slot: 6,
            target: ActionTag::Attack,
            sub_position: SubPosition::Down,
            grid: GridConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Original,
    Rotated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MembershipCheck {
    pub side: Side,
    pub zone: Zone,
    pub present: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotCheck {
    pub zone: Zone,
    /// The adjusted index, even when it is out of range.
    pub adjusted: i32,
    pub valid: bool,
}

/// The result of checking one set of tactics.
///
/// Its [`Display`](std::fmt::Display) output is the regression oracle of the
/// `rotation_check` binary.
#[derive(Clone, Debug)]
pub struct Report {
    pub scenario: Scenario,
    pub original: TacticsDefinition,
    pub rotated: TacticsDefinition,
    pub memberships: Vec<MembershipCheck>,
    pub slots: [SlotCheck; 2],
}

/// Rotates `value` and runs the membership and slot checks of `scenario`.
///
/// Fails only if `value` is not a valid tactics definition.
pub fn check(value: &Value, scenario: &Scenario) -> Result<Report, InvalidTacticsShape> {
    let original = TacticsDefinition::from_value(value)?;
    let rotated = generate_rotated_tactics(value)?;

    let mut memberships = Vec::with_capacity(4);
    for (side, tactics) in [(Side::Original, &original), (Side::Rotated, &rotated)] {
        for zone in Zone::ALL {
            let present = shows_icon(
                tactics,
                &scenario.grid,
                zone,
                scenario.slot,
                &scenario.sub_position,
                &scenario.target,
            );
            debug!(?side, %zone, present);
            memberships.push(MembershipCheck {
                side,
                zone,
                present,
            });
        }
    }

    let slots = Zone::ALL.map(|zone| match scenario.grid.adjust(zone, scenario.slot) {
        Ok(adjusted) => SlotCheck {
            zone,
            adjusted: i32::from(adjusted.index),
            valid: true,
        },
        Err(err) => SlotCheck {
            zone,
            adjusted: err.adjusted,
            valid: false,
        },
    });

    Ok(Report {
        scenario: scenario.clone(),
        original,
        rotated,
        memberships,
        slots,
    })
}

fn capitalized(zone: Zone) -> &'static str {
    match zone {
        Zone::Left => "Left",
        Zone::Right => "Right",
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let original = serde_json::to_string_pretty(&self.original).map_err(|_| std::fmt::Error)?;
        let rotated = serde_json::to_string_pretty(&self.rotated).map_err(|_| std::fmt::Error)?;
        writeln!(f, "Original tactics:\n{}", original)?;
        writeln!(f, "Rotated tactics:\n{}", rotated)?;
        writeln!(
            f,
            "Slot {}, target \"{}\":",
            self.scenario.slot, self.scenario.target
        )?;
        for check in &self.memberships {
            let side = match check.side {
                Side::Original => "original",
                Side::Rotated => "rotated",
            };
            writeln!(
                f,
                "  {} {}.{}: {}",
                side, check.zone, self.scenario.sub_position, check.present
            )?;
        }
        for slot in &self.slots {
            writeln!(f, "Adjusted slot ({}): {}", slot.zone, slot.adjusted)?;
        }
        for slot in &self.slots {
            writeln!(f, "{} slot valid: {}", capitalized(slot.zone), slot.valid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tactics::FormationCatalog;

    use super::*;

    fn lwf_value() -> Value {
        let catalog = FormationCatalog::builtin();
        serde_json::to_value(&catalog.get("A02").unwrap().tactics).unwrap()
    }

    #[test]
    fn reference_scenario_output() {
        let report = check(&lwf_value(), &Scenario::default()).unwrap();
        let expected = r#"Original tactics:
{
  "left": {
    "down": "press"
  },
  "right": {
    "top": "attack",
    "down": "attack",
    "right": "attack"
  }
}
Rotated tactics:
{
  "left": {
    "top": "attack",
    "down": "attack",
    "left": "attack"
  },
  "right": {
    "top": "press"
  }
}
Slot 6, target "attack":
  original left.down: false
  original right.down: true
  rotated left.down: true
  rotated right.down: false
Adjusted slot (left): 5
Adjusted slot (right): 6
Left slot valid: true
Right slot valid: true
"#;
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn slots_at_the_edges() {
        let scenario = Scenario {
            slot: 0,
            ..Scenario::default()
        };
        let report = check(&lwf_value(), &scenario).unwrap();
        assert_eq!(
            report.slots,
            [
                SlotCheck {
                    zone: Zone::Left,
                    adjusted: -1,
                    valid: false
                },
                SlotCheck {
                    zone: Zone::Right,
                    adjusted: 0,
                    valid: true
                },
            ]
        );
        // The left zone does not cover slot 0, so nothing is found there.
        assert!(report
            .memberships
            .iter()
            .filter(|check| check.zone == Zone::Left)
            .all(|check| !check.present));

        let scenario = Scenario {
            slot: 7,
            ..Scenario::default()
        };
        let report = check(&lwf_value(), &scenario).unwrap();
        assert!(report.slots[0].valid);
        assert!(!report.slots[1].valid);
        assert!(report.to_string().ends_with("Left slot valid: true\nRight slot valid: false\n"));
    }

    #[test]
    fn other_sub_position_and_target() {
        let scenario = Scenario {
            target: ActionTag::Press,
            sub_position: SubPosition::Top,
            ..Scenario::default()
        };
        let report = check(&lwf_value(), &scenario).unwrap();
        let present: Vec<bool> = report.memberships.iter().map(|check| check.present).collect();
        assert_eq!(present, [false, false, false, true]);
        assert!(report.to_string().contains("  rotated right.top: true\n"));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert_eq!(
            check(&json!({ "left": {}, "middle": {} }), &Scenario::default()).unwrap_err(),
            InvalidTacticsShape::UnexpectedZone {
                key: String::from("middle")
            }
        );
    }
}
