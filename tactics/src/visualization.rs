use crate::{SubPosition, TacticsDefinition, TacticsZone, Zone};

const CELL_LAYOUT: [[Option<SubPosition>; 3]; 3] = [
    [None, Some(SubPosition::Top), None],
    [Some(SubPosition::Left), None, Some(SubPosition::Right)],
    [None, Some(SubPosition::Down), None],
];

fn draw_row(zone: &TacticsZone, row: &[Option<SubPosition>; 3]) -> String {
    let mut result = String::from("│");
    for cell in row {
        match cell.as_ref().and_then(|sub_position| zone.get(sub_position)) {
            Some(tag) => result += &format!("{} ", tag.symbol()),
            None => result += "  ",
        }
    }
    result += "│";
    result
}

/// Draws both zones next to each other as 3x3 boxes.
///
/// `top` is drawn in the upper row, `down` in the lower row and `left`/`right`
/// on the sides of the middle row. Sub-positions without a place in the box
/// are listed below it.
pub fn visualize_tactics(tactics: &TacticsDefinition) -> String {
    let mut lines = vec![format!("{:^8} {:^8}", "left", "right")];
    lines.push(String::from("╭──────╮ ╭──────╮"));
    for row in &CELL_LAYOUT {
        lines.push(format!(
            "{} {}",
            draw_row(&tactics.left, row),
            draw_row(&tactics.right, row)
        ));
    }
    lines.push(String::from("╰──────╯ ╰──────╯"));

    for zone in Zone::ALL {
        for (sub_position, tag) in tactics.zone(zone) {
            if !sub_position.is_orientation_sensitive() {
                lines.push(format!("{}.{}: {}", zone, sub_position, tag));
            }
        }
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
