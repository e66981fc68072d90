use crate::{ActionTag, SubPosition, TacticsDefinition, TacticsZone};

// Keys and tags that are not part of the known vocabulary, to exercise the
// pass-through paths.
const OTHER_SUB_POSITIONS: [&str; 3] = ["corner", "top_left", "center"];
const OTHER_TAGS: [&str; 3] = ["counter", "hold", ""];

impl quickcheck::Arbitrary for SubPosition {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        match u8::arbitrary(g) % 5 {
            0 => SubPosition::Top,
            1 => SubPosition::Down,
            2 => SubPosition::Left,
            3 => SubPosition::Right,
            _ => SubPosition::from(*g.choose(&OTHER_SUB_POSITIONS).unwrap()),
        }
    }
}

impl quickcheck::Arbitrary for ActionTag {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        match u8::arbitrary(g) % 4 {
            0 => ActionTag::Press,
            1 => ActionTag::Attack,
            2 => ActionTag::None,
            _ => ActionTag::from(*g.choose(&OTHER_TAGS).unwrap()),
        }
    }
}

impl quickcheck::Arbitrary for TacticsZone {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % 6;
        (0..len)
            .map(|_| (SubPosition::arbitrary(g), ActionTag::arbitrary(g)))
            .collect()
    }
}

impl quickcheck::Arbitrary for TacticsDefinition {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        TacticsDefinition {
            left: TacticsZone::arbitrary(g),
            right: TacticsZone::arbitrary(g),
        }
    }
}
