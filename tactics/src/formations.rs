use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ActionTag, SubPosition, TacticsDefinition, TacticsZone};

/// An authored formation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    /// Human readable short name, e.g. "LWF".
    pub name: String,
    pub tactics: TacticsDefinition,
}

/// All formations, keyed by formation code (e.g. "A02").
///
/// The tactics in here are the canonical ones and are never rotated in place,
/// use [`TacticsDefinition::as_seen_from()`] to get a view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormationCatalog(BTreeMap<String, Formation>);

impl FormationCatalog {
    /// The formations that ship with the game.
    pub fn builtin() -> Self {
        let mut formations = BTreeMap::new();
        formations.insert(
            String::from("A02"),
            Formation {
                name: String::from("LWF"),
                tactics: TacticsDefinition::new(
                    TacticsZone::new().with(SubPosition::Down, ActionTag::Press),
                    TacticsZone::new()
                        .with(SubPosition::Top, ActionTag::Attack)
                        .with(SubPosition::Down, ActionTag::Attack)
                        .with(SubPosition::Right, ActionTag::Attack),
                ),
            },
        );
        Self(formations)
    }

    /// Reads a catalog from a JSON file of the form
    /// `{"A02": {"name": "LWF", "tactics": {"left": {...}, "right": {...}}}}`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read formation catalog '{}'", path.display()))?;
        let catalog: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid formation catalog '{}'", path.display()))?;
        debug!(path = %path.display(), formations = catalog.len(), "Loaded formation catalog");
        Ok(catalog)
    }

    pub fn get(&self, code: &str) -> Option<&Formation> {
        self.0.get(code)
    }

    pub fn insert(&mut self, code: String, formation: Formation) -> Option<Formation> {
        self.0.insert(code, formation)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::Zone;

    #[test]
    fn builtin_lwf() {
        let catalog = FormationCatalog::builtin();
        let lwf = catalog.get("A02").unwrap();
        assert_eq!(lwf.name, "LWF");
        assert_eq!(
            lwf.tactics.get(Zone::Left, &SubPosition::Down),
            Some(&ActionTag::Press)
        );
        assert_eq!(lwf.tactics.right.len(), 3);
        assert!(catalog.get("A03").is_none());
    }

    #[test]
    fn catalog_json() {
        let catalog: FormationCatalog = serde_json::from_str(
            r#"{"B01": {"name": "CB", "tactics": {"left": {"top": "press"}}}}"#,
        )
        .unwrap();
        assert_eq!(catalog.codes().collect::<Vec<_>>(), ["B01"]);
        let tactics = &catalog.get("B01").unwrap().tactics;
        assert!(tactics.right.is_empty());

        let err = serde_json::from_str::<FormationCatalog>(
            r#"{"B01": {"name": "CB", "tactics": {"up": {}}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown zone 'up'"));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("formations_{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        serde_json::to_writer(&mut file, &FormationCatalog::builtin()).unwrap();
        file.flush().unwrap();
        drop(file);

        let catalog = FormationCatalog::load(&path).unwrap();
        assert_eq!(catalog, FormationCatalog::builtin());
        std::fs::remove_file(&path).unwrap();

        assert!(FormationCatalog::load(&path).is_err());
    }
}
