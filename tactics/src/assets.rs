use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ActionTag;

/// Where the field icons for action tags are hosted.
///
/// Built once at startup and handed to whatever needs to resolve an icon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    pub base_url: String,
    /// Icon path relative to `base_url`, per action tag.
    #[serde(default)]
    pub icons: BTreeMap<ActionTag, String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        let mut icons = BTreeMap::new();
        icons.insert(ActionTag::Press, String::from("icons/press.png"));
        icons.insert(ActionTag::Attack, String::from("icons/attack.png"));
        Self {
            base_url: String::from("/assets"),
            icons,
        }
    }
}

impl AssetsConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read asset config '{}'", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid asset config '{}'", path.display()))
    }

    /// The full URL of the icon for `tag`, if there is one.
    pub fn icon_url(&self, tag: &ActionTag) -> Option<String> {
        let icon = self.icons.get(tag)?;
        Some(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            icon.trim_start_matches('/')
        ))
    }
}
