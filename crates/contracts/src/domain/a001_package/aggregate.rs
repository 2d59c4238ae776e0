use serde::{Deserialize, Serialize};

/// Package (role or collection) published in the repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub namespace: String,
    pub name: String,
    pub description: String,
    pub download_count: u64,
    /// Supported platforms, e.g. "Ubuntu", "EL"
    #[serde(default)]
    pub platforms: Vec<String>,
    /// ISO date of the last import, e.g. "2018-03-15T14:02:26Z"
    pub modified: String,
}

impl Package {
    /// Fully qualified name: `namespace.name`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    pub fn supports_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p.eq_ignore_ascii_case(platform))
    }
}
