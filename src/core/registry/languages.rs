//! Per-language default models

use serde::{Deserialize, Serialize};

/// A language and the model that handles it best
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Language identifier, e.g. `python`
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// File extensions without the leading dot
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Default model id
    pub model: String,
}

impl LanguageProfile {
    pub fn new(id: &str, name: &str, extensions: &[&str], model: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
            model: model.to_string(),
        }
    }
}

/// Lookup table from extension or language id to a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    profiles: Vec<LanguageProfile>,
}

impl LanguageTable {
    pub fn new(profiles: Vec<LanguageProfile>) -> Self {
        Self { profiles }
    }

    /// Built-in profiles
    pub fn builtin() -> Self {
        Self::new(builtin_profiles())
    }

    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    /// Find a profile by extension; case-insensitive, leading dot optional
    pub fn by_extension(&self, extension: &str) -> Option<&LanguageProfile> {
        let normalized = extension.trim_start_matches('.').to_lowercase();
        self.profiles.iter().find(|profile| {
            profile
                .extensions
                .iter()
                .any(|ext| ext.to_lowercase() == normalized)
        })
    }

    /// Find a profile from a file name
    ///
    /// The extension is everything after the last `.`, or the whole name when
    /// there is none (so `Dockerfile` resolves).
    pub fn by_filename(&self, filename: &str) -> Option<&LanguageProfile> {
        let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
        let extension = base.rsplit('.').next().unwrap_or(base);
        if extension.is_empty() {
            return None;
        }
        self.by_extension(extension)
    }

    /// Find a profile by exact language id
    pub fn by_id(&self, id: &str) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in language profiles
pub fn builtin_profiles() -> Vec<LanguageProfile> {
    vec![
        LanguageProfile::new(
            "python",
            "Python",
            &["py", "pyw", "pyc", "pyo", "pyd", "ipynb"],
            "gpt-4",
        ),
        LanguageProfile::new("javascript", "JavaScript", &["js", "jsx", "mjs", "cjs"], "gpt-4o"),
        LanguageProfile::new("typescript", "TypeScript", &["ts", "tsx", "d.ts"], "gpt-4o"),
        LanguageProfile::new("bash", "Bash", &["sh", "bash", "zsh", "fish"], "claude"),
        LanguageProfile::new("sql", "SQL", &["sql", "ddl", "dml"], "mistral"),
        LanguageProfile::new("html", "HTML", &["html", "htm", "xhtml"], "gemini-vision"),
        LanguageProfile::new("css", "CSS", &["css", "scss", "sass", "less"], "gemini-vision"),
        LanguageProfile::new("dockerfile", "Docker", &["dockerfile"], "claude"),
    ]
}
