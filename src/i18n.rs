use anyhow::{Context, Result};
use std::{collections::HashMap, path::Path, sync::Arc};

/// Translations for one language, keyed by source string.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    messages: Arc<HashMap<String, String>>,
}

impl Catalog {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self {
            messages: Arc::new(messages),
        }
    }

    /// Parse a flat `{"msgid": "msgstr"}` JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::new(messages))
    }

    /// Look up `msgid`, falling back to the source string.
    pub fn gettext(&self, msgid: &str) -> String {
        match self.messages.get(msgid) {
            Some(msgstr) if !msgstr.is_empty() => msgstr.clone(),
            _ => msgid.to_string(),
        }
    }

    pub fn messages(&self) -> &HashMap<String, String> {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Catalogs {
    default_language: String,
    languages: HashMap<String, Catalog>,
}

impl Catalogs {
    pub fn new(default_language: impl AsRef<str>) -> Self {
        Self {
            default_language: language_key(default_language.as_ref()),
            languages: HashMap::new(),
        }
    }

    pub fn insert(&mut self, language: &str, catalog: Catalog) {
        self.languages.insert(language_key(language), catalog);
    }

    /// Load every `<lang>.json` file in `dir`.
    pub fn load_dir(dir: &Path, default_language: &str) -> Result<Self> {
        let mut catalogs = Self::new(default_language);

        if !dir.is_dir() {
            tracing::warn!(
                "Locale directory {} not found, serving source strings",
                dir.display()
            );
            return Ok(catalogs);
        }

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read locale directory {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let catalog = Catalog::from_json(&json)
                .with_context(|| format!("Invalid catalog {}", path.display()))?;

            tracing::info!("Loaded {} messages for '{}'", catalog.len(), language);
            catalogs.insert(language, catalog);
        }

        Ok(catalogs)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn get(&self, language: &str) -> Option<&Catalog> {
        self.languages.get(&language_key(language))
    }

    /// Pick the best language and catalog for an `Accept-Language` header
    /// value. Without any match this is the default language with an empty
    /// catalog, so lookups return source strings.
    pub fn negotiate(&self, accept_language: Option<&str>) -> (String, Catalog) {
        let requested = accept_language.map(parse_accept_language).unwrap_or_default();

        requested
            .iter()
            .find_map(|tag| {
                self.entry(tag).or_else(|| {
                    let primary = tag.split('-').next()?;
                    self.entry(primary)
                })
            })
            .or_else(|| self.entry(&self.default_language))
            .map(|(language, catalog)| (language.clone(), catalog.clone()))
            .unwrap_or_else(|| (self.default_language.clone(), Catalog::default()))
    }

    fn entry(&self, language: &str) -> Option<(&String, &Catalog)> {
        self.languages.get_key_value(&language_key(language))
    }
}

/// `es_MX`, `ES-mx` and `es-mx` all name the same catalog.
fn language_key(language: &str) -> String {
    language.trim().to_lowercase().replace('_', "-")
}

/// Language tags from an `Accept-Language` header, best first.
fn parse_accept_language(header: &str) -> Vec<String> {
    let mut tags: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = language_key(pieces.next()?);
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .find_map(|param| param.trim().strip_prefix("q="))
                .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())?;
            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    // sort_by is stable, ties keep header order
    tags.sort_by(|a, b| b.1.total_cmp(&a.1));
    tags.into_iter().map(|(tag, _)| tag).collect()
}
