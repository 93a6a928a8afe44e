//! # Category Table
//!
//! Static educational context keyed by topic category
//! (e.g. "Climate Change", "Pollution"). Each entry carries an explanation,
//! an impact statement and an awareness tip shown next to a news item.
//!
//! - Loads from JSON config (`default_key` + `categories`).
//! - Falls back to a built-in `default_seed()` when no usable config exists.
//! - Always holds an entry for `default_key`; lookups never come back empty.
//!
//! Built once at startup and shared read-only behind an `Arc`.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, env, fs, path::Path};
use tracing::warn;

pub const DEFAULT_CATEGORIES_CONFIG_PATH: &str = "config/categories.json";
pub const ENV_CATEGORIES_CONFIG_PATH: &str = "CATEGORIES_CONFIG_PATH";

/// Key inferred for titles mentioning climate.
pub const CLIMATE_KEY: &str = "Climate Change";
/// Key inferred for everything else.
pub const REGIONAL_KEY: &str = "India/Wildlife";
/// Designated fallback bucket of the built-in seed.
pub const GENERAL_KEY: &str = "General";

/// Educational text attached to a news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub explanation: String,
    pub impact: String,
    pub tip: String,
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    default_key: String,
    categories: HashMap<String, Enrichment>,
}

#[derive(Debug, Clone)]
pub struct CategoryTable {
    default_key: String,
    entries: HashMap<String, Enrichment>,
}

impl CategoryTable {
    /// Build a table. Fails when `default_key` has no entry.
    pub fn new(default_key: impl Into<String>, entries: HashMap<String, Enrichment>) -> Result<Self> {
        let default_key = default_key.into();
        if !entries.contains_key(&default_key) {
            return Err(anyhow!("default category '{default_key}' has no entry"));
        }
        Ok(Self {
            default_key,
            entries,
        })
    }

    /// Load from a JSON file.
    /// Falls back to `default_seed()` on any error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|s| Self::from_json(&s));
        match parsed {
            Ok(t) => t,
            Err(e) => {
                if path.exists() {
                    warn!(error = ?e, path = %path.display(), "category config unusable, using built-in seed");
                }
                Self::default_seed()
            }
        }
    }

    /// `$CATEGORIES_CONFIG_PATH`, else `config/categories.json`, else the seed.
    pub fn load_default() -> Self {
        let path = env::var(ENV_CATEGORIES_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CATEGORIES_CONFIG_PATH.to_string());
        Self::load_from_file(path)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let f: CategoryFile = serde_json::from_str(s)?;
        Self::new(f.default_key, f.categories)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Entry for `key`, or the default entry when the key is unknown.
    pub fn lookup(&self, key: &str) -> &Enrichment {
        self.entries
            .get(key)
            .or_else(|| self.entries.get(&self.default_key))
            .unwrap_or_else(|| unreachable!("constructor guarantees a default entry"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Built-in seed covering the curated feed labels.
    pub fn default_seed() -> Self {
        let mut entries = HashMap::new();

        for (key, explanation, impact, tip) in [
            (
                CLIMATE_KEY,
                "Climate change is the long-term shift in temperatures and weather patterns, driven mainly by greenhouse gases released when we burn fossil fuels.",
                "Rising temperatures intensify heatwaves, floods and droughts, threatening food security, water supplies and coastal communities.",
                "Cut your carbon footprint: choose public transport, save electricity and support clean energy policies.",
            ),
            (
                "Green Tech",
                "Green technology covers innovations that reduce environmental harm, from solar panels and batteries to low-carbon materials.",
                "Clean technologies lower emissions and pollution while creating new jobs and making sustainable choices affordable.",
                "Look for energy-efficient appliances and share reliable information about clean technology with your community.",
            ),
            (
                REGIONAL_KEY,
                "India is home to a vast share of the world's biodiversity, from Himalayan forests to coastal mangroves and tiger reserves.",
                "Habitat loss, poaching and urban expansion push many native species toward extinction and disturb fragile ecosystems.",
                "Support local conservation groups, avoid products from endangered species and respect protected areas when you travel.",
            ),
            (
                "Pollution",
                "Pollution is the release of harmful substances into air, water and soil, from vehicle exhaust and industry to plastic waste.",
                "Polluted air and water cause respiratory illness, contaminate food chains and damage ecosystems for decades.",
                "Reduce single-use plastics, segregate your waste and report illegal dumping or burning to local authorities.",
            ),
            (
                GENERAL_KEY,
                "Environmental news helps us understand how human activity and natural systems shape each other.",
                "Informed communities make better decisions about energy, waste, water and land use.",
                "Stay curious: read widely, verify sources and discuss what you learn with friends and family.",
            ),
        ] {
            entries.insert(
                key.to_string(),
                Enrichment {
                    explanation: explanation.to_string(),
                    impact: impact.to_string(),
                    tip: tip.to_string(),
                },
            );
        }

        Self {
            default_key: GENERAL_KEY.to_string(),
            entries,
        }
    }
}
