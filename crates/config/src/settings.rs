use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use mindsum_core::ProviderKind;

/// Per-vendor credentials and model choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorSettings {
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for VendorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: String::new(),
        }
    }
}

/// Persisted user settings. Loaded once per invocation; per-call overrides
/// compose into a fresh value via [`Settings::with_overrides`]; the base is
/// never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which vendor handles the next generation.
    pub provider: ProviderKind,
    pub openai: VendorSettings,
    pub anthropic: VendorSettings,
    pub gemini: VendorSettings,
    pub grok: VendorSettings,
    /// Target language for all generated labels.
    pub language: String,
    /// Per-request completion token cap.
    pub max_tokens: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            openai: VendorSettings {
                api_key: None,
                model: "gpt-4o-mini".to_string(),
            },
            anthropic: VendorSettings {
                api_key: None,
                model: "claude-3-5-sonnet-20241022".to_string(),
            },
            gemini: VendorSettings {
                api_key: None,
                model: "gemini-2.0-flash".to_string(),
            },
            grok: VendorSettings {
                api_key: None,
                model: "grok-2-latest".to_string(),
            },
            language: "Korean".to_string(),
            max_tokens: 2048,
        }
    }
}

/// Per-invocation choices layered over the persisted settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
    pub language: Option<String>,
}

impl Settings {
    /// Load settings from the user config file (if present), then apply
    /// environment variables on top.
    pub fn load() -> Result<Self> {
        let mut settings = match Self::config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading settings file");
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            _ => Settings::default(),
        };
        settings.apply_env(&std::env::vars().collect());
        settings.fill_default_models();
        Ok(settings)
    }

    /// A vendor section that sets only an API key leaves its model blank;
    /// backfill the shipped default so the section stays minimal.
    pub fn fill_default_models(&mut self) {
        let defaults = Settings::default();
        for kind in ProviderKind::ALL {
            if self.vendor(kind).model.is_empty() {
                self.vendor_mut(kind).model = defaults.vendor(kind).model.clone();
            }
        }
    }

    /// Default settings file location: `<config dir>/mindsum/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mindsum").join("config.toml"))
    }

    /// Overlay environment variables. API keys use the vendors' conventional
    /// names; everything else is prefixed `MINDSUM_`.
    pub fn apply_env(&mut self, env: &HashMap<String, String>) {
        let non_empty = |key: &str| env.get(key).filter(|v| !v.is_empty()).cloned();

        if let Some(key) = non_empty("OPENAI_API_KEY") {
            self.openai.api_key = Some(key);
        }
        if let Some(key) = non_empty("ANTHROPIC_API_KEY") {
            self.anthropic.api_key = Some(key);
        }
        if let Some(key) = non_empty("GEMINI_API_KEY") {
            self.gemini.api_key = Some(key);
        }
        if let Some(key) = non_empty("GROK_API_KEY") {
            self.grok.api_key = Some(key);
        }
        if let Some(provider) = non_empty("MINDSUM_PROVIDER") {
            if let Ok(kind) = provider.parse() {
                self.provider = kind;
            }
        }
        if let Some(language) = non_empty("MINDSUM_LANGUAGE") {
            self.language = language;
        }
        if let Some(tokens) = non_empty("MINDSUM_MAX_TOKENS").and_then(|v| v.parse().ok()) {
            self.max_tokens = tokens;
        }
    }

    /// Compose a fresh settings value with per-call overrides applied. The
    /// model override targets whichever provider ends up selected.
    pub fn with_overrides(&self, overrides: &Overrides) -> Settings {
        let mut next = self.clone();
        if let Some(provider) = overrides.provider {
            next.provider = provider;
        }
        if let Some(model) = &overrides.model {
            next.vendor_mut(next.provider).model = model.clone();
        }
        if let Some(language) = &overrides.language {
            next.language = language.clone();
        }
        next
    }

    pub fn vendor(&self, kind: ProviderKind) -> &VendorSettings {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::Grok => &self.grok,
        }
    }

    fn vendor_mut(&mut self, kind: ProviderKind) -> &mut VendorSettings {
        match kind {
            ProviderKind::OpenAi => &mut self.openai,
            ProviderKind::Anthropic => &mut self.anthropic,
            ProviderKind::Gemini => &mut self.gemini,
            ProviderKind::Grok => &mut self.grok,
        }
    }
}
