//! Message catalog loader.
//!
//! A language resource is read from `<lang_dir>/<code>.toml` on disk, or from
//! the copy embedded in this crate. Lookups go key by key through the
//! requested language, then English, then a minimal built-in set, and finally
//! render the key itself.

use std::collections::HashMap;
use std::path::Path;

use portal_core::{MessageArg, MessageKey};

use crate::language::{Language, format_message};
use crate::loaders::LoadResult;

const EMBEDDED_EN: &str = include_str!("../../lang/en.toml");
const EMBEDDED_JA: &str = include_str!("../../lang/ja.toml");

const MINIMAL: &[(MessageKey, &str)] = &[(MessageKey::NoPermission, "You do not have permission.")];

type Messages = HashMap<String, String>;

/// Rendered-text lookup for one language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageCatalog {
    language: Language,
    /// Searched front to back; the first layer holding a key wins.
    layers: Vec<Messages>,
}

impl MessageCatalog {
    /// Loads `language`, preferring files in `lang_dir` over the embedded
    /// resources. Never fails.
    pub fn load(language: Language, lang_dir: Option<&Path>) -> Self {
        let mut catalog = Self::from_sources(language, |lang| {
            lang_dir
                .map(|dir| dir.join(format!("{}.toml", lang.code())))
                .filter(|path| path.is_file())
                .and_then(|path| std::fs::read_to_string(&path).ok())
                .or_else(|| embedded(lang).map(str::to_owned))
        });
        // A disk en.toml may be partial or broken; the bundled copy backs it.
        if lang_dir.is_some()
            && let Ok(messages) = parse_messages(EMBEDDED_EN)
        {
            catalog.layers.push(messages);
        }
        catalog
    }

    pub fn embedded(language: Language) -> Self {
        Self::from_sources(language, |lang| embedded(lang).map(str::to_owned))
    }

    /// Builds a catalog from an arbitrary resource lookup, applying the
    /// fallback chain.
    pub fn from_sources<F>(language: Language, source: F) -> Self
    where
        F: Fn(Language) -> Option<String>,
    {
        let mut layers = Vec::with_capacity(2);
        let requested = load_layer(language, &source);
        let resolved = if requested.is_some() {
            language
        } else {
            Language::En
        };
        layers.extend(requested);

        if language != Language::En {
            if resolved == Language::En {
                tracing::warn!("Falling back to {}", Language::En);
            }
            layers.extend(load_layer(Language::En, &source));
        }

        if layers.is_empty() {
            tracing::error!("English language resource is missing! Using minimal defaults.");
        }
        Self {
            language: resolved,
            layers,
        }
    }

    /// Built-in last-resort catalog.
    pub fn minimal() -> Self {
        Self {
            language: Language::En,
            layers: Vec::new(),
        }
    }

    /// Language the messages actually came from.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Raw template for `key`, or the key itself when no layer has it.
    pub fn template<'a>(&'a self, key: &'a str) -> &'a str {
        self.layers
            .iter()
            .find_map(|layer| layer.get(key).map(String::as_str))
            .or_else(|| {
                MINIMAL
                    .iter()
                    .find(|(candidate, _)| <MessageKey as AsRef<str>>::as_ref(candidate) == key)
                    .map(|(_, text)| *text)
            })
            .unwrap_or(key)
    }

    pub fn render(&self, key: MessageKey, args: &[MessageArg]) -> String {
        format_message(self.template(key.as_ref()), args)
    }
}

fn load_layer<F>(language: Language, source: &F) -> Option<Messages>
where
    F: Fn(Language) -> Option<String>,
{
    match source(language).map(|text| parse_messages(&text)) {
        Some(Ok(messages)) => Some(messages),
        Some(Err(e)) => {
            tracing::warn!("Language resource {} is invalid: {}", language, e);
            None
        }
        None => {
            tracing::warn!("Language resource {} not found", language);
            None
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::embedded(Language::En)
    }
}

fn embedded(language: Language) -> Option<&'static str> {
    match language {
        Language::En => Some(EMBEDDED_EN),
        Language::Ja => Some(EMBEDDED_JA),
    }
}

/// Flat `KEY = "text"` table. Non-string values are skipped.
fn parse_messages(text: &str) -> LoadResult<Messages> {
    let table: toml::Table = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse language TOML: {}", e))?;
    Ok(table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect())
}
