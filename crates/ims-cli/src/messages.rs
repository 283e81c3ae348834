//! Operator-facing message catalog.
//!
//! Catalogs are TOML string tables compiled into the binary and parsed once
//! per invocation. Templates use `{key}` placeholders filled by [`render`].

use anyhow::Context;
use serde::Deserialize;

const FALLBACK_LOCALE: &str = "en";

const CATALOGS: &[(&str, &str)] = &[("en", include_str!("../messages/en.toml"))];

#[derive(Clone, Debug, Deserialize)]
pub struct Messages {
    pub start: ActionMessages,
    pub stop: ActionMessages,
    pub profile: ProfileMessages,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ActionMessages {
    pub program: ResourceMessages,
    pub transaction: ResourceMessages,
    pub region: ResourceMessages,
}

/// Spinner text and success line for one leaf command.
#[derive(Clone, Debug, Deserialize)]
pub struct ResourceMessages {
    pub status: String,
    pub success: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfileMessages {
    pub created: String,
}

impl Messages {
    /// Load the catalog for `locale`, falling back to English.
    pub fn load(locale: &str) -> anyhow::Result<Self> {
        let (name, raw) = match CATALOGS.iter().find(|(name, _)| *name == locale) {
            Some(found) => *found,
            None => {
                tracing::warn!(locale, "no message catalog for locale; using {FALLBACK_LOCALE}");
                fallback_catalog()
            }
        };

        toml::from_str(raw).with_context(|| format!("message catalog '{name}' is invalid"))
    }
}

fn fallback_catalog() -> (&'static str, &'static str) {
    CATALOGS
        .iter()
        .copied()
        .find(|(name, _)| *name == FALLBACK_LOCALE)
        .unwrap_or(CATALOGS[0])
}

/// Substitute `{key}` placeholders in `template`.
#[must_use]
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{key}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Messages, render};

    #[test]
    fn english_catalog_parses() {
        let messages = Messages::load("en").expect("catalog should parse");
        assert_eq!(
            messages.stop.transaction.status,
            "Stop transaction defined to IMS"
        );
        assert!(messages.start.region.success.contains("{names}"));
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let messages = Messages::load("xx").expect("fallback should parse");
        assert_eq!(messages.start.program.status, "Start program defined to IMS");
    }

    #[test]
    fn render_fills_placeholders() {
        assert_eq!(
            render("Stopped {names} on {host}", &[("names", "TRAN1, TRAN2"), ("host", "ims1")]),
            "Stopped TRAN1, TRAN2 on ims1"
        );
        assert_eq!(render("no {unknown}", &[]), "no {unknown}");
    }
}
