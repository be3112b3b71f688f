// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files found in
    /// `i18n_dir`. A file from the directory overrides messages of the
    /// embedded locale with the same name and may add new locales.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>> =
            HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                add_source(&mut bundles, locale, source);
            }
        }

        if let Some(dir) = i18n_dir {
            load_directory(&mut bundles, Path::new(&dir));
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn add_source(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    locale: LanguageIdentifier,
    source: String,
) {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            // Keep the entries that did parse.
            eprintln!("Failed to parse {} translations: {:?}", locale, errors);
            resource
        }
    };

    let bundle = bundles.entry(locale.clone()).or_insert_with(|| {
        let mut bundle = FluentBundle::new(vec![locale]);
        bundle.set_use_isolating(false);
        bundle
    });
    bundle.add_resource_overriding(resource);
}

fn load_directory(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    dir: &Path,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Failed to read i18n directory {}: {}", dir.display(), err);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(source) => add_source(bundles, locale, source),
            Err(err) => eprintln!("Failed to read {}: {}", path.display(), err),
        }
    }
}

/// Picks the first available locale among CLI, config and OS preferences.
///
/// A preference matches an available locale exactly, or by language when no
/// exact match exists (`fr-CA` selects `fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| match_available(&wanted, available))
}

fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(wanted) {
        return Some(wanted.clone());
    }
    available
        .iter()
        .find(|locale| locale.language == wanted.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unavailable_cli_language_falls_through_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn region_falls_back_to_language() {
        let lang = match_available(&"fr-CA".parse().unwrap(), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_available() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.tr("header-title"), "3D Model Viewer");
    }

    #[test]
    fn french_translation_is_used() {
        let i18n = I18n::new(Some("fr".into()), None, &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_eq!(i18n.tr("header-title"), "Visionneuse de modèles 3D");
    }

    #[test]
    fn english_viewer_labels() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.tr("controls-reset"), "Reset");
        assert_eq!(i18n.tr("controls-auto-rotate"), "Auto Rotate");
        assert_eq!(i18n.tr("controls-model-url"), "Model URL");
        assert_eq!(i18n.tr("upload-click"), "Click to upload");
        assert_eq!(i18n.tr("upload-drag-drop"), "or drag and drop");
        assert_eq!(
            i18n.tr("preview-empty"),
            "No model uploaded. Click the button below to upload."
        );
    }

    #[test]
    fn french_covers_every_english_message() {
        let english = Asset::get("en-US.ftl").expect("embedded en-US");
        let english = String::from_utf8_lossy(english.data.as_ref()).to_string();
        let french = I18n::new(Some("fr".into()), None, &Config::default());

        for key in english
            .lines()
            .filter_map(|line| line.split_once(" = ").map(|(key, _)| key.trim()))
            .filter(|key| !key.starts_with('#'))
        {
            assert!(
                !french.tr_with_args(key, &[("name", "x"), ("file", "x"), ("error", "x")])
                    .starts_with("MISSING:"),
                "{key}"
            );
        }
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let title = i18n.tr_with_args("window-title-with-file", &[("name", "duck.glb")]);
        assert_eq!(title, "duck.glb - Model Lens");
    }

    #[test]
    fn directory_overrides_embedded_messages() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("en-US.ftl"), "header-title = Custom Viewer\n")
            .expect("write ftl");
        fs::write(dir.path().join("de.ftl"), "header-title = 3D-Modellbetrachter\n")
            .expect("write ftl");

        let dir_str = dir.path().to_string_lossy().to_string();
        let i18n = I18n::new(Some("en-US".into()), Some(dir_str.clone()), &Config::default());
        assert_eq!(i18n.tr("header-title"), "Custom Viewer");
        // Messages absent from the override stay available.
        assert_eq!(i18n.tr("status-title"), "Status");

        let german = I18n::new(Some("de".into()), Some(dir_str), &Config::default());
        assert_eq!(german.tr("header-title"), "3D-Modellbetrachter");
    }

    #[test]
    fn set_locale_ignores_unknown_locales() {
        let mut i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        i18n.set_locale("ja".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }
}
