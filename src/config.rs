use crate::form::ResumeTemplate;
use crate::scene::Theme;
use log::Level;

/// Which page the bundle is mounted into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    ResumeEditor,
    PortfolioEditor,
    PortfolioView,
}

impl Page {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "resume-editor" => Some(Page::ResumeEditor),
            "portfolio-editor" => Some(Page::PortfolioEditor),
            "portfolio-view" => Some(Page::PortfolioView),
            _ => None,
        }
    }
}

/// Page configuration, taken from `data-*` attributes on `<body>`
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub page: Page,
    pub template: ResumeTemplate,
    pub theme: Theme,
    /// Prefix for API paths; empty means same origin
    pub api_base: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page: Page::default(),
            template: ResumeTemplate::default(),
            theme: Theme::default(),
            api_base: String::new(),
            log_level: Level::Info,
        }
    }
}

impl AppConfig {
    /// Build from a dataset lookup keyed by camelCase names (`apiBase` for `data-api-base`)
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_dataset(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let page = get("page").map(|v| (Page::parse(&v), v));
        let template = get("template").map(|v| (ResumeTemplate::parse(&v), v));
        let level = get("logLevel").map(|v| (v.trim().parse::<Level>().ok(), v));

        Self {
            page: match page {
                Some((Some(page), _)) => page,
                Some((None, raw)) => {
                    log::warn!("Unknown page '{}', using the resume editor", raw);
                    defaults.page
                }
                None => defaults.page,
            },
            template: match template {
                Some((Some(template), _)) => template,
                Some((None, raw)) => {
                    log::warn!("Unknown template '{}', using professional", raw);
                    defaults.template
                }
                None => defaults.template,
            },
            theme: get("theme")
                .map(|v| Theme::parse(&v))
                .unwrap_or(defaults.theme),
            api_base: get("apiBase")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            log_level: match level {
                Some((Some(level), _)) => level,
                _ => defaults.log_level,
            },
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Self {
        let dataset = gloo_utils::body().dataset();
        Self::from_dataset(|key| dataset.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_dataset(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_empty() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().theme, Theme::Modern);
        assert_eq!(AppConfig::default().log_level, Level::Info);
    }

    #[test]
    fn test_reads_all_attributes() {
        let cfg = config(&[
            ("page", "portfolio-editor"),
            ("template", "technical"),
            ("theme", "creative"),
            ("apiBase", "https://api.example.com/"),
            ("logLevel", "debug"),
        ]);
        assert_eq!(cfg.page, Page::PortfolioEditor);
        assert_eq!(cfg.template, ResumeTemplate::Technical);
        assert_eq!(cfg.theme, Theme::Creative);
        assert_eq!(cfg.api_base, "https://api.example.com");
        assert_eq!(cfg.log_level, Level::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = config(&[("page", "dashboard"), ("template", "fancy"), ("logLevel", "loud")]);
        assert_eq!(cfg.page, Page::ResumeEditor);
        assert_eq!(cfg.template, ResumeTemplate::Professional);
        assert_eq!(cfg.log_level, Level::Info);
    }
}
