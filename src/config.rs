use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::linter::options::Setting;

/// Rule settings, keyed by rule name.
///
/// ```toml
/// [rules]
/// final-newline = false
/// rule-style = "* * *"
/// no-missing-blank-lines = { except-tight-lists = true }
/// ```
///
/// Rules without an entry run with their defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub rules: BTreeMap<String, toml::Value>,
}

impl Config {
    pub fn setting(&self, rule: &str) -> Setting {
        Setting::from(self.rules.get(rule))
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn rule(mut self, name: &str, value: toml::Value) -> Self {
        self.config.rules.insert(name.to_string(), value);
        self
    }

    pub fn disable(self, name: &str) -> Self {
        self.rule(name, toml::Value::Boolean(false))
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".stylemark.toml", "stylemark.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    let p = dirs::config_dir()?.join("stylemark").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .stylemark.toml, stylemark.toml
/// 3) user config dir: stylemark/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    if let Some(p) = user_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_rules_table() {
        let cfg = parse_config_str(
            r#"
            [rules]
            final-newline = false
            rule-style = "* * *"
            blockquote-indentation = 2
            no-missing-blank-lines = { except-tight-lists = true }
            heading-increment = true
            "#,
            Path::new("test.toml"),
        )
        .unwrap();

        assert_eq!(cfg.setting("final-newline"), Setting::Off);
        assert_eq!(cfg.setting("heading-increment"), Setting::Default);
        assert_eq!(cfg.setting("rule-style"), Setting::from("* * *"));
        assert_eq!(cfg.setting("blockquote-indentation"), Setting::from(2));
        assert!(matches!(
            cfg.setting("no-missing-blank-lines"),
            Setting::Value(toml::Value::Table(_))
        ));
        assert_eq!(cfg.setting("emphasis-marker"), Setting::Default);
    }

    #[test]
    fn test_empty_config() {
        let cfg = parse_config_str("", Path::new("empty.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_invalid_config_is_invalid_data() {
        let err = parse_config_str("rules = 3", Path::new("bad.toml")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_builder() {
        let cfg = ConfigBuilder::default()
            .disable("final-newline")
            .rule("emphasis-marker", toml::Value::String("_".to_string()))
            .build();
        assert_eq!(cfg.setting("final-newline"), Setting::Off);
        assert_eq!(cfg.setting("emphasis-marker"), Setting::from("_"));
    }

    #[test]
    fn test_load_walks_up_from_start_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs").join("guide");
        fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(".stylemark.toml");
        fs::write(&path, "[rules]\nfinal-newline = false\n").unwrap();

        let (cfg, found) = load(None, &nested).unwrap();
        assert_eq!(found, Some(path));
        assert_eq!(cfg.setting("final-newline"), Setting::Off);
    }

    #[test]
    fn test_load_explicit_path_errors_are_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[rules\n").unwrap();
        assert!(load(Some(&path), dir.path()).is_err());
        assert!(load(Some(&dir.path().join("missing.toml")), dir.path()).is_err());
    }
}
