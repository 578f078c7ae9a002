use crate::commands::{CmdMessage, CmdResult};
use crate::config::{FolioConfig, CONFIG_KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config.json`. Invalid keys and values come back as
/// error messages; only I/O and parse failures are `Err`.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = FolioConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => result.add_message(unknown_key(&key)),
        },
        ConfigAction::Set(key, value) => {
            let Some(previous) = config.get(&key) else {
                result.add_message(unknown_key(&key));
                return Ok(result);
            };
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;

            let current = config.get(&key).unwrap_or(value);
            log::debug!("Config {} changed from {} to {}", key, previous, current);
            result.add_message(CmdMessage::success(format!(
                "{} set to {} (was {})",
                key, current, previous
            )));
        }
    }
    Ok(result.with_config(config))
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_show_key_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("quality".into(), "70".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "quality set to 70 (was 80)");

        let result = run(dir.path(), ConfigAction::ShowKey("quality".into())).unwrap();
        assert_eq!(result.messages[0].content, "70");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("page-size".into(), "none".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(FolioConfig::default()));
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("flavour".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("page-size"));

        let result = run(dir.path(), ConfigAction::Set("flavour".into(), "1".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(!dir.path().join("config.json").exists());
    }
}
