use crate::commands::{CmdMessage, CmdResult};
use crate::config::NotesConfig;
use crate::error::Result;
use std::path::Path;

pub const KEYS: [&str; 2] = ["storage-key", "export-dir"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = NotesConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if !KEYS.contains(&key.as_str()) {
                result.add_message(CmdMessage::warning(unknown_key(&key)));
            }
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "storage-key" => config.set_storage_key(&value)?,
                "export-dir" => config.set_export_dir(&value),
                _ => {
                    result.add_message(CmdMessage::warning(unknown_key(&key)));
                    return Ok(result.with_config(config));
                }
            }
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to '{}'", key, value)));
        }
    }

    Ok(result.with_config(config))
}

fn unknown_key(key: &str) -> String {
    format!("Unknown config key: {} (known: {})", key, KEYS.join(", "))
}
