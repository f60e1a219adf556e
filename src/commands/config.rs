use crate::config::{self, Config};
use crate::error::LifeError;
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;
    let current = lookup(&value, key).ok_or_else(|| LifeError::UnknownConfigKey {
        key: key.to_string(),
    })?;

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(config: &Config, key: &str, value: &str) -> Result<()> {
    let updated = apply_setting(config, key, value)?;
    let path = config::config_path()?;
    config::save_to_path(&updated, &path)?;

    tracing::info!(key, path = %path.display(), "config updated");
    println!("✓ {} = {}", key, value);
    Ok(())
}

/// Return a copy of `config` with the dotted `key` replaced by `raw`.
///
/// `raw` is read as a TOML scalar (`40`, `true`) and otherwise taken as a
/// string, so `utc` and `%d/%m/%Y` need no quoting.
pub fn apply_setting(config: &Config, key: &str, raw: &str) -> Result<Config> {
    let unknown = || LifeError::UnknownConfigKey {
        key: key.to_string(),
    };

    let mut root = toml::Value::try_from(config).context("Failed to serialize config")?;
    let parts: Vec<&str> = key.split('.').collect();
    let (leaf, parents) = parts.split_last().ok_or_else(unknown)?;

    let mut table = root.as_table_mut().ok_or_else(unknown)?;
    for part in parents {
        table = table
            .get_mut(*part)
            .and_then(toml::Value::as_table_mut)
            .ok_or_else(unknown)?;
    }
    table.insert(leaf.to_string(), parse_scalar(raw));

    let updated: Config = root
        .try_into()
        .with_context(|| format!("Invalid value '{}' for {}", raw, key))?;

    // serde drops unknown fields silently, so check the key survived the round trip.
    let check = serde_json::to_value(&updated).context("Failed to serialize config")?;
    if lookup(&check, key).is_none() {
        return Err(unknown().into());
    }

    updated.validate()?;
    Ok(updated)
}

fn lookup<'a>(value: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    key.split('.').try_fold(value, |current, part| current.get(part))
}

fn parse_scalar(raw: &str) -> toml::Value {
    toml::from_str::<toml::Table>(&format!("value = {}", raw))
        .ok()
        .and_then(|mut table| table.remove("value"))
        .unwrap_or_else(|| toml::Value::String(raw.to_string()))
}
