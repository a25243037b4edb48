use std::env::VarError;

use hashkit_lib::Algorithm;
use json::JsonValue;
use log::{info, warn};

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha256,
            json: false,
        }
    }
}

impl Config {
    pub fn from_json(value: &JsonValue) -> Config {
        let mut config = Config::default();

        if let Some(name) = value["algorithm"].as_str() {
            match name.parse::<Algorithm>() {
                Ok(algorithm) => config.algorithm = algorithm,
                Err(error) => warn!("ignoring config algorithm: {}", error),
            }
        }

        if let Some(json) = value["json"].as_bool() {
            config.json = json;
        }

        config
    }
}

fn get_config_dir() -> Result<std::path::PathBuf, VarError> {
    #[cfg(unix)]
    let app_data = std::env::var("HOME")? + "/.config";

    #[cfg(windows)]
    let app_data = std::env::var("APPDATA")?;

    let mut path = std::path::PathBuf::from(app_data);
    path.push("hashkit");

    Ok(path)
}

fn get_config_file() -> Result<std::path::PathBuf, VarError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.json");

    Ok(config_dir)
}

pub fn get_config() -> Config {
    let file = match get_config_file() {
        Ok(file) => file,
        Err(error) => {
            warn!("failed to get config: {}", error);
            return Config::default();
        }
    };

    if !file.exists() {
        return Config::default();
    }

    info!("reading from file \"{}\"", file.display());

    let contents = match std::fs::read_to_string(&file) {
        Ok(contents) => contents,
        Err(error) => {
            warn!("failed to get config: {}", error);
            return Config::default();
        }
    };

    match json::parse(contents.as_str()) {
        Ok(parsed) => Config::from_json(&parsed),
        Err(error) => {
            warn!("failed to parse config: {}", error);
            Config::default()
        }
    }
}
