use crate::Config;
use anyhow::Result;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = "# tessellate configuration\n# Every key is optional, missing keys take their default value.\n\n";

/// # Errors
///
/// Errors if the XDG base directories cannot be resolved or the config directory cannot be
/// created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tessellate")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Loads `config.toml` from the XDG config directory, writing the defaults there on first run.
///
/// # Errors
///
/// Errors if the file cannot be read or written, or if it is not valid toml.
pub fn load_config_file() -> Result<Config> {
    tracing::debug!("Loading config file");
    let config_file = get_default_path()?;
    if config_file.exists() {
        tracing::debug!("Config file '{}' found.", config_file.to_string_lossy());
        load_from_path(&config_file)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(&config_file, &config)?;
        Ok(config)
    }
}

/// # Errors
///
/// Errors if the file cannot be read or is not valid toml.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Like [`load_from_path`], but a broken file is logged and replaced by the defaults.
#[must_use]
pub fn load_or_default(path: &Path) -> Config {
    load_from_path(path)
        .map_err(|err| tracing::error!("Unable to load config {:?}: {:?}", path, err))
        .unwrap_or_default()
}

/// Loads configuration from either specified file (preferred) or default.
///
/// # Errors
///
/// Errors if file cannot be read. Indicates filesystem error
/// (inadequate permissions, disk full, etc.)
/// If a path is specified and does not exist, returns an error.
pub fn check_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_filename = if let Some(fspath) = fspath {
        println!("\x1b[1;35mNote: Using file {fspath} \x1b[0m");
        PathBuf::from(fspath)
    } else {
        return load_config_file();
    };

    if verbose {
        dbg!(&config_filename);
    }
    load_from_path(&config_filename)
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(path: &Path, config: &Config) -> Result<()> {
    let toml = toml::to_string(config)?;
    let mut file = File::create(path)?;
    file.write_all(COMMENT_HEADER.as_bytes())?;
    file.write_all(toml.as_bytes())?;
    Ok(())
}
