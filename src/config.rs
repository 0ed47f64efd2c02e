//! User configuration.
//!
//! Settings are read from `config.toml` in the user's config directory (or
//! an explicit `--config` path). Problems with the file never stop a run:
//! they are returned as warnings and the defaults are used instead.
//!
//! ```toml
//! [output]
//! delimiter = "\t"
//! line_ending = "crlf"   # or "lf"
//! leading_blank_line = true
//! ```

use directories::ProjectDirs;
use log::warn;
use minigrid_core::{LineEnding, RenderOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output: Option<OutputSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    delimiter: Option<String>,
    line_ending: Option<String>,
    leading_blank_line: Option<bool>,
}

/// Load render options from the config file.
///
/// `config_file` takes precedence over the default location; the default
/// location is only consulted when `use_default` is set.
pub fn load_config(
    config_file: Option<&PathBuf>,
    use_default: bool,
) -> (RenderOptions, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut options = RenderOptions::default();

    let config_path = config_file
        .cloned()
        .or_else(|| use_default.then(user_config_path).flatten());

    let Some(path) = config_path else {
        return (options, warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (options, warnings);
    }

    if let Some(file) = read_config_file(&path, &mut warnings) {
        apply_config(file, &mut options, &mut warnings);
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    (options, warnings)
}

fn read_config_file(path: &Path, warnings: &mut Vec<String>) -> Option<ConfigFile> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    }
}

fn apply_config(file: ConfigFile, options: &mut RenderOptions, warnings: &mut Vec<String>) {
    let Some(output) = file.output else {
        return;
    };

    if let Some(delimiter) = output.delimiter {
        if delimiter.is_empty() {
            warnings.push("output.delimiter must not be empty, using a tab".to_string());
        } else {
            options.delimiter = delimiter;
        }
    }

    if let Some(line_ending) = output.line_ending {
        match line_ending.trim().to_ascii_lowercase().as_str() {
            "crlf" => options.line_ending = LineEnding::CrLf,
            "lf" => options.line_ending = LineEnding::Lf,
            other => warnings.push(format!(
                "Unknown output.line_ending '{}', expected 'crlf' or 'lf'",
                other
            )),
        }
    }

    if let Some(leading_blank_line) = output.leading_blank_line {
        options.leading_blank_line = leading_blank_line;
    }
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "minigrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(name: &str, content: &str) -> (RenderOptions, Vec<String>) {
        let temp_path = std::env::temp_dir().join(name);
        std::fs::write(&temp_path, content).unwrap();
        let result = load_config(Some(&temp_path), false);
        let _ = std::fs::remove_file(&temp_path);
        result
    }

    #[test]
    fn load_config_defaults_without_file() {
        let (options, warnings) = load_config(None, false);
        assert_eq!(options, RenderOptions::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn load_config_reads_output_section() {
        let (options, warnings) = load_from(
            "minigrid_config_output.toml",
            "[output]\ndelimiter = \",\"\nline_ending = \"LF\"\nleading_blank_line = false\n",
        );
        assert!(warnings.is_empty(), "{:?}", warnings);
        assert_eq!(options.delimiter, ",");
        assert_eq!(options.line_ending, LineEnding::Lf);
        assert!(!options.leading_blank_line);
    }

    #[test]
    fn load_config_keeps_defaults_for_missing_keys() {
        let (options, warnings) = load_from("minigrid_config_partial.toml", "[output]\n");
        assert!(warnings.is_empty());
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn load_config_falls_back_with_warning_on_bad_toml() {
        let (options, warnings) =
            load_from("minigrid_config_bad.toml", "[output\ndelimiter = 1\n");
        assert_eq!(options, RenderOptions::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to parse"));
    }

    #[test]
    fn load_config_rejects_unknown_fields() {
        let (options, warnings) =
            load_from("minigrid_config_unknown.toml", "[output]\ncolour = true\n");
        assert_eq!(options, RenderOptions::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn load_config_warns_on_invalid_values() {
        let (options, warnings) = load_from(
            "minigrid_config_invalid.toml",
            "[output]\ndelimiter = \"\"\nline_ending = \"cr\"\n",
        );
        assert_eq!(options, RenderOptions::default());
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn load_config_rejects_oversized_file() {
        let content = format!("# {}\n", "x".repeat(MAX_CONFIG_FILE_BYTES as usize));
        let (options, warnings) = load_from("minigrid_config_large.toml", &content);
        assert_eq!(options, RenderOptions::default());
        assert!(warnings[0].starts_with("Refusing to read"));
    }

    #[test]
    fn load_config_warns_when_explicit_file_is_missing() {
        let temp_path = std::env::temp_dir().join("minigrid_config_missing.toml");
        let _ = std::fs::remove_file(&temp_path);
        let (options, warnings) = load_config(Some(&temp_path), true);
        assert_eq!(options, RenderOptions::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config file not found"));
    }
}
