use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::transform::Markers;

const VALUED_FLAGS: [&str; 2] = ["--fence", "--page-break"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub verbose: bool,
    pub fence: Option<String>,
    pub page_break: Option<String>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            verbose: self.verbose || other.verbose,
            fence: other.fence.clone().or_else(|| self.fence.clone()),
            page_break: other.page_break.clone().or_else(|| self.page_break.clone()),
        }
    }

    /// Rows to insert for code blocks and page breaks, falling back to the
    /// defaults for anything not set.
    pub fn markers(&self) -> Markers {
        let defaults = Markers::default();
        Markers {
            fence: self.fence.clone().unwrap_or(defaults.fence),
            page_break: self.page_break.clone().unwrap_or(defaults.page_break),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("markform").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("markform")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("markform").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("markform").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".markformrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Split one rc line into flag tokens.
///
/// A valued flag owns the rest of its line, so `--page-break * * *` and
/// `--page-break=* * *` both keep the spaces in the value.
fn line_tokens(line: &str) -> Vec<String> {
    for flag in VALUED_FLAGS {
        let Some(rest) = line.strip_prefix(flag) else {
            continue;
        };
        let value = rest
            .strip_prefix('=')
            .or_else(|| rest.starts_with(char::is_whitespace).then_some(rest.trim_start()));
        if let Some(value) = value {
            return vec![format!("{flag}={value}")];
        }
    }
    line.split_whitespace().map(ToOwned::to_owned).collect()
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# markform defaults (saved with --save)".to_string());
    if flags.verbose {
        lines.push("--verbose".to_string());
    }
    if let Some(fence) = &flags.fence {
        lines.push(format!("--fence={fence}"));
    }
    if let Some(page_break) = &flags.page_break {
        lines.push(format!("--page-break={page_break}"));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the config flags out of a command line or rc file.
///
/// Unknown tokens (the action, file name, other options) are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--verbose" || token == "-v" {
            flags.verbose = true;
        } else if token == "--fence" {
            if let Some(next) = tokens.get(i + 1) {
                flags.fence = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--fence=") {
            flags.fence = Some(value.to_string());
        } else if token == "--page-break" {
            if let Some(next) = tokens.get(i + 1) {
                flags.page_break = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--page-break=") {
            flags.page_break = Some(value.to_string());
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "markform".to_string(),
            "code-block".to_string(),
            "--verbose".to_string(),
            "--fence".to_string(),
            "~~~".to_string(),
            "--page-break=***".to_string(),
            "--cursor".to_string(),
            "2:1".to_string(),
            "README.md".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.verbose);
        assert_eq!(flags.fence.as_deref(), Some("~~~"));
        assert_eq!(flags.page_break.as_deref(), Some("***"));
    }

    #[test]
    fn test_config_union_prefers_later_values() {
        let file = ConfigFlags {
            verbose: true,
            fence: Some("~~~".to_string()),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            fence: Some("````".to_string()),
            page_break: Some("***".to_string()),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.verbose);
        assert_eq!(merged.fence.as_deref(), Some("````"));
        assert_eq!(merged.page_break.as_deref(), Some("***"));
    }

    #[test]
    fn test_markers_fall_back_to_defaults() {
        let flags = ConfigFlags {
            fence: Some("~~~".to_string()),
            ..ConfigFlags::default()
        };
        let markers = flags.markers();
        assert_eq!(markers.fence, "~~~");
        assert_eq!(markers.page_break, "-----");
        assert_eq!(ConfigFlags::default().markers(), Markers::default());
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".markformrc");
        let flags = ConfigFlags {
            verbose: true,
            fence: Some("~~~".to_string()),
            page_break: Some("***".to_string()),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
    }

    #[test]
    fn test_saved_values_keep_their_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".markformrc");
        let flags = ConfigFlags {
            verbose: false,
            fence: Some("``` rust".to_string()),
            page_break: Some("* * *".to_string()),
        };

        save_config_flags(&path, &flags).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("--page-break=* * *\n"));
        assert_eq!(load_config_flags(&path).unwrap(), flags);
    }

    #[test]
    fn test_line_tokens() {
        assert_eq!(line_tokens("--page-break * * *"), vec!["--page-break=* * *"]);
        assert_eq!(line_tokens("--page-break=* * *"), vec!["--page-break=* * *"]);
        assert_eq!(line_tokens("--fence ~~~"), vec!["--fence=~~~"]);
        assert_eq!(line_tokens("--verbose --fence"), vec!["--verbose", "--fence"]);
        assert_eq!(line_tokens("--fencepost x"), vec!["--fencepost", "x"]);
    }
}
