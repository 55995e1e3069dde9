use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Resolve the configuration directory, ensuring it exists.
///
/// Inputs:
/// - `override_dir`: Directory given with `--config-dir`, if any
///
/// Output:
/// - The override when given, else `$HOME/.config/dinescout`, else
///   `$XDG_CONFIG_HOME/dinescout`
///
/// Details:
/// - Creation failures are ignored; later reads and writes report them.
#[must_use]
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        let _ = std::fs::create_dir_all(dir);
        return dir.to_path_buf();
    }
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("dinescout");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("dinescout");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under the config directory (ensured to exist).
#[must_use]
pub fn logs_dir(config_dir: &Path) -> PathBuf {
    let dir = config_dir.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Location of `settings.conf` inside the config directory.
#[must_use]
pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.conf")
}
