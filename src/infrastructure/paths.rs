//! Per-user locations for configuration and trace output.
//!
//! Follows the XDG base directory convention: `$XDG_CONFIG_HOME` and
//! `$XDG_DATA_HOME` when set to absolute paths, otherwise `~/.config` and
//! `~/.local/share`. Without a home directory everything falls back to a
//! `.product-manager` directory under the working directory.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "product-manager";

/// Directory holding `config.toml`.
#[must_use]
pub fn config_dir() -> PathBuf {
    resolve_dir(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"), ".config")
}

/// Directory receiving the OTLP trace file.
#[must_use]
pub fn data_dir() -> PathBuf {
    resolve_dir(env::var_os("XDG_DATA_HOME"), env::var_os("HOME"), ".local/share")
}

fn resolve_dir(xdg: Option<OsString>, home: Option<OsString>, home_relative: &str) -> PathBuf {
    let xdg = xdg.map(PathBuf::from).filter(|path| path.is_absolute());
    if let Some(base) = xdg {
        return base.join(APP_DIR);
    }

    match home.filter(|home| !home.is_empty()) {
        Some(home) => Path::new(&home).join(home_relative).join(APP_DIR),
        None => PathBuf::from(format!(".{APP_DIR}")),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or any path when `HOME` is unset, come back as
/// given.
///
/// ```
/// use product_manager::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/etc/themes/dark.toml"), PathBuf::from("/etc/themes/dark.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, env::var_os("HOME"))
}

fn expand_with_home(path: &str, home: Option<OsString>) -> PathBuf {
    let Some(home) = home.filter(|home| !home.is_empty()) else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        Path::new(&home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_variable_wins_when_absolute() {
        let dir = resolve_dir(Some("/xdg/config".into()), Some("/home/ana".into()), ".config");
        assert_eq!(dir, PathBuf::from("/xdg/config/product-manager"));

        let dir = resolve_dir(Some("relative".into()), Some("/home/ana".into()), ".config");
        assert_eq!(dir, PathBuf::from("/home/ana/.config/product-manager"));
    }

    #[test]
    fn falls_back_to_home_then_working_directory() {
        let dir = resolve_dir(None, Some("/home/ana".into()), ".local/share");
        assert_eq!(dir, PathBuf::from("/home/ana/.local/share/product-manager"));
        assert_eq!(resolve_dir(None, None, ".config"), PathBuf::from(".product-manager"));
    }

    #[test]
    fn tilde_expansion() {
        let home = || Some(OsString::from("/home/ana"));
        assert_eq!(expand_with_home("~/themes/x.toml", home()), PathBuf::from("/home/ana/themes/x.toml"));
        assert_eq!(expand_with_home("~", home()), PathBuf::from("/home/ana"));
        assert_eq!(expand_with_home("~other/x", home()), PathBuf::from("~other/x"));
        assert_eq!(expand_with_home("~/x", None), PathBuf::from("~/x"));
    }
}
