use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::document::Bridge;
use crate::style::ColorScheme;

/// Environment variable that forces the platform color scheme.
pub const THEME_ENV: &str = "WRAPVIEW_THEME";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    const fn as_flag(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Platform color scheme for this mode, consulting the environment for `Auto`.
    pub fn color_scheme(self) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::Auto => detect_color_scheme(
                std::env::var(THEME_ENV).ok().as_deref(),
                std::env::var("COLORFGBG").ok().as_deref(),
            ),
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeMode {
    /// React Native style `window.ReactNativeWebView`
    Native,
    /// Iframe host via `window.parent`
    Parent,
}

impl BridgeMode {
    const fn as_flag(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Parent => "parent",
        }
    }
}

impl From<BridgeMode> for Bridge {
    fn from(mode: BridgeMode) -> Self {
        match mode {
            BridgeMode::Native => Self::NativeWebView,
            BridgeMode::Parent => Self::ParentFrame,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub rtl: bool,
    pub no_dark_mode: bool,
    pub theme: Option<ThemeMode>,
    pub bridge: Option<BridgeMode>,
    pub api_url: Option<String>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            rtl: self.rtl || other.rtl,
            no_dark_mode: self.no_dark_mode || other.no_dark_mode,
            theme: other.theme.or(self.theme),
            bridge: other.bridge.or(self.bridge),
            api_url: other.api_url.clone().or_else(|| self.api_url.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("wrapview").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("wrapview")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("wrapview").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("wrapview")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".wrapviewrc")
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
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# wrapview defaults (saved with --save)".to_string()];
    if flags.watch {
        lines.push("--watch".to_string());
    }
    if flags.rtl {
        lines.push("--rtl".to_string());
    }
    if flags.no_dark_mode {
        lines.push("--no-dark-mode".to_string());
    }
    if let Some(theme) = flags.theme {
        lines.push(format!("--theme {}", theme.as_flag()));
    }
    if let Some(bridge) = flags.bridge {
        lines.push(format!("--bridge {}", bridge.as_flag()));
    }
    if let Some(url) = &flags.api_url {
        lines.push(format!("--api-url {url}"));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
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

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--watch" | "-w" => flags.watch = true,
            "--rtl" => flags.rtl = true,
            "--no-dark-mode" => flags.no_dark_mode = true,
            "--theme" | "--bridge" | "--api-url" => {
                if let Some(next) = tokens.get(i + 1) {
                    apply_valued_flag(&mut flags, token, next);
                    i += 1;
                }
            }
            _ => {
                if let Some((name, value)) = token.split_once('=') {
                    apply_valued_flag(&mut flags, name, value);
                }
            }
        }
        i += 1;
    }
    flags
}

fn apply_valued_flag(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--theme" => flags.theme = parse_theme(value),
        "--bridge" => flags.bridge = parse_bridge(value),
        "--api-url" => flags.api_url = Some(value.to_string()),
        _ => {}
    }
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

fn parse_bridge(s: &str) -> Option<BridgeMode> {
    match s {
        "native" => Some(BridgeMode::Native),
        "parent" => Some(BridgeMode::Parent),
        _ => None,
    }
}

/// Guess the platform color scheme from `WRAPVIEW_THEME`, then `COLORFGBG`.
///
/// `COLORFGBG` is `fg;bg` (sometimes `fg;x;bg`); a background index of 7 or
/// above is a light terminal. Anything unrecognized is light.
pub fn detect_color_scheme(theme_env: Option<&str>, colorfgbg: Option<&str>) -> ColorScheme {
    match theme_env.map(str::trim) {
        Some(value) if value.eq_ignore_ascii_case("dark") => return ColorScheme::Dark,
        Some(value) if value.eq_ignore_ascii_case("light") => return ColorScheme::Light,
        _ => {}
    }

    let Some(value) = colorfgbg else {
        return ColorScheme::Light;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    match bg_str.parse::<u8>() {
        Ok(bg) if bg < 7 => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}
