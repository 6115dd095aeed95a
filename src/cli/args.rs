//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortKey, ConfigSortOrder, FILE_ENV};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Smallest first
    Asc,
    /// Largest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortKey {
    /// By subject name
    Subject,
    /// By weekly total (default)
    #[default]
    Total,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "studytime")]
#[command(about = "Study session timer with a weekly per-subject summary", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Session log file (default: <data dir>/studytime/sessions.txt)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Plain text lines instead of tables
    #[arg(short, long, global = true)]
    pub(crate) plain: bool,

    /// Summary row ordering
    #[arg(long, global = true, value_enum, default_value = "total")]
    pub(crate) sort: SortKey,

    /// Sort direction (default: desc for totals, asc for subjects)
    #[arg(short, long, global = true, value_enum)]
    pub(crate) order: Option<SortOrder>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone for displaying session end times (e.g., "UTC", "Europe/Berlin")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.plain && config.plain {
            self.plain = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Enum values only apply while the CLI is at its default
        if config.sort == Some(ConfigSortKey::Subject) && self.sort == SortKey::Total {
            self.sort = SortKey::Subject;
        }
        if self.order.is_none() {
            self.order = config.order.map(|o| match o {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            });
        }
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // Path: --file, then $STUDYTIME_FILE, then config
        if self.file.is_none() {
            self.file = std::env::var_os(FILE_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .or_else(|| config.file.clone());
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Effective sort direction for the chosen key
    pub(crate) fn sort_order(&self) -> SortOrder {
        self.order.unwrap_or(match self.sort {
            SortKey::Subject => SortOrder::Asc,
            SortKey::Total => SortOrder::Desc,
        })
    }

    pub(crate) fn sessions_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(Config::default_sessions_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["studytime"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.sort, SortKey::Total);
        assert_eq!(cli.sort_order(), SortOrder::Desc);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn subject_sort_defaults_to_ascending() {
        let cli = parse(&["--sort", "subject"]);
        assert_eq!(cli.sort_order(), SortOrder::Asc);
        let cli = parse(&["--sort", "subject", "-o", "desc"]);
        assert_eq!(cli.sort_order(), SortOrder::Desc);
    }

    #[test]
    fn no_color_wins() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
        let cli = parse(&["--color", "always"]);
        assert!(cli.use_color());
    }

    #[test]
    fn config_fills_unset_values() {
        let config: Config = toml::from_str(
            r#"
            file = "/data/sessions.txt"
            sort = "subject"
            color = "never"
            timezone = "UTC"
            plain = true
            "#,
        )
        .unwrap();
        let cli = parse(&["summary"]).with_config(&config);
        assert!(cli.plain);
        assert_eq!(cli.sort, SortKey::Subject);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        if std::env::var_os(FILE_ENV).is_none() {
            assert_eq!(cli.sessions_path(), PathBuf::from("/data/sessions.txt"));
        }
    }

    #[test]
    fn cli_values_beat_config() {
        let config: Config = toml::from_str(
            r#"
            file = "/data/sessions.txt"
            order = "asc"
            timezone = "UTC"
            "#,
        )
        .unwrap();
        let cli = parse(&["-f", "/mine.txt", "-o", "desc", "--timezone", "Asia/Tokyo"])
            .with_config(&config);
        assert_eq!(cli.sessions_path(), PathBuf::from("/mine.txt"));
        assert_eq!(cli.sort_order(), SortOrder::Desc);
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Tokyo"));
    }
}
