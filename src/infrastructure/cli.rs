use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    core::state::EditorState,
    domain::{language, theme},
    infrastructure::config::EditorConfig,
    utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(long, value_name = "PATH", help = "Source file to open in the editor")]
    pub file: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "NAME",
        help = "Language to start with, e.g. \"python\" or \"rust\""
    )]
    pub language: Option<String>,

    #[arg(long, value_name = "NAME", help = "Editor theme, e.g. \"monokai\"")]
    pub theme: Option<String>,
}

impl Cli {
    /// Initial editor contents: `--file` or the sample program, with language
    /// and theme taken from the flags first and the config second.
    ///
    /// Unknown names on the command line are errors; unknown names in the
    /// config file only log a warning.
    pub fn initial_editor(&self, config: &EditorConfig) -> Result<EditorState> {
        let source = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?,
            None => language::DEFAULT_SOURCE.to_string(),
        };

        let language_index = match (&self.language, &config.language) {
            (Some(selector), _) => language::resolve(selector)
                .ok_or_else(|| eyre!("unknown language `{selector}`"))?,
            (None, Some(selector)) => language::resolve(selector).unwrap_or_else(|| {
                log::warn!("Ignoring unknown language `{selector}` in config");
                language::DEFAULT_LANGUAGE_INDEX
            }),
            (None, None) => language::DEFAULT_LANGUAGE_INDEX,
        };

        let theme_index = match (&self.theme, &config.theme) {
            (Some(value), _) => {
                theme::index_of(value).ok_or_else(|| eyre!("unknown theme `{value}`"))?
            }
            (None, Some(value)) => theme::index_of(value).unwrap_or_else(|| {
                log::warn!("Ignoring unknown theme `{value}` in config");
                theme::DEFAULT_THEME_INDEX
            }),
            (None, None) => theme::DEFAULT_THEME_INDEX,
        };

        Ok(EditorState::new(source, language_index, theme_index))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["codrush"])?;
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.file, None);
        assert_eq!(cli.language, None);
        Ok(())
    }

    #[test]
    fn test_file_language_and_theme() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "codrush",
            "--file",
            "main.py",
            "--language",
            "python",
            "--theme",
            "dracula",
            "-t",
            "8",
        ])?;
        assert_eq!(cli.file, Some(PathBuf::from("main.py")));
        assert_eq!(cli.language.as_deref(), Some("python"));
        assert_eq!(cli.theme.as_deref(), Some("dracula"));
        assert_eq!(cli.tick_rate, 8.0);
        Ok(())
    }

    #[test]
    fn test_initial_editor_defaults() -> Result<()> {
        let cli = Cli::try_parse_from(["codrush"])?;
        let editor = cli.initial_editor(&EditorConfig::default())?;

        assert_eq!(editor.code(), language::DEFAULT_SOURCE);
        assert_eq!(editor.language().value_key, "javascript");
        assert_eq!(editor.theme().value, "oceanic-next");
        Ok(())
    }

    #[test]
    fn test_flags_win_over_config() -> Result<()> {
        let cli = Cli::try_parse_from(["codrush", "--language", "72", "--theme", "cobalt"])?;
        let config = EditorConfig {
            language: Some("go".into()),
            theme: Some("dracula".into()),
        };
        let editor = cli.initial_editor(&config)?;

        assert_eq!(editor.language().display_name, "Ruby (2.7.0)");
        assert_eq!(editor.theme().value, "cobalt");
        Ok(())
    }

    #[test]
    fn test_config_python_picks_newest() -> Result<()> {
        let cli = Cli::try_parse_from(["codrush"])?;
        let config = EditorConfig {
            language: Some("python".into()),
            theme: Some("no-such-theme".into()),
        };
        let editor = cli.initial_editor(&config)?;

        assert_eq!(editor.language().execution_id, 71);
        assert_eq!(editor.theme().value, "oceanic-next");
        Ok(())
    }

    #[test]
    fn test_unknown_cli_language_is_an_error() -> Result<()> {
        let cli = Cli::try_parse_from(["codrush", "--language", "cobol"])?;
        assert!(cli.initial_editor(&EditorConfig::default()).is_err());
        Ok(())
    }

    #[test]
    fn test_file_is_loaded_into_editor() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "print('hi')")?;
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["codrush", "--file", path.as_str()])?;
        let editor = cli.initial_editor(&EditorConfig::default())?;

        assert_eq!(editor.code(), "print('hi')\n");
        Ok(())
    }
}
