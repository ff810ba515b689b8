use super::examples::{select_example, EXAMPLES};
use super::theme::Theme;
use super::{CliArgs, CliCommand, CliError, USAGE};
use crate::engine::{build_with_config, Config};
use crate::render::render;
use std::io::{self, Write};
use tracing::info;

/// Runs parsed invocations; owns the layout configuration and output styling.
pub struct App {
    config: Config,
    theme: Option<Theme>,
}

impl App {
    /// `styled` enables terminal colors for labels (use it only on a TTY).
    pub fn new(styled: bool) -> Self {
        Self {
            config: Config::default(),
            theme: styled.then(Theme::default),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn run<W: Write>(&self, args: &CliArgs, out: &mut W) -> Result<(), CliError> {
        match &args.command {
            CliCommand::Help => writeln!(out, "{USAGE}")?,
            CliCommand::Phrase(phrase) => self.run_phrase(out, phrase, args.dry, None)?,
            CliCommand::Example(position) => {
                let (number, phrase) = select_example(*position)?;
                self.run_phrase(out, phrase, args.dry, Some(number))?;
            }
            CliCommand::All => {
                for (index, phrase) in EXAMPLES.iter().enumerate() {
                    self.run_phrase(out, phrase, args.dry, Some(index + 1))?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    fn run_phrase<W: Write>(
        &self,
        out: &mut W,
        phrase: &str,
        dry: bool,
        number: Option<usize>,
    ) -> io::Result<()> {
        match (number, &self.theme) {
            (Some(n), Some(theme)) => write!(out, "{} ", theme.number(format!("{n}:")))?,
            (Some(n), None) => write!(out, "{n}: ")?,
            (None, _) => {}
        }

        match &self.theme {
            Some(theme) => writeln!(out, "{} {phrase}", theme.label("Phrase:"))?,
            None => writeln!(out, "Phrase: {phrase}")?,
        }

        if !dry {
            let (grid, blocks) = build_with_config(phrase, &self.config.layout);
            info!(phrase, blocks = blocks.len(), cells = grid.len(), "phrase laid out");
            writeln!(out, "{}", render(&grid))?;
        }

        match &self.theme {
            Some(theme) => writeln!(out, "{}", theme.separator("---")),
            None => writeln!(out, "---"),
        }
    }
}
