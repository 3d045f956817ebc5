//! Command handlers for the StarData binary

pub mod add;
pub mod interactive;
pub mod parse;
pub mod show;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use stardata::config::{Config, OutputFormat, Verbosity};
use stardata::presentation::output::{write_event, ErrorEvent};
use stardata::presentation::{Cli, Diagnostics};
use stardata::{StarCatalog, TextFileRepository};

/// Everything a command needs: resolved config, output mode, the catalog
pub struct Context {
    pub config: Config,
    pub json: bool,
    pub diagnostics: Diagnostics,
    pub catalog: StarCatalog<TextFileRepository>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        let loaded = Config::resolve(cli.config.as_deref(), &cwd)?;

        // `-v` can raise the configured verbosity, never lower it
        let verbosity = match Verbosity::from_flag_count(cli.verbose) {
            Some(flag) => flag.max(loaded.config.output.verbosity),
            None => loaded.config.output.verbosity,
        };
        let diagnostics = Diagnostics::new(verbosity);

        for warning in &loaded.warnings {
            diagnostics.warn(warning.to_string());
        }
        match &loaded.source {
            Some(source) => diagnostics.debug(format!("config: {}", source.display())),
            None => diagnostics.debug("config: built-in defaults"),
        }

        Ok(Self {
            json: cli.json || loaded.config.output.format == OutputFormat::Json,
            config: loaded.config,
            diagnostics,
            catalog: StarCatalog::text_files(),
        })
    }

    /// `file` if given, otherwise the configured data file
    pub fn data_file(&self, file: Option<&Path>) -> PathBuf {
        file.map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.storage.data_file.clone())
    }

    /// Emit a JSON error event in JSON mode, then hand the error back
    pub fn fail(&self, command: &str, err: impl Into<anyhow::Error>) -> anyhow::Error {
        let err = err.into();
        if self.json {
            let mut out = io::stdout().lock();
            if let Err(write_err) = self.write_error_event(&mut out, command, &err) {
                self.diagnostics
                    .debug(format!("could not write error event: {write_err}"));
            }
        }
        err
    }

    fn write_error_event(
        &self,
        out: &mut impl Write,
        command: &str,
        err: &anyhow::Error,
    ) -> io::Result<()> {
        write_event(out, &ErrorEvent::new(command, format!("{err:#}")))
    }
}
