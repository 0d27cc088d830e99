//! Command-line interface for restyling the antlines of a map document

use crate::antline::segmenter::{FailureMode, StyleReport, style_all_antlines};
use crate::io::configuration::{DOCUMENT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::spatial::document::MapDocument;
use crate::style::definition::StyleSet;
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "antline-style")]
#[command(
    author,
    version,
    about = "Retexture and fragment antline overlays in a map document"
)]
/// Command-line arguments for the restyling tool
pub struct Cli {
    /// Map document (JSON) to restyle
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Style file (JSON); the builtin style is used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Output path, defaults to `<map>_styled.json` next to the input
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Abort on the first overlay that cannot be styled
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Failure handling selected by the flags
    pub const fn failure_mode(&self) -> FailureMode {
        if self.strict {
            FailureMode::Strict
        } else {
            FailureMode::Lenient
        }
    }

    /// Default log filter for the requested verbosity
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity, honouring `RUST_LOG`
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }
        // A logger may already be installed when embedded in another tool
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level()),
        )
        .try_init();
    }

    /// Path the styled map is written to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.map))
    }

    fn default_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            DOCUMENT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Loads a map, restyles its antlines and writes the result
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Styles the processor applies, builtin unless a style file was given
    ///
    /// # Errors
    ///
    /// Returns an error if the style file cannot be loaded
    pub fn load_styles(&self) -> Result<StyleSet> {
        match &self.cli.style {
            Some(path) => {
                debug!("Loading styles from {}", path.display());
                StyleSet::load(path)
            }
            None => Ok(StyleSet::default()),
        }
    }

    /// Process the map according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if loading, styling (in strict mode) or saving fails
    pub fn process(&mut self) -> Result<StyleReport> {
        let start_time = Instant::now();
        let styles = self.load_styles()?;
        let mut document = MapDocument::load(&self.cli.map)?;

        let report = style_all_antlines(
            &mut document,
            &styles,
            self.cli.failure_mode(),
            self.progress_manager.as_mut(),
        )?;

        let output_path = self.cli.output_path();
        document.save(&output_path)?;
        info!(
            "Wrote {} in {:.2?}",
            output_path.display(),
            start_time.elapsed()
        );

        Ok(report)
    }
}
