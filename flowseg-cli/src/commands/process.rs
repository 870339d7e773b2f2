//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, Document};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use flowseg_core::{ContentBlock, Extractor, ExtractionStats};
use flowseg_html::{RootSelector, StyleVisibility};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); `.json` files hold a document tree
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Content root: a tag name or `#id` (default: body for HTML, the top element for trees)
    #[arg(short, long, value_name = "SELECTOR")]
    pub root: Option<RootSelector>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "FLOWSEG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Blocks extracted from one input file
#[derive(Debug)]
struct FileBlocks {
    source: String,
    blocks: Vec<ContentBlock>,
    stats: ExtractionStats,
}

/// Settings shared by every file of one run
struct Pipeline<'a> {
    config: &'a CliConfig,
    visibility: StyleVisibility,
    root: Option<&'a RootSelector>,
}

impl Pipeline<'_> {
    fn process_file(&self, path: &Path) -> Result<FileBlocks> {
        let document = Document::load(path, self.config.extract.max_depth)?;
        let root = document.content_root(self.root)?;

        let extraction = Extractor::new(&self.config.extract, &self.visibility)
            .extract(root)
            .with_context(|| format!("Failed to extract blocks from {}", document.source))?;

        log::debug!(
            "{}: {} blocks, depth {}",
            document.source,
            extraction.blocks.len(),
            extraction.stats.max_depth
        );

        Ok(FileBlocks {
            source: document.source,
            blocks: extraction.blocks,
            stats: extraction.stats,
        })
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting document processing");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let format = match self.format {
            Some(format) => format,
            None => config.output.format()?,
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let pipeline = Pipeline {
            config: &config,
            visibility: config.visibility.predicate(),
            root: self.root.as_ref(),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = if self.parallel || self.threads.is_some() {
            self.process_parallel(&pipeline, &files, &progress)?
        } else {
            files
                .iter()
                .map(|path| {
                    let result = pipeline.process_file(path);
                    progress.file_completed(&path.display().to_string());
                    result
                })
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        self.write_output(format, config.output.pretty_json, &results)?;

        let total = results.iter().fold(ExtractionStats::default(), |mut acc, file| {
            acc.text_blocks += file.stats.text_blocks;
            acc.preserved_elements += file.stats.preserved_elements;
            acc.hidden_elements += file.stats.hidden_elements;
            acc.embedded_elements += file.stats.embedded_elements;
            acc.max_depth = acc.max_depth.max(file.stats.max_depth);
            acc
        });
        log::info!(
            "Processed {} file(s): {} text blocks, {} preserved, {} hidden skipped",
            results.len(),
            total.text_blocks,
            total.preserved_elements,
            total.hidden_elements
        );

        Ok(())
    }

    /// Process files on a rayon pool; output keeps input order
    fn process_parallel(
        &self,
        pipeline: &Pipeline<'_>,
        files: &[PathBuf],
        progress: &ProgressReporter,
    ) -> Result<Vec<FileBlocks>> {
        let run = || {
            files
                .par_iter()
                .map(|path| {
                    let result = pipeline.process_file(path);
                    progress.file_completed(&path.display().to_string());
                    result
                })
                .collect::<Result<Vec<_>>>()
        };

        match self.threads {
            Some(0) => Err(CliError::ConfigError(
                "thread count must be greater than 0".to_string(),
            )
            .into()),
            Some(threads) => {
                log::debug!("Using {threads} worker threads");
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .context("Failed to build thread pool")?;
                pool.install(run)
            }
            None => run(),
        }
    }

    fn write_output(
        &self,
        format: OutputFormat,
        pretty_json: bool,
        results: &[FileBlocks],
    ) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut formatter = format.formatter(writer, pretty_json);
        for file in results {
            for block in &file.blocks {
                formatter.format_block(block, &file.source)?;
            }
        }
        formatter.finish()
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::from_file(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
