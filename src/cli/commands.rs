use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::models::Channel;
use crate::parsers::parse_log_reader;
use crate::render::write_html;
use crate::utils::{DEFAULT_LOG_SUFFIXES, channel_name_from_path, open_log_file};

#[derive(Parser, Debug)]
#[command(name = "irc-log-html")]
#[command(version = "0.1.0")]
#[command(about = "Convert a plain-text IRC channel log into a static HTML page", long_about = None)]
pub struct Cli {
    /// IRC log input file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Where the HTML page should be written
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// File name suffix stripped when deriving the channel name
    /// (repeatable, defaults to .txt and .log)
    #[arg(long = "suffix", value_name = "SUFFIX")]
    pub suffixes: Vec<String>,
}

impl Cli {
    /// Suffixes to strip from the input file name
    pub fn suffixes(&self) -> Vec<String> {
        if self.suffixes.is_empty() {
            DEFAULT_LOG_SUFFIXES.iter().map(|s| s.to_string()).collect()
        } else {
            self.suffixes.clone()
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert(&cli.input, &cli.output, &cli.suffixes())?;
    Ok(())
}

/// Read the log at `input`, render it and write the page to `output`
///
/// The output file is only created once the input has been read and parsed.
pub fn convert<S: AsRef<str>>(input: &Path, output: &Path, suffixes: &[S]) -> Result<Channel> {
    let name = channel_name_from_path(input, suffixes);
    let file = open_log_file(input)?;
    let channel = parse_log_reader(&name, file)
        .with_context(|| format!("Failed to parse log file: {}", input.display()))?;
    log::info!("Successfully parsed {} messages from {}", channel.len(), channel.name());

    let out = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(out);
    write_html(&channel, &mut writer)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    log::info!("Generated HTML page at: {}", output.display());

    Ok(channel)
}
