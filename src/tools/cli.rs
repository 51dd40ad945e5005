use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Verbosity of user information
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl From<Verbosity> for LevelFilter {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Compress or Decompress
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// huffcode, a Huffman file compressor.
///
/// Compressing name.txt writes the code table to name.code and the packed bits to name.short.
/// Decompressing name.short reads name.code and writes name.new.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct HuffOpts {
    /// Files to process
    #[clap(value_parser, required = true)]
    pub files: Vec<PathBuf>,
    /// Compress (the default)
    #[clap(short = 'z', long, action, conflicts_with = "decompress")]
    pub compress: bool,
    /// Decompress
    #[clap(short, long, action)]
    pub decompress: bool,
    /// Silently overwrite existing output files
    #[clap(short, long, action)]
    pub force: bool,
    /// Delete input files after they were processed
    #[clap(long, action)]
    pub remove: bool,
    /// Report errors only; -qq silences those too
    #[clap(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// More output; repeat for more (-vvv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl HuffOpts {
    pub fn op_mode(&self) -> Mode {
        if self.decompress {
            Mode::Unzip
        } else {
            Mode::Zip
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        match (self.quiet, self.verbose) {
            (q, _) if q > 1 => Verbosity::Quiet,
            (1, _) => Verbosity::Errors,
            (_, 0) => Verbosity::Warnings,
            (_, 1) => Verbosity::Info,
            (_, 2) => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}
