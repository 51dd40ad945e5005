//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use huffcode::compression::{compress::compress, decompress::decompress};
use huffcode::tools::cli::{HuffOpts, Mode};

fn main() {
    let opts = HuffOpts::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        opts.verbosity().into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    //----- Figure how what we need to do and go do it
    info!("Mode: {}", opts.op_mode());
    let result = match opts.op_mode() {
        Mode::Zip => compress(&opts),
        Mode::Unzip => decompress(&opts),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Done.");
}
