use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use super::{create_output, remove_input};
use crate::bitstream::bitreader::BitReader;
use crate::error::Result;
use crate::huffman_coding::huffman::HuffmanCode;
use crate::tools::cli::HuffOpts;

/// Decompress every file named in opts. Stops at the first failure.
pub fn decompress(opts: &HuffOpts) -> Result<()> {
    for file in &opts.files {
        info!("Decompressing {}", file.display());
        let short_file = file.with_extension("short");
        if let Err(e) = decompress_file(&short_file, opts.force) {
            error!("Could not decompress {}: {}", file.display(), e);
            return Err(e);
        }
        if opts.remove {
            remove_input(&short_file)?;
            remove_input(&short_file.with_extension("code"))?;
        }
    }
    Ok(())
}

/// Decode `path` (a `.short` file) with the `.code` table beside it into a `.new` file.
pub fn decompress_file(path: &Path, force: bool) -> Result<PathBuf> {
    let code_file = path.with_extension("code");
    let code = HuffmanCode::from_code_file(BufReader::new(File::open(&code_file)?))?;
    info!(
        "Read {} symbols from {}.",
        code.len(),
        code_file.display()
    );

    let new_file = path.with_extension("new");
    let mut br = BitReader::new(File::open(path)?);
    let mut out = BufWriter::new(create_output(&new_file, force)?);
    let symbols = code.translate(&mut br, &mut out)?;
    out.flush()?;

    info!("Wrote {} bytes to {}.", symbols, new_file.display());
    Ok(new_file)
}
