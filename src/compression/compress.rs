use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use super::{create_output, remove_input};
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{HuffError, Result};
use crate::huffman_coding::huffman::HuffmanCode;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::freqs;

/// Paths written by one compression run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    pub code_file: PathBuf,
    pub short_file: PathBuf,
}

/// Compress every file named in opts. Stops at the first failure.
pub fn compress(opts: &HuffOpts) -> Result<()> {
    for file in &opts.files {
        info!("Compressing {}", file.display());
        if let Err(e) = compress_file(file, opts.force) {
            error!("Could not compress {}: {}", file.display(), e);
            return Err(e);
        }
        if opts.remove {
            remove_input(file)?;
        }
    }
    Ok(())
}

/// Compress `path` into `path.code` and `path.short` (the extension is replaced).
pub fn compress_file(path: &Path, force: bool) -> Result<Compressed> {
    let data = fs::read(path)?;
    let freqs = freqs(&data);
    let code = HuffmanCode::from_frequencies(&freqs);
    if code.is_empty() {
        return Err(HuffError::EmptyScheme);
    }
    debug!(
        "{} symbols, {} bytes in, {} bits of code expected.",
        code.len(),
        data.len(),
        code.weighted_path_length(&freqs)?
    );

    let out = Compressed {
        code_file: path.with_extension("code"),
        short_file: path.with_extension("short"),
    };
    if out.code_file == path || out.short_file == path {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} would be overwritten by its own output", path.display()),
        )
        .into());
    }

    let mut table = BufWriter::new(create_output(&out.code_file, force)?);
    code.save(&mut table)?;
    table.flush()?;

    let mut bw = BitWriter::new(BufWriter::new(create_output(&out.short_file, force)?));
    code.encode(&data, &mut bw)?;
    let bits = bw.bits_written();
    bw.finish()?;

    info!(
        "Wrote {} ({} bytes in, {} bytes out).",
        out.short_file.display(),
        data.len(),
        (bits + 7) / 8 + 1
    );
    Ok(out)
}
