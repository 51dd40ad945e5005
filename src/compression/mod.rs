//! The compression module is the file level glue around the Huffman code.
//!
//! Compression happens in the following steps:
//! - Count how often each byte value occurs in the input.
//! - Build a Huffman code from those counts.
//! - Save the code as a `.code` table next to the input.
//! - Write the code of every input byte to a `.short` bitstream.
//!
//! Decompression reads the `.code` table back into a tree and walks it with the bits of the
//! `.short` file, writing the decoded bytes to a `.new` file.
//!
//! The whole input is held in memory while compressing since the counts must be known
//! before the first code can be written.
//!
use std::fs::{self, File};
use std::io;
use std::path::Path;

pub mod compress;
pub mod decompress;

/// Refuse to clobber an existing file unless forced.
pub(crate) fn create_output(path: &Path, force: bool) -> io::Result<File> {
    if !force && path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", path.display()),
        ));
    }
    File::create(path)
}

/// Delete a processed input file.
pub(crate) fn remove_input(path: &Path) -> io::Result<()> {
    log::info!("Removing {}", path.display());
    fs::remove_file(path)
}
