use thiserror::Error;

/// Errors raised while building, saving, reading or walking a Huffman code.
#[derive(Error, Debug)]
pub enum HuffError {
    /// The `.code` table could not be turned into a complete tree.
    #[error("Malformed code table at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// Save, translate and encode all need at least one symbol.
    #[error("Attempted to use an empty Huffman code (no symbols with a nonzero frequency)")]
    EmptyScheme,

    /// The bit stream walked off the tree. The stream and the table do not belong together.
    #[error("Bit stream does not match the code table: {0}")]
    Mismatch(String),

    #[error("Symbol {0} has no code in this table")]
    UnknownSymbol(u8),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl HuffError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        HuffError::Format {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for Huffman code operations.
pub type Result<T> = std::result::Result<T, HuffError>;
