use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum MotifMarkError {
    /// A motif contains a character outside the active ambiguity alphabet.
    InvalidSymbol { motif: String, symbol: char },
    /// The sequence resource is not a usable record stream.
    MalformedRecord(String),
    /// More distinct motifs than available palette colors.
    PaletteExhausted { motifs: usize, colors: usize },
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Error for MotifMarkError {}

impl fmt::Display for MotifMarkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MotifMarkError::InvalidSymbol { motif, symbol } => {
                write!(f, "Motif '{motif}' contains unsupported symbol '{symbol}'")
            }
            MotifMarkError::MalformedRecord(msg) => {
                write!(f, "Malformed sequence record: {msg}")
            }
            MotifMarkError::PaletteExhausted { motifs, colors } => {
                write!(
                    f,
                    "Motif list has {motifs} distinct motifs but the palette only has {colors} colors"
                )
            }
            MotifMarkError::Io(e) => write!(f, "{e}"),
            MotifMarkError::Serde(e) => write!(f, "{e}"),
        }
    }
}

impl From<std::io::Error> for MotifMarkError {
    fn from(err: std::io::Error) -> Self {
        MotifMarkError::Io(err)
    }
}

impl From<serde_json::Error> for MotifMarkError {
    fn from(err: serde_json::Error) -> Self {
        MotifMarkError::Serde(err)
    }
}
