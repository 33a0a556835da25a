//! Loading input parameters from JSON documents
//!
//! The document is a single JSON object carrying all twenty parameter names.
//! Unknown keys are ignored. A missing or non-numeric parameter is a decode
//! error.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{EmodelError, Result};
use crate::params::InputParameters;

/// Where the input document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A JSON file on disk
    File(PathBuf),
    /// The process's standard input
    Stdin,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Decode input parameters from any reader
pub fn load_from_reader<R: Read>(reader: R) -> Result<InputParameters> {
    serde_json::from_reader(reader).map_err(|e| {
        warn!("Rejected input document: {}", e);
        EmodelError::Decode(e)
    })
}

/// Decode input parameters from a string
pub fn load_from_str(document: &str) -> Result<InputParameters> {
    load_from_reader(document.as_bytes())
}

/// Open the configured source and decode it
pub fn load(source: &InputSource) -> Result<InputParameters> {
    debug!("Loading input parameters from {}", source);
    match source {
        InputSource::File(path) => {
            let file = File::open(path).map_err(|e| EmodelError::Io {
                path: path.clone(),
                source: e,
            })?;
            load_from_reader(BufReader::new(file))
        }
        InputSource::Stdin => {
            let mut document = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut document)
                .map_err(EmodelError::Stdin)?;
            load_from_str(&document)
        }
    }
}
