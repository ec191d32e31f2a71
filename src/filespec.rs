//! Opens journals for reading and writing. Allows use of "-" as a way to
//! specify stdin or stdout.

use std::fmt;
use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Error, Result};

/// Specifies a file to read from to write to (depending on context).
#[derive(Clone, Debug)]
pub enum FileSpec {
    /// Read from stdin or write to stdout.
    Stdio,
    /// Read from or write to the file at the given path.
    Path(PathBuf),
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FileSpec::*;
        match self {
            Stdio => f.write_str("<stdio>"),
            Path(path) => write!(f, "{:?}", path),
        }
    }
}

impl FileSpec {
    /// Opens the file for buffered reading as UTF-8 text. A leading byte order
    /// mark is removed.
    pub fn reader(&self) -> Result<Box<dyn BufRead>> {
        use FileSpec::*;
        let raw: Box<dyn Read> = match self {
            Stdio => Box::new(stdin()),
            Path(path) => Box::new(
                File::open(path).with_context(|| format!("opening {:?} for reading", path))?,
            ),
        };
        let decoded = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .utf8_passthru(true)
            .strip_bom(true)
            .build(raw);
        Ok(Box::new(BufReader::new(decoded)))
    }

    /// Opens the file for writing, truncating any existing content.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        use FileSpec::*;
        Ok(match self {
            Stdio => Box::new(stdout()),
            Path(path) => Box::new(
                File::create(path).with_context(|| format!("opening {:?} for writing", path))?,
            ),
        })
    }
}

impl FromStr for FileSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use FileSpec::*;
        if s == "-" {
            Ok(Stdio)
        } else {
            Ok(Path(s.into()))
        }
    }
}
