use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

use crate::filespec::FileSpec;
use crate::journal::Transaction;

/// Writes the transactions in order, each followed by a blank line, so that the
/// output reads back as the same transactions.
pub fn write_transactions<W: Write>(w: &mut W, trns: &[Transaction]) -> std::io::Result<()> {
    for trn in trns {
        write!(w, "{}", trn)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Writes the transactions to the given file, replacing any existing content.
pub fn write_file(file_spec: &FileSpec, trns: &[Transaction]) -> Result<()> {
    let mut w = BufWriter::new(file_spec.writer()?);
    write_transactions(&mut w, trns)
        .and_then(|_| w.flush())
        .with_context(|| format!("writing journal to {}", file_spec))
}
