//! Transactions of an hledger journal, held as the raw text they were read
//! from.

use std::fmt;

use chrono::NaiveDate;

pub mod parser;
pub mod writer;

/// A single blank-line-delimited transaction from a journal.
///
/// The text is kept verbatim; only the date and identifier are extracted from
/// it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    /// Date from the first token of the header line.
    pub date: NaiveDate,
    /// The lines making up the transaction, header first, without line
    /// terminators.
    pub lines: Vec<String>,
    /// Identifier from the first line carrying a `txid:` marker.
    pub txid: Option<String>,
    /// Position of the transaction among all transactions read by the same
    /// `parser::Parser`. Unique within a merge.
    pub source_order: usize,
}

impl Transaction {
    pub fn header(&self) -> &str {
        &self.lines[0]
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
