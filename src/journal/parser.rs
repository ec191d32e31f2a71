//! Splits journal text into `Transaction`s.
//!
//! A transaction starts at the first non-blank line after a blank line (or the
//! start of the input) and runs until the next blank line or the end of the
//! input. Only the header date and the `txid:` marker are interpreted; every
//! other line is carried through untouched.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::filespec::FileSpec;
use crate::journal::Transaction;
use crate::tags;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid date {token:?} on line {line} of {input}: {reason}")]
    InvalidDate {
        input: String,
        line: usize,
        token: String,
        reason: String,
    },
    #[error("reading line {line} of {input}")]
    Read {
        input: String,
        line: usize,
        source: io::Error,
    },
}

/// What to do with comment lines that start in the first column (`;` or `#`).
///
/// Either way such lines are still searched for a `txid:` marker while a
/// transaction is in progress, and are dropped when found between
/// transactions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum CommentPolicy {
    /// Leave them out of the transaction's lines.
    #[default]
    Skip,
    /// Keep them in the transaction's lines.
    Keep,
}

/// Reads transactions from one or more journals, numbering them in the order
/// they are read.
///
/// Use a single `Parser` for all the journals of one merge so that
/// `Transaction::source_order` keeps counting across them.
#[derive(Debug)]
pub struct Parser {
    comments: CommentPolicy,
    next_order: usize,
}

impl Parser {
    pub fn new(comments: CommentPolicy) -> Self {
        Parser {
            comments,
            next_order: 0,
        }
    }

    /// Reads all transactions from the journal. The file is closed before
    /// returning.
    pub fn parse_file(&mut self, file_spec: &FileSpec) -> Result<Vec<Transaction>> {
        let reader = file_spec.reader()?;
        let trns = self
            .parse_reader(&file_spec.to_string(), reader)
            .with_context(|| format!("parsing journal {}", file_spec))?;
        debug!(input = %file_spec, transactions = trns.len(), "parsed journal");
        Ok(trns)
    }

    /// Reads all transactions from `reader`. `input` names the source in
    /// errors.
    pub fn parse_reader<R: BufRead>(
        &mut self,
        input: &str,
        reader: R,
    ) -> Result<Vec<Transaction>, ParseError> {
        let mut trns = Vec::new();
        let mut pending: Option<PendingTransaction> = None;

        for (idx, line_res) in reader.lines().enumerate() {
            let line_num = idx + 1;
            let line = line_res.map_err(|source| ParseError::Read {
                input: input.to_string(),
                line: line_num,
                source,
            })?;

            if line.trim().is_empty() {
                if let Some(trn) = pending.take() {
                    trns.push(self.finish(trn));
                }
                continue;
            }

            if is_comment_line(&line) {
                if let Some(trn) = pending.as_mut() {
                    trn.scan_txid(&line);
                    if self.comments == CommentPolicy::Keep {
                        trn.lines.push(line);
                    }
                }
                continue;
            }

            match pending.as_mut() {
                Some(trn) => trn.push_line(line),
                None => {
                    let token = line.split_whitespace().next().unwrap_or_default();
                    let date =
                        parse_header_date(token).map_err(|reason| ParseError::InvalidDate {
                            input: input.to_string(),
                            line: line_num,
                            token: token.to_string(),
                            reason,
                        })?;
                    pending = Some(PendingTransaction::new(date, line));
                }
            }
        }

        if let Some(trn) = pending.take() {
            trns.push(self.finish(trn));
        }

        Ok(trns)
    }

    fn finish(&mut self, pending: PendingTransaction) -> Transaction {
        let source_order = self.next_order;
        self.next_order += 1;
        Transaction {
            date: pending.date,
            lines: pending.lines,
            txid: pending.txid,
            source_order,
        }
    }
}

/// A transaction that has had its header read, but not yet its terminating
/// blank line.
struct PendingTransaction {
    date: NaiveDate,
    lines: Vec<String>,
    txid: Option<String>,
}

impl PendingTransaction {
    fn new(date: NaiveDate, header: String) -> Self {
        let mut trn = PendingTransaction {
            date,
            lines: Vec::new(),
            txid: None,
        };
        trn.push_line(header);
        trn
    }

    fn push_line(&mut self, line: String) {
        self.scan_txid(&line);
        self.lines.push(line);
    }

    /// Sets the identifier from `line` unless one was already found.
    fn scan_txid(&mut self, line: &str) {
        if self.txid.is_none() {
            self.txid = tags::find_txid(line).map(str::to_string);
        }
    }
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with(';') || line.starts_with('#')
}

/// Parses a strict `YYYY-MM-DD` date, returning the reason on failure.
fn parse_header_date(token: &str) -> Result<NaiveDate, String> {
    lazy_static! {
        static ref DATE_RX: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
    }
    if !DATE_RX.is_match(token) {
        return Err("expected a date of the form YYYY-MM-DD".to_string());
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|e| e.to_string())
}
