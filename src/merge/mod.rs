//! Merges journals into a single journal, dropping repeated transactions and
//! ordering the rest by date.

use std::fmt;

use anyhow::Result;
use tracing::debug;

use crate::filespec::FileSpec;
use crate::journal::parser::{CommentPolicy, Parser};
use crate::journal::{writer, Transaction};

pub mod cmd;
mod dedupe;

pub use dedupe::{dedupe, Deduped};

#[derive(Clone, Copy, Debug, Default)]
pub struct MergeOptions {
    pub comments: CommentPolicy,
}

/// Counts from a completed merge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergeSummary {
    /// Number of journals read.
    pub inputs: usize,
    /// Transactions read across all journals.
    pub read: usize,
    /// Transactions dropped as repeats of an earlier txid.
    pub duplicates: usize,
    /// Transactions written to the output.
    pub written: usize,
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "read {} transactions from {} journals, dropped {} duplicates, wrote {}",
            self.read, self.inputs, self.duplicates, self.written
        )
    }
}

/// Reads every journal in order with a single parser, so that transactions
/// from earlier journals come first in `source_order`.
pub fn read_journals(inputs: &[FileSpec], opts: &MergeOptions) -> Result<Vec<Transaction>> {
    let mut parser = Parser::new(opts.comments);
    let mut trns = Vec::new();
    for input in inputs {
        trns.append(&mut parser.parse_file(input)?);
    }
    Ok(trns)
}

/// Orders by date, then by position in the inputs.
pub fn sort_transactions(trns: &mut [Transaction]) {
    trns.sort_by(|lhs, rhs| {
        lhs.date
            .cmp(&rhs.date)
            .then_with(|| lhs.source_order.cmp(&rhs.source_order))
    });
}

/// Dedupes and sorts transactions read by `read_journals`.
pub fn merge_transactions(trns: Vec<Transaction>) -> Deduped {
    let mut deduped = dedupe(trns);
    sort_transactions(&mut deduped.kept);
    deduped
}

/// Merges the journals in `inputs` into `output`.
///
/// All inputs are read before `output` is opened, so a bad input leaves the
/// output untouched.
pub fn merge_files(
    inputs: &[FileSpec],
    output: &FileSpec,
    opts: &MergeOptions,
) -> Result<MergeSummary> {
    let trns = read_journals(inputs, opts)?;
    let read = trns.len();

    let merged = merge_transactions(trns);
    writer::write_file(output, &merged.kept)?;

    let summary = MergeSummary {
        inputs: inputs.len(),
        read,
        duplicates: merged.dropped.len(),
        written: merged.kept.len(),
    };
    debug!(%summary, output = %output, "merged journals");
    Ok(summary)
}
