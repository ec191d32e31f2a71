use std::collections::HashSet;

use tracing::info;

use crate::journal::Transaction;

/// Result of `dedupe`: the transactions kept and those dropped as repeats, each
/// in their original relative order.
#[derive(Debug, Default)]
pub struct Deduped {
    pub kept: Vec<Transaction>,
    pub dropped: Vec<Transaction>,
}

/// Drops every transaction whose txid was already seen on an earlier
/// transaction. Transactions without a txid are always kept.
pub fn dedupe(trns: Vec<Transaction>) -> Deduped {
    let mut seen = HashSet::<String>::new();
    let mut result = Deduped::default();

    for trn in trns {
        let is_repeat = match &trn.txid {
            Some(txid) => !seen.insert(txid.clone()),
            None => false,
        };
        if is_repeat {
            info!(
                txid = trn.txid.as_deref().unwrap_or_default(),
                date = %trn.date,
                header = trn.header(),
                "dropping duplicate transaction"
            );
            result.dropped.push(trn);
        } else {
            result.kept.push(trn);
        }
    }

    result
}
