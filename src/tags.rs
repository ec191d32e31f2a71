/// Marker text that introduces a transaction identifier anywhere on a line of
/// a transaction, e.g: `"  ; txid: 8f1c2a"`. Transactions sharing an
/// identifier are considered to be the same transaction.
pub const TXID_MARKER: &str = "txid:";

/// Returns the identifier following the first `TXID_MARKER` on the line, if
/// any. An empty identifier counts as no identifier.
pub fn find_txid(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(TXID_MARKER)?;
    let txid = rest.trim();
    if txid.is_empty() {
        None
    } else {
        Some(txid)
    }
}
