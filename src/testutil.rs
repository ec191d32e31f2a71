use crate::journal::parser::{CommentPolicy, Parser};
use crate::journal::writer::write_transactions;
use crate::journal::Transaction;

/// Parses an indented journal literal, as written inline in tests.
pub fn parse_journal(s: &str) -> Vec<Transaction> {
    parse_journal_with(s, CommentPolicy::Skip)
}

pub fn parse_journal_with(s: &str, comments: CommentPolicy) -> Vec<Transaction> {
    Parser::new(comments)
        .parse_reader("<test>", textwrap::dedent(s).as_bytes())
        .expect("test input did not parse")
}

pub fn format_journal(trns: &[Transaction]) -> String {
    let mut buf = Vec::new();
    write_transactions(&mut buf, trns).expect("write to Vec failed");
    String::from_utf8(buf).expect("transactions were not UTF-8")
}

macro_rules! assert_journal_eq {
    ($want:expr, $got:expr, $($context_arg:expr),*) => {
        let want_str = $crate::testutil::format_journal(&$want);
        let got_str = $crate::testutil::format_journal(&$got);
        if want_str != got_str {
            eprintln!($($context_arg,)*);
            text_diff::assert_diff(&want_str, &got_str, "\n", 0);
        }
    };
    ($want:expr, $got:expr) => {
        let want_str = $crate::testutil::format_journal(&$want);
        let got_str = $crate::testutil::format_journal(&$got);
        if want_str != got_str {
            text_diff::assert_diff(&want_str, &got_str, "\n", 0);
        }
    };
}
