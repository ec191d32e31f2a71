use anyhow::Result;
use clap::Args;

use crate::filespec::FileSpec;
use crate::journal::parser::CommentPolicy;
use crate::merge::{self, MergeOptions};

#[derive(Debug, Args)]
pub struct Cmd {
    /// The journals to merge. Where transactions share a txid, the one from
    /// the earliest journal given is kept. "-" reads from stdin.
    #[arg(short = 'i', long = "input", required = true)]
    inputs: Vec<FileSpec>,

    /// The file to write the merged journal to (overwrites any existing file).
    /// "-" writes to stdout.
    #[arg(short = 'o', long = "output")]
    output: FileSpec,

    /// What to do with comment lines starting in the first column.
    #[arg(long = "comments", value_enum, default_value_t = CommentPolicy::Skip)]
    comments: CommentPolicy,

    /// Prints counts of transactions read, dropped and written to stderr.
    #[arg(long = "summary")]
    summary: bool,
}

impl Cmd {
    pub fn run(&self) -> Result<()> {
        let opts = MergeOptions {
            comments: self.comments,
        };
        let summary = merge::merge_files(&self.inputs, &self.output, &opts)?;
        if self.summary {
            eprintln!("{}", summary);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ffi::OsString;

    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCommand {
        #[command(flatten)]
        cmd: Cmd,
    }

    #[test]
    fn parses_repeated_inputs_in_order() {
        let cmd = TestCommand::try_parse_from([
            "journalmerge",
            "-i",
            "a.journal",
            "--input",
            "b.journal",
            "-i",
            "-",
            "-o",
            "out.journal",
        ])
        .unwrap()
        .cmd;
        let inputs: Vec<String> = cmd.inputs.iter().map(ToString::to_string).collect();
        assert_eq!(inputs, vec!["\"a.journal\"", "\"b.journal\"", "<stdio>"]);
        assert_eq!(cmd.output.to_string(), "\"out.journal\"");
        assert_eq!(cmd.comments, CommentPolicy::Skip);
        assert!(!cmd.summary);
    }

    #[test]
    fn parses_comment_policy() {
        let cmd = TestCommand::try_parse_from([
            "journalmerge",
            "-i",
            "a.journal",
            "-o",
            "-",
            "--comments",
            "keep",
            "--summary",
        ])
        .unwrap()
        .cmd;
        assert_eq!(cmd.comments, CommentPolicy::Keep);
        assert!(cmd.summary);
    }

    #[test]
    fn requires_input_and_output() {
        assert!(TestCommand::try_parse_from(["journalmerge", "-o", "out.journal"]).is_err());
        assert!(TestCommand::try_parse_from(["journalmerge", "-i", "a.journal"]).is_err());
    }

    #[test]
    fn run_merges_into_output() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("out.journal");
        let args: Vec<OsString> = vec![
            "journalmerge".into(),
            "-i".into(),
            "testdata/merge/inputs/b.journal".into(),
            "-o".into(),
            out_path.clone().into_os_string(),
        ];
        let cmd = TestCommand::try_parse_from(args).unwrap().cmd;

        cmd.run().unwrap();

        let got = std::fs::read_to_string(&out_path).unwrap();
        assert!(got.starts_with("2023-01-01 Transaction 3\n"), "{}", got);
        assert!(got.ends_with("  Account8  $-400\n\n"), "{}", got);
    }
}
