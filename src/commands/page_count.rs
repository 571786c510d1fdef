use super::Command;
use crate::automation::WordService;
use crate::counter::count_pages;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// get number of pages in a Word document
#[derive(Args, Debug)]
pub struct PageCountCommand {
    /// path to a document Word can open
    doc: PathBuf,
}

impl Command for PageCountCommand {
    fn execute<S: WordService>(self, word: &S) -> Result<()> {
        self.run(word, &mut io::stdout())
    }
}

impl PageCountCommand {
    fn run<S: WordService, W: Write>(self, word: &S, out: &mut W) -> Result<()> {
        let pages = count_pages(word, &self.doc)?;
        writeln!(out, "{}", pages)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::{AutomationError, Statistic};
    use clap::Parser;
    use std::path::Path;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[clap(flatten)]
        command: PageCountCommand,
    }

    struct SevenPages;

    impl WordService for SevenPages {
        type App = ();
        type Doc = ();

        fn launch(&self) -> Result<(), AutomationError> {
            Ok(())
        }

        fn open(&self, _app: &(), path: &Path) -> Result<(), AutomationError> {
            assert_eq!(path, Path::new("report.docx"));
            Ok(())
        }

        fn compute_statistic(&self, _doc: &(), _stat: Statistic) -> Result<i32, AutomationError> {
            Ok(7)
        }

        fn close(&self, _doc: (), _save_changes: bool) -> Result<(), AutomationError> {
            Ok(())
        }

        fn quit(&self, _app: ()) -> Result<(), AutomationError> {
            Ok(())
        }
    }

    #[test]
    fn requires_a_document_path() {
        let err = TestCli::try_parse_from(["docpages"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn prints_the_reported_count() {
        let cli = TestCli::try_parse_from(["docpages", "report.docx"]).unwrap();
        let mut out = Vec::new();
        cli.command.run(&SevenPages, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7\n");
    }
}
