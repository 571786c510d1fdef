use crate::automation::{AutomationError, Statistic, WordService};
use log::{debug, warn};
use std::convert::TryFrom;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("word automation unavailable")]
    ApplicationUnavailable(#[source] AutomationError),
    #[error("could not open document {path:?}")]
    DocumentOpenFailure {
        path: PathBuf,
        #[source]
        source: AutomationError,
    },
    #[error("page statistics query failed")]
    StatisticsQueryFailure(#[source] AutomationError),
}

/// Count the pages of the document at `path` using Word's own statistics
/// engine: launch, open, query, close without saving, quit.
///
/// Once the application has launched it is always quit before returning, and
/// once the document has opened it is always closed before the quit - on
/// error paths too. Cleanup failures are logged and never replace the
/// primary error.
pub fn count_pages<S: WordService>(word: &S, path: &Path) -> Result<u32, CountError> {
    let app = word.launch().map_err(CountError::ApplicationUnavailable)?;
    debug!("launched word");

    let result = query_pages(word, &app, path);

    if let Err(err) = word.quit(app) {
        warn!("failed to quit word: {}", err);
    }
    result
}

fn query_pages<S: WordService>(word: &S, app: &S::App, path: &Path) -> Result<u32, CountError> {
    let doc = word
        .open(app, path)
        .map_err(|source| CountError::DocumentOpenFailure {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("opened {}", path.display());

    let result = word.compute_statistic(&doc, Statistic::Pages);

    if let Err(err) = word.close(doc, false) {
        warn!("failed to close document: {}", err);
    }

    let pages = result.map_err(CountError::StatisticsQueryFailure)?;
    u32::try_from(pages).map_err(|_| {
        CountError::StatisticsQueryFailure(AutomationError::Call(format!(
            "reported page count out of range: {}",
            pages
        )))
    })
}
