use std::path::Path;
use thiserror::Error;

/// A statistic Word can compute for an open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Pages,
}

impl Statistic {
    /// wdStatistic code passed to `Document.ComputeStatistics`.
    pub fn code(self) -> i32 {
        match self {
            Statistic::Pages => 2,
        }
    }
}

#[derive(Debug, Error)]
pub enum AutomationError {
    /// The automation bridge could not be reached - Word not installed,
    /// its automation server not registered, or COM init failed.
    #[error("automation bridge unavailable: {0}")]
    Unavailable(String),
    /// A call against an obtained handle failed.
    #[error("automation call failed: {0}")]
    Call(String),
}

/// The Word automation interface, reduced to the five calls this tool makes.
///
/// The real implementation drives `Word.Application` over COM; tests supply
/// a fake. Both handle types are opaque: the application process owns the
/// actual state and a handle is only valid within the invocation that
/// produced it.
pub trait WordService {
    type App;
    type Doc;

    /// start (or attach to) one instance of the application
    fn launch(&self) -> Result<Self::App, AutomationError>;

    /// open the document at `path` inside the application
    fn open(&self, app: &Self::App, path: &Path) -> Result<Self::Doc, AutomationError>;

    /// ask the application's statistics engine for a value
    fn compute_statistic(&self, doc: &Self::Doc, stat: Statistic) -> Result<i32, AutomationError>;

    /// close the document, consuming its handle
    fn close(&self, doc: Self::Doc, save_changes: bool) -> Result<(), AutomationError>;

    /// terminate the application instance, consuming its handle
    fn quit(&self, app: Self::App) -> Result<(), AutomationError>;
}
