mod page_count;

pub use page_count::*;

use crate::automation::WordService;

pub trait Command {
    fn execute<S: WordService>(self, word: &S) -> anyhow::Result<()>;
}
