pub mod cleaner;
pub mod comments;
pub mod pipeline;
pub mod report;
pub mod scraper;
pub mod search;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;

pub use pipeline::ResearchPipeline;
pub use report::NO_RESULTS_REPORT;
