pub mod error;
pub mod git;
pub mod sync;
pub mod ui;

pub use error::{GitSvnTaggerError, Result};
