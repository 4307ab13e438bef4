pub mod cli;
pub mod toc;
pub mod utils;

pub use toc::{generate, generate_with_options, TocOptions, TocResult};
