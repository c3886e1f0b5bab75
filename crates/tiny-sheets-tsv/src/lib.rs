//! # tiny-sheets-tsv
//!
//! Tab-separated reader and writer for tiny-sheets grids.
//!
//! The input format is line-oriented: a dimensions line (`rows<TAB>cols`)
//! followed by one line per grid row, cells separated by tabs. Writing a
//! grid evaluates it - formula cells render their computed value, failing
//! cells render `#` plus their error token.

mod error;
mod reader;
mod writer;

pub use error::{LoadError, LoadResult};
pub use reader::TsvReader;
pub use writer::TsvWriter;
