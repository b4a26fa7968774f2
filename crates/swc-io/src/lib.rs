//! # swc-io
//!
//! File-facing layer of the SWC standardizer: parses SWC text into node
//! records, writes canonicalized records back out, renders reports as JSON
//! or HTML, and wraps the whole pipeline in [`Standardizer`] and a batch
//! driver.

pub mod batch;
pub mod reader;
pub mod reporters;
pub mod standardizer;
pub mod writer;

pub use batch::{BatchEntry, BatchRunner, BatchSummary};
pub use reader::{read_swc, read_swc_from, read_swc_path};
pub use reporters::{create_reporter, Reporter};
pub use standardizer::Standardizer;
pub use writer::{write_swc, write_swc_path};
