#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use graphsum_test_utils::builders;
pub use graphsum_test_utils::{init_tracing, with_timeout};

/// Write `contents` to a fresh temp file that lives as long as the handle.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{contents}").expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
