pub mod output;

use std::path::Path;

use crate::errors::{Error, Result};

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
