use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a config item was declared. Used in validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Origin {
    pub file: PathBuf,
    pub section: String,
    pub index: Option<usize>,
}

impl Origin {
    pub fn new(file: &Path, section: &str, index: Option<usize>) -> Self {
        Self {
            file: file.to_path_buf(),
            section: section.to_owned(),
            index,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}: {}[{}]", self.file.display(), self.section, i),
            None => write!(f, "{}: {}", self.file.display(), self.section),
        }
    }
}
