//! Corpus writer
//!
//! Persists the visible text of each harvested page into the output
//! directory, one UTF-8 file per page, named after the sanitized title.

use crate::config::{CollisionPolicy, OutputConfig};
use crate::output::{OutputError, OutputResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Longest file name, in bytes, accepted by common filesystems
const MAX_FILE_NAME_BYTES: usize = 255;

/// Bytes kept free for a `-N` collision suffix
const SUFFIX_RESERVE_BYTES: usize = 12;

/// Writes corpus files into a pre-existing directory
#[derive(Debug)]
pub struct CorpusWriter {
    directory: PathBuf,
    extension: String,
    on_collision: CollisionPolicy,

    /// File names written during this crawl
    written: HashSet<String>,
}

impl CorpusWriter {
    /// Creates a writer for the given directory
    ///
    /// # Returns
    ///
    /// * `Ok(CorpusWriter)` - The directory exists
    /// * `Err(OutputError::MissingDirectory)` - It does not, or is not a directory
    pub fn new(
        directory: impl Into<PathBuf>,
        extension: &str,
        on_collision: CollisionPolicy,
    ) -> OutputResult<Self> {
        let directory = directory.into();
        if !directory.is_dir() {
            return Err(OutputError::MissingDirectory(directory));
        }

        Ok(Self {
            directory,
            extension: extension.to_string(),
            on_collision,
            written: HashSet::new(),
        })
    }

    /// Creates a writer from the output configuration
    pub fn from_config(config: &OutputConfig) -> OutputResult<Self> {
        Self::new(&config.directory, &config.extension, config.on_collision)
    }

    /// The directory corpus files are written to
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Removes every file carrying the corpus extension
    ///
    /// Subdirectories and files with other extensions are left alone.
    ///
    /// # Returns
    ///
    /// The number of files removed
    pub fn clear_existing(&self) -> OutputResult<usize> {
        let suffix = format!(".{}", self.extension);
        let mut removed = 0;

        for entry in std::fs::read_dir(&self.directory)? {
            let path = entry?.path();
            // Matches nameless ".txt" files too, which have no `extension()`
            let matches_extension = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.ends_with(&suffix))
                .unwrap_or(false);

            if path.is_file() && matches_extension {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }

        tracing::debug!(
            "Removed {} existing corpus files from {}",
            removed,
            self.directory.display()
        );

        Ok(removed)
    }

    /// Writes one page's text, returning the path written
    ///
    /// Under [`CollisionPolicy::Overwrite`] an existing file of the same name
    /// is replaced. Under [`CollisionPolicy::Suffix`] a name already used in
    /// this crawl gets `-2`, `-3`, ... appended.
    ///
    /// Titles too long for a file name are cut on a character boundary.
    pub fn persist(&mut self, title: &str, text: &str) -> OutputResult<PathBuf> {
        if title.is_empty() {
            tracing::warn!("Page title sanitized to an empty string; writing a nameless corpus file");
        }

        let title = self.fit_title(title);
        let stem = self.file_stem(title);
        let path = self
            .directory
            .join(format!("{}.{}", stem, self.extension));

        std::fs::write(&path, text).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;

        self.written.insert(stem);
        Ok(path)
    }

    fn fit_title<'a>(&self, title: &'a str) -> &'a str {
        let limit = MAX_FILE_NAME_BYTES
            .saturating_sub(self.extension.len() + 1)
            .saturating_sub(SUFFIX_RESERVE_BYTES);
        if title.len() <= limit {
            return title;
        }

        let mut end = limit;
        while !title.is_char_boundary(end) {
            end -= 1;
        }
        tracing::debug!("Truncating {}-byte title to {} bytes", title.len(), end);
        title[..end].trim_end()
    }

    fn file_stem(&self, title: &str) -> String {
        match self.on_collision {
            CollisionPolicy::Overwrite => title.to_string(),
            CollisionPolicy::Suffix => {
                if !self.written.contains(title) {
                    return title.to_string();
                }

                let mut n = 2;
                loop {
                    let candidate = format!("{}-{}", title, n);
                    if !self.written.contains(&candidate) {
                        return candidate;
                    }
                    n += 1;
                }
            }
        }
    }
}
