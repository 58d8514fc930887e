//! Result table output.
//!
//! The table is a flat CSV: a `Word,Count` header, then one `word,count`
//! line per selected word. Words are `a-z` only, so nothing needs quoting.
//!
//! Publication is atomic. The table is written to a temporary file next to
//! the destination and renamed over it only once complete; readers see
//! either the previous table or the new one, never a prefix.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::frequency::ResultSet;

/// First line of every result table.
pub const HEADER: &str = "Word,Count";

/// Writes the table for `results` to `out`.
pub fn write_table<W: Write>(out: &mut W, results: &ResultSet) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for entry in results {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

/// Publishes result tables to a fixed destination.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    /// Creates a writer for the destination `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the complete table to a temporary file beside the destination.
    ///
    /// The destination is not touched until [`StagedResult::publish`].
    pub fn stage(&self, results: &ResultSet) -> Result<StagedResult> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp);
            write_table(&mut writer, results)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;

        log::debug!(
            "staged {} rows at {}",
            results.len(),
            temp.path().display()
        );

        Ok(StagedResult {
            temp,
            dest: self.path.clone(),
        })
    }

    /// Stages and publishes in one go.
    pub fn write(&self, results: &ResultSet) -> Result<()> {
        self.stage(results)?.publish()
    }
}

/// A fully written table waiting to replace the destination.
///
/// Dropping it without publishing deletes the temporary file.
#[derive(Debug)]
pub struct StagedResult {
    temp: NamedTempFile,
    dest: PathBuf,
}

impl StagedResult {
    /// Location of the temporary file.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Atomically renames the temporary file over the destination.
    pub fn publish(self) -> Result<()> {
        let StagedResult { temp, dest } = self;
        match temp.persist(&dest) {
            Ok(_) => {
                log::debug!("published {}", dest.display());
                Ok(())
            }
            Err(e) => Err(Error::Persist {
                path: dest,
                source: e.error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfreq_types::WordCount;

    fn results(entries: &[(&str, u32)]) -> ResultSet {
        ResultSet::from_entries(
            entries
                .iter()
                .map(|&(w, c)| WordCount::new(w, c))
                .collect(),
        )
    }

    #[test]
    fn table_format() {
        let mut buf = Vec::new();
        write_table(&mut buf, &results(&[("friend", 501), ("coffee", 750)])).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Word,Count"));
        let mut rows: Vec<&str> = lines.collect();
        rows.sort_unstable();
        assert_eq!(rows, ["coffee,750", "friend,501"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn round_trip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");

        ResultWriter::new(&path)
            .write(&results(&[("friend", 501), ("coffee", 750)]))
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Word,Count\ncoffee,750\nfriend,501\n");
    }

    #[test]
    fn empty_results_write_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");

        ResultWriter::new(&path).write(&ResultSet::default()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Word,Count\n");
    }

    #[test]
    fn unpublished_stage_leaves_previous_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        let writer = ResultWriter::new(&path);

        writer.write(&results(&[("friend", 501)])).unwrap();
        let before = fs::read(&path).unwrap();

        let staged = writer.stage(&results(&[("coffee", 750)])).unwrap();
        let temp_path = staged.path().to_path_buf();
        assert!(temp_path.exists());
        assert_eq!(fs::read(&path).unwrap(), before);

        // Run dies between write and rename.
        drop(staged);

        assert_eq!(fs::read(&path).unwrap(), before);
        assert!(!temp_path.exists());
    }

    #[test]
    fn publish_replaces_previous_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        let writer = ResultWriter::new(&path);

        writer.write(&results(&[("friend", 501)])).unwrap();
        writer.write(&results(&[("coffee", 750)])).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Word,Count\ncoffee,750\n"
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn creates_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("result.csv");

        ResultWriter::new(&path).write(&ResultSet::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_destination_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = ResultWriter::new(blocker.join("result.csv"))
            .write(&ResultSet::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn publish_onto_directory_fails_and_keeps_it() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("taken");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep"), "x").unwrap();

        let err = ResultWriter::new(&dest)
            .write(&ResultSet::default())
            .unwrap_err();
        assert!(matches!(err, Error::Persist { .. }));
        assert!(dest.join("keep").exists());
    }

    #[test]
    fn repeated_writes_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        let set = results(&[("tea", 600), ("cake", 600), ("walk", 900)]);

        ResultWriter::new(&a).write(&set).unwrap();
        ResultWriter::new(&b).write(&set).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }
}
