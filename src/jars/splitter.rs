use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::models::SplitSummary;

/// `-1.2.3`, `-2.0`, `-3.1.Final`, `-31.1-jre` and the like before `.jar`.
static VERSIONED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*-\d+(\.\d+)+([.-][A-Za-z0-9]+)*\.jar$").expect("versioned jar pattern is valid")
});

pub fn has_version(jar: &str) -> bool {
    VERSIONED.is_match(jar)
}

/// Partition jar names by [`has_version`], preserving input order.
pub fn partition<S: AsRef<str>>(jars: &[S]) -> (Vec<&str>, Vec<&str>) {
    jars.iter().map(|j| j.as_ref()).partition(|j| has_version(j))
}

/// Write the versioned and unversioned names to their own files.
pub fn split_to_files<S: AsRef<str>>(
    jars: &[S],
    with_version_file: &Path,
    without_version_file: &Path,
) -> Result<SplitSummary> {
    let (with_version, without_version) = partition(jars);
    debug!(
        "{} jars with version, {} without",
        with_version.len(),
        without_version.len()
    );

    write_names(with_version_file, &with_version)?;
    write_names(without_version_file, &without_version)?;

    Ok(SplitSummary {
        total: jars.len(),
        with_version: with_version.len(),
        without_version: without_version.len(),
        with_version_file: with_version_file.to_path_buf(),
        without_version_file: without_version_file.to_path_buf(),
    })
}

pub(crate) fn write_names(path: &Path, names: &[&str]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for name in names {
        writeln!(out, "{}", name)?;
    }
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))
}
