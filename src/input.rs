use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read every line of `path`, or of stdin when `path` is `-`.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    Ok(content.lines().map(str::to_string).collect())
}

/// Jar filenames from a list file: trimmed, blank lines skipped.
pub fn read_jar_names(path: &Path) -> Result<Vec<String>> {
    Ok(read_lines(path)?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_jar_names_skips_blank_lines() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "  guava-31.1-jre.jar  ").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "commons-io.jar").unwrap();

        let names = read_jar_names(f.path()).unwrap();
        assert_eq!(names, vec!["guava-31.1-jre.jar", "commons-io.jar"]);
    }

    #[test]
    fn test_read_lines_keeps_indentation() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[INFO] +- a:b:jar:1:compile").unwrap();
        writeln!(f, "[INFO] |  \\- c:d:jar:1:compile").unwrap();

        let lines = read_lines(f.path()).unwrap();
        assert_eq!(lines[1], "[INFO] |  \\- c:d:jar:1:compile");
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_lines(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
