use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to rendered documents.
pub const OUTPUT_EXTENSION: &str = "pdf";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid input folder: {0}")]
    InvalidInputDir(PathBuf),
}

/// Read a summary file as UTF-8 text
pub fn read_summary(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Find input files directly inside `dir` whose extension matches, case-insensitively
pub fn discover_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidInputDir(dir.to_path_buf()));
    }

    let io_err = |source| IoError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();

        if path.is_file()
            && let Some(ext) = path.extension()
            && ext.to_string_lossy().eq_ignore_ascii_case(extension)
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// `<stem>.pdf` inside `output_dir`
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    output_dir.join(name)
}

/// The input path with its extension replaced by `pdf`
pub fn default_output_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_summary_dir};

    #[test]
    fn test_discover_inputs() {
        // Given a folder with summary files
        let dir = create_test_summary_dir();
        create_test_file(&dir, "b.txt", "# B");
        create_test_file(&dir, "a.txt", "# A");

        // When discovering inputs
        let files = discover_inputs(dir.path(), "txt").unwrap();

        // Then both are found in name order
        let names: Vec<_> = files.iter().map(|f| f.file_name().unwrap()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_discover_ignores_other_extensions() {
        let dir = create_test_summary_dir();
        create_test_file(&dir, "summary.txt", "# Summary");
        create_test_file(&dir, "notes.md", "# Notes");
        create_test_file(&dir, "existing.pdf", "%PDF");

        let files = discover_inputs(dir.path(), "txt").unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "summary.txt");
    }

    #[test]
    fn test_discover_extension_is_case_insensitive() {
        let dir = create_test_summary_dir();
        create_test_file(&dir, "LOUD.TXT", "# Loud");

        let files = discover_inputs(dir.path(), "txt").unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_discover_is_not_recursive() {
        let dir = create_test_summary_dir();
        create_test_file(&dir, "top.txt", "# Top");
        let sub_dir = dir.path().join("nested.txt");
        fs::create_dir(&sub_dir).unwrap();
        fs::write(sub_dir.join("inner.txt"), "# Inner").unwrap();

        let files = discover_inputs(dir.path(), "txt").unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "top.txt");
    }

    #[test]
    fn test_discover_missing_folder() {
        let result = discover_inputs(Path::new("/this/path/does/not/exist"), "txt");
        assert!(matches!(result, Err(IoError::InvalidInputDir(_))));
    }

    #[test]
    fn test_read_summary_success() {
        let dir = create_test_summary_dir();
        let path = create_test_file(&dir, "s.txt", "# Title\n\nBody");

        assert_eq!(read_summary(&path).unwrap(), "# Title\n\nBody");
    }

    #[test]
    fn test_read_summary_not_found() {
        let dir = create_test_summary_dir();
        let result = read_summary(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_summary_invalid_utf8() {
        let dir = create_test_summary_dir();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let result = read_summary(&path);
        assert!(matches!(result, Err(IoError::Io { .. })));
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(
            output_path_for(Path::new("in/book.summary.txt"), Path::new("out")),
            PathBuf::from("out/book.summary.pdf")
        );
        assert_eq!(
            default_output_for(Path::new("in/book.txt")),
            PathBuf::from("in/book.pdf")
        );
    }
}
