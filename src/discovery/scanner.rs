//! File system scanner for design files.
//!
//! Recursively scans directories for `.design.json`, `.design.yaml` and
//! `.design.yml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Serialization format of a design file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignFormat {
    Json,
    Yaml,
}

/// Result of scanning for design files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered design files, in walk order.
    pub designs: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.designs.extend(other.designs);
    }
}

/// Scan a directory for design files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if detect_design_format(path).is_some() {
            result.designs.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Detect the design format from a file name.
pub fn detect_design_format(path: &Path) -> Option<DesignFormat> {
    let filename = path.file_name()?.to_str()?;

    if filename.ends_with(".design.json") {
        Some(DesignFormat::Json)
    } else if filename.ends_with(".design.yaml") || filename.ends_with(".design.yml") {
        Some(DesignFormat::Yaml)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_design_format() {
        assert_eq!(detect_design_format(Path::new("a.design.json")), Some(DesignFormat::Json));
        assert_eq!(detect_design_format(Path::new("dir/b.design.yaml")), Some(DesignFormat::Yaml));
        assert_eq!(detect_design_format(Path::new("/abs/c.design.yml")), Some(DesignFormat::Yaml));
        assert_eq!(detect_design_format(Path::new("design.json")), None);
        assert_eq!(detect_design_format(Path::new("notes.txt")), None);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(dir.path(), &Manifest::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(&dir.path().join("nope"), &Manifest::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_recursive_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.design.json"), "{}").unwrap();
        fs::write(dir.path().join("a.design.yaml"), "").unwrap();
        fs::write(dir.path().join("nested/c.design.json"), "{}").unwrap();
        fs::write(dir.path().join("readme.md"), "# Readme").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());

        let names: Vec<String> = result
            .designs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.design.yaml", "b.design.json", "c.design.json"]);
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("keep.design.json"), "{}").unwrap();
        fs::write(dir.path().join("drafts/skip.design.json"), "{}").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
        assert!(result.designs[0].ends_with("keep.design.json"));
    }

    #[test]
    fn test_scan_sources() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("one")).unwrap();
        fs::create_dir_all(dir.path().join("two")).unwrap();
        fs::write(dir.path().join("one/a.design.json"), "{}").unwrap();
        fs::write(dir.path().join("two/b.design.json"), "{}").unwrap();

        let sources = vec!["one/".to_string(), "two".to_string()];
        let result = scan_sources(&sources, dir.path(), &Manifest::default());

        assert_eq!(result.total(), 2);
    }
}
