//! Department discovery.
//!
//! Layout: `<root>/<category>/<department>/*.csv`. Departments and their
//! files are returned in lexicographic order so that every run folds rows in
//! the same sequence.

use std::path::{Path, PathBuf};

use genlist_model::Category;
use tracing::debug;

use crate::error::{IngestError, Result};

/// One department directory and the data files it contributes.
#[derive(Debug, Clone)]
pub struct Department {
    /// Directory name, used as provenance tag.
    pub name: String,
    pub path: PathBuf,
    /// CSV files, sorted by file name.
    pub files: Vec<PathBuf>,
}

/// All department sources found for one category.
#[derive(Debug, Clone)]
pub struct CategorySource {
    pub category: Category,
    /// The category directory (`<root>/<tag>`).
    pub dir: PathBuf,
    /// Departments sorted by name.
    pub departments: Vec<Department>,
}

impl CategorySource {
    /// Number of department directories scanned, with or without data files.
    pub fn total_departments(&self) -> usize {
        self.departments.len()
    }

    /// Every (department, file) pair in processing order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.departments.iter().flat_map(|department| {
            department
                .files
                .iter()
                .map(move |file| (department.name.as_str(), file.as_path()))
        })
    }

    pub fn file_count(&self) -> usize {
        self.departments.iter().map(|d| d.files.len()).sum()
    }
}

/// Discovers department sources for `category` below `root`.
///
/// Returns `Ok(None)` when the category directory does not exist.
pub fn discover_category(root: &Path, category: Category) -> Result<Option<CategorySource>> {
    let dir = root.join(category.as_str());
    if !dir.is_dir() {
        debug!(category = %category, path = %dir.display(), "category directory missing, skipping");
        return Ok(None);
    }

    let mut departments = Vec::new();
    for path in list_subdirectories(&dir)? {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let files = list_csv_files(&path)?;
        debug!(
            category = %category,
            department = %name,
            files = files.len(),
            "discovered department"
        );
        departments.push(Department { name, path, files });
    }

    Ok(Some(CategorySource {
        category,
        dir,
        departments,
    }))
}

/// Lists the immediate sub-directories of `dir`, sorted by name.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = read_entries(dir)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = read_entries(dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| {
            // Check for .csv extension (case-insensitive)
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn read_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        paths.push(entry.path());
    }
    Ok(paths)
}
