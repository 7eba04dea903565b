use std::path::{Path, PathBuf};

use crate::error::RemitoError;

/// Find the PDF documents directly inside `dir`, sorted by file name.
///
/// Matching is on the `.pdf` extension, ignoring ASCII case. Subdirectories
/// are not searched.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>, RemitoError> {
    let entries = std::fs::read_dir(dir).map_err(|source| RemitoError::Discovery {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RemitoError::Discovery {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_pdf(&path) {
            documents.push(path);
        }
    }

    documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("found {} document(s) in {}", documents.len(), dir.display());
    Ok(documents)
}

/// File name used to tag product lines from `path`.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "A.PDF", "notes.txt", "c.pdf.bak", "a.pdf"] {
            std::fs::write(dir.path().join(name), b"%PDF-1.4").unwrap();
        }
        std::fs::create_dir(dir.path().join("sub.pdf")).unwrap();

        let found = discover_documents(dir.path()).unwrap();
        let names: Vec<String> = found.iter().map(|p| document_name(p)).collect();
        assert_eq!(names, vec!["A.PDF", "a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_documents(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            discover_documents(&missing),
            Err(RemitoError::Discovery { .. })
        ));
    }
}
