/// File intake: candidate files in, fresh entries out
///
/// Both intake surfaces (the file picker and window drops) funnel into
/// `accept`. Non-image candidates are skipped without any signal.
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::data::ReferenceEntry;
use super::handles::HandleRegistry;
use crate::error::{BoardError, Result};

/// Extensions offered by the file picker. Intake still checks the
/// declared content type of whatever comes back.
pub const PICKER_EXTENSIONS: [&str; 10] = [
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "avif",
];

/// A file offered for intake, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    /// MIME type, e.g. "image/png"
    pub content_type: Option<String>,
}

impl CandidateFile {
    /// Read metadata and declare a content type for the file at `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(BoardError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", path.display()),
            )));
        }

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size_bytes: metadata.len(),
            content_type: declare_content_type(path),
        })
    }

    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}

/// Content type from the extension, falling back to sniffing the header
/// when the extension says nothing.
fn declare_content_type(path: &Path) -> Option<String> {
    if let Some(mime) = mime_guess::from_path(path).first() {
        return Some(mime.essence_str().to_string());
    }

    let format = image::ImageReader::open(path)
        .ok()?
        .with_guessed_format()
        .ok()?
        .format()?;
    Some(format.to_mime_type().to_string())
}

/// Turn picked or dropped paths into candidates.
///
/// Directories are walked recursively. Files whose metadata cannot be
/// read are skipped with a warning.
pub fn collect_candidates(paths: Vec<PathBuf>) -> Vec<CandidateFile> {
    let mut candidates = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(&path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                push_candidate(&mut candidates, entry.path());
            }
        } else {
            push_candidate(&mut candidates, &path);
        }
    }

    candidates
}

fn push_candidate(candidates: &mut Vec<CandidateFile>, path: &Path) {
    match CandidateFile::from_path(path) {
        Ok(candidate) => candidates.push(candidate),
        Err(e) => warn!("⚠️  Skipping {}: {}", path.display(), e),
    }
}

/// Walk a dropped folder off the UI thread
pub async fn scan_folder(folder: PathBuf) -> Vec<CandidateFile> {
    tokio::task::spawn_blocking(move || collect_candidates(vec![folder]))
        .await
        .unwrap_or_else(|e| {
            warn!("⚠️  Folder scan failed: {}", e);
            Vec::new()
        })
}

/// Build entries for every image in `batch`.
///
/// Allocates exactly one handle per accepted file. All entries of a
/// batch share the `now` timestamp.
pub fn accept(
    batch: Vec<CandidateFile>,
    handles: &mut HandleRegistry,
    now: DateTime<Utc>,
) -> Vec<ReferenceEntry> {
    let offered = batch.len();

    let entries: Vec<ReferenceEntry> = batch
        .into_iter()
        .filter(CandidateFile::is_image)
        .map(|candidate| {
            let handle = handles.allocate(&candidate.path);
            let dimensions = image::image_dimensions(&candidate.path).ok();
            ReferenceEntry::new(
                candidate.name,
                candidate.size_bytes,
                dimensions,
                handle,
                now,
            )
        })
        .collect();

    debug!(
        "Intake: {} accepted, {} skipped",
        entries.len(),
        offered - entries.len()
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, content_type: Option<&str>) -> CandidateFile {
        CandidateFile {
            path: PathBuf::from(name),
            name: name.to_string(),
            size_bytes: 2048,
            content_type: content_type.map(str::to_string),
        }
    }

    #[test]
    fn test_accept_only_images() {
        let mut handles = HandleRegistry::new();
        let batch = vec![
            candidate("a.png", Some("image/png")),
            candidate("notes.txt", Some("text/plain")),
            candidate("b.jpg", Some("image/jpeg")),
            candidate("mystery", None),
        ];

        let entries = accept(batch, &mut handles, Utc::now());

        assert_eq!(entries.len(), 2);
        assert_eq!(handles.outstanding(), 2);
        assert_eq!(entries[0].name, "a.png");
        assert_eq!(entries[1].name, "b.jpg");
        assert!(entries.iter().all(|e| handles.contains(e.handle)));
    }

    #[test]
    fn test_accept_empty_when_nothing_matches() {
        let mut handles = HandleRegistry::new();
        let entries = accept(
            vec![candidate("doc.pdf", Some("application/pdf"))],
            &mut handles,
            Utc::now(),
        );
        assert!(entries.is_empty());
        assert_eq!(handles.outstanding(), 0);
    }

    #[test]
    fn test_accepted_entries_are_blank() {
        let mut handles = HandleRegistry::new();
        let now = Utc::now();
        let entries = accept(vec![candidate("a.png", Some("image/png"))], &mut handles, now);

        let entry = &entries[0];
        assert_eq!(entry.size_bytes, 2048);
        assert_eq!(entry.created_at, now);
        assert!(entry.notes.is_empty());
        assert!(entry.tags().is_empty());
        assert_eq!(entry.dimensions, None);
    }

    #[test]
    fn test_from_path_declares_type_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("photo.PNG");
        let text_path = dir.path().join("readme.txt");
        std::fs::write(&image_path, b"not really a png").unwrap();
        std::fs::write(&text_path, b"hello").unwrap();

        let image = CandidateFile::from_path(&image_path).unwrap();
        assert_eq!(image.name, "photo.PNG");
        assert_eq!(image.size_bytes, 16);
        assert!(image.is_image());

        let text = CandidateFile::from_path(&text_path).unwrap();
        assert!(!text.is_image());
    }

    #[test]
    fn test_from_path_sniffs_when_no_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pasted");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();

        let candidate = CandidateFile::from_path(&path).unwrap();
        assert_eq!(candidate.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_collect_candidates_walks_folders() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        std::fs::write(nested.join("b.gif"), b"x").unwrap();
        std::fs::write(nested.join("c.txt"), b"x").unwrap();

        let mut names: Vec<_> = collect_candidates(vec![dir.path().to_path_buf()])
            .into_iter()
            .map(|c| c.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.jpg", "b.gif", "c.txt"]);
    }

    #[test]
    fn test_collect_candidates_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = collect_candidates(vec![dir.path().join("gone.png")]);
        assert!(candidates.is_empty());
    }
}
