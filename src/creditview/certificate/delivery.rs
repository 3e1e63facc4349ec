//! Where exported certificates go.
//!
//! - [`DirectoryDelivery`]: writes `certificate-<id>.<ext>` into a directory.
//! - [`MemoryDelivery`]: keeps artifacts in memory (tests, embedding hosts).

use super::Artifact;
use crate::error::{CreditError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

pub trait Delivery {
    /// Saves the artifact. Returns its location when the sink has one.
    fn deliver(&mut self, artifact: &Artifact) -> Result<Option<PathBuf>>;
}

pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&mut self, artifact: &Artifact) -> Result<Option<PathBuf>> {
        let failed = |e: std::io::Error| CreditError::Delivery {
            filename: artifact.filename.clone(),
            reason: e.to_string(),
        };

        let path = self.dir.join(&artifact.filename);
        if !is_plain_file_name(&artifact.filename) || path.parent() != Some(self.dir.as_path()) {
            return Err(CreditError::Delivery {
                filename: artifact.filename.clone(),
                reason: format!("not a file name inside {}", self.dir.display()),
            });
        }

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(failed)?;
        }
        fs::write(&path, &artifact.bytes).map_err(failed)?;
        Ok(Some(path))
    }
}

fn is_plain_file_name(filename: &str) -> bool {
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[derive(Debug, Default)]
pub struct MemoryDelivery {
    delivered: Vec<Artifact>,
    fail_with: Option<String>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every artifact with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            delivered: Vec::new(),
            fail_with: Some(reason.into()),
        }
    }

    pub fn delivered(&self) -> &[Artifact] {
        &self.delivered
    }
}

impl Delivery for MemoryDelivery {
    fn deliver(&mut self, artifact: &Artifact) -> Result<Option<PathBuf>> {
        if let Some(reason) = &self.fail_with {
            return Err(CreditError::Delivery {
                filename: artifact.filename.clone(),
                reason: reason.clone(),
            });
        }
        self.delivered.push(artifact.clone());
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::{CertificateExporter, ExportFormat};
    use crate::clock::ManualClock;
    use crate::model::{Record, Status};
    use chrono::DateTime;

    fn artifact() -> Artifact {
        Artifact {
            filename: "certificate-A.html".to_string(),
            media_type: "text/html",
            bytes: b"<h1>hi</h1>".to_vec(),
        }
    }

    #[test]
    fn directory_delivery_creates_dir_and_writes_file() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("nested").join("certs");
        let mut sink = DirectoryDelivery::new(&out);

        let path = sink.deliver(&artifact()).unwrap().unwrap();

        assert_eq!(sink.dir(), out.as_path());
        assert_eq!(path, out.join("certificate-A.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<h1>hi</h1>");
    }

    #[test]
    fn directory_delivery_reports_write_failure() {
        let temp = tempfile::tempdir().unwrap();
        // A file where the directory should be.
        let blocker = temp.path().join("certs");
        fs::write(&blocker, "").unwrap();
        let mut sink = DirectoryDelivery::new(blocker.join("inner"));

        let err = sink.deliver(&artifact()).unwrap_err();
        assert!(matches!(err, CreditError::Delivery { .. }));
    }

    #[test]
    fn id_with_separator_is_saved_inside_the_directory() {
        let temp = tempfile::tempdir().unwrap();
        let clock =
            ManualClock::new(DateTime::parse_from_rfc3339("2024-03-14T09:05:07+00:00").unwrap());
        let mut exporter =
            CertificateExporter::with_clock(DirectoryDelivery::new(temp.path()), clock);
        let record = Record::new("VCS/1234", "Forest1", 2021, Status::Retired);

        let outcome = exporter.export(&record, ExportFormat::Markup).unwrap();

        let expected = temp.path().join("certificate-VCS_1234.html");
        assert_eq!(outcome.filename, "certificate-VCS_1234.html");
        assert_eq!(outcome.location, Some(expected.clone()));
        let html = fs::read_to_string(expected).unwrap();
        assert!(html.contains("VCS/1234") || html.contains("VCS&#x2f;1234"));
    }

    #[test]
    fn directory_delivery_refuses_paths() {
        let temp = tempfile::tempdir().unwrap();
        let mut sink = DirectoryDelivery::new(temp.path().join("certs"));

        for filename in ["sub/certificate-A.html", "../certificate-A.html", ".."] {
            let artifact = Artifact {
                filename: filename.to_string(),
                ..artifact()
            };
            let err = sink.deliver(&artifact).unwrap_err();
            assert!(matches!(err, CreditError::Delivery { .. }), "{filename}");
        }
        assert!(!temp.path().join("certificate-A.html").exists());
    }
}
