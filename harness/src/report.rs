//! In-memory run report: the artifacts of one solve-and-execute run.
//!
//! Each artifact is tagged `normative` (participates in the report digest)
//! or observational (listed in the manifest, excluded from the digest).
//!
//! The report digest is computed over the **digest basis**: a canonical
//! JSON projection of normative artifact hashes only. Two runs of the same
//! level under the same policy produce the same digest.

use std::collections::BTreeMap;
use std::path::Path;

use tilebot_kernel::proof::canon::canonical_json_bytes;
use tilebot_kernel::proof::hash::{canonical_hash, ContentHash};
use tilebot_kernel::proof::hash_domain::HashDomain;

/// Report digest file written next to the artifacts.
pub const DIGEST_FILENAME: &str = "report_digest.txt";
/// Manifest file written next to the artifacts.
pub const MANIFEST_FILENAME: &str = "report_manifest.json";

/// A single artifact in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    /// Logical filename (e.g., `"level.json"`).
    pub name: String,
    pub content: Vec<u8>,
    /// `canonical_hash(HashDomain::ReportArtifact, content)`.
    pub content_hash: ContentHash,
    /// Whether this artifact participates in the report digest.
    pub normative: bool,
}

#[derive(Debug, Clone)]
pub struct RunReportV1 {
    /// Artifacts indexed by logical name, in sorted order.
    pub artifacts: BTreeMap<String, ReportArtifact>,
    /// Canonical JSON listing all artifacts with normative flags.
    pub manifest: Vec<u8>,
    /// Canonical JSON listing normative artifact hashes only.
    pub digest_basis: Vec<u8>,
    /// `canonical_hash(HashDomain::ReportDigest, digest_basis)`.
    pub digest: ContentHash,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBuildError {
    CanonError { detail: String },
    DuplicateArtifact { name: String },
}

impl std::fmt::Display for ReportBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::DuplicateArtifact { name } => write!(f, "duplicate artifact: {name}"),
        }
    }
}

impl std::error::Error for ReportBuildError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportVerifyError {
    ContentHashMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },
    ManifestMismatch,
    DigestBasisMismatch,
    DigestMismatch { expected: String, actual: String },
    /// A normative `.json` artifact is not in canonical JSON form.
    ArtifactNotCanonical { artifact: String },
    CanonError { detail: String },
}

impl std::fmt::Display for ReportVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentHashMismatch {
                artifact,
                expected,
                actual,
            } => write!(
                f,
                "content hash mismatch for {artifact}: expected {expected}, got {actual}"
            ),
            Self::ManifestMismatch => write!(f, "manifest does not match artifacts"),
            Self::DigestBasisMismatch => write!(f, "digest basis does not match artifacts"),
            Self::DigestMismatch { expected, actual } => {
                write!(f, "digest mismatch: expected {expected}, got {actual}")
            }
            Self::ArtifactNotCanonical { artifact } => {
                write!(f, "artifact is not canonical JSON: {artifact}")
            }
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportVerifyError {}

/// Input for report assembly.
pub struct ArtifactInput {
    pub name: String,
    pub content: Vec<u8>,
    pub normative: bool,
}

impl From<(String, Vec<u8>, bool)> for ArtifactInput {
    fn from((name, content, normative): (String, Vec<u8>, bool)) -> Self {
        Self {
            name,
            content,
            normative,
        }
    }
}

impl From<(&str, Vec<u8>, bool)> for ArtifactInput {
    fn from((name, content, normative): (&str, Vec<u8>, bool)) -> Self {
        Self {
            name: name.to_string(),
            content,
            normative,
        }
    }
}

/// Build a report from artifact inputs.
///
/// # Errors
///
/// [`ReportBuildError::DuplicateArtifact`] if two inputs share a name,
/// [`ReportBuildError::CanonError`] if the manifest cannot be serialized.
pub fn build_report(
    artifacts: Vec<impl Into<ArtifactInput>>,
) -> Result<RunReportV1, ReportBuildError> {
    let mut artifact_map = BTreeMap::new();

    for input in artifacts {
        let input = input.into();
        if artifact_map.contains_key(&input.name) {
            return Err(ReportBuildError::DuplicateArtifact { name: input.name });
        }
        let content_hash = canonical_hash(HashDomain::ReportArtifact, &input.content);
        artifact_map.insert(
            input.name.clone(),
            ReportArtifact {
                name: input.name,
                content: input.content,
                content_hash,
                normative: input.normative,
            },
        );
    }

    let manifest = compute_manifest_bytes(&artifact_map)
        .map_err(|detail| ReportBuildError::CanonError { detail })?;
    let digest_basis = compute_digest_basis_bytes(&artifact_map)
        .map_err(|detail| ReportBuildError::CanonError { detail })?;
    let digest = canonical_hash(HashDomain::ReportDigest, &digest_basis);

    Ok(RunReportV1 {
        artifacts: artifact_map,
        manifest,
        digest_basis,
        digest,
    })
}

impl RunReportV1 {
    #[must_use]
    pub fn artifact(&self, name: &str) -> Option<&ReportArtifact> {
        self.artifacts.get(name)
    }

    /// Parse an artifact's content as JSON.
    #[must_use]
    pub fn artifact_json(&self, name: &str) -> Option<serde_json::Value> {
        self.artifact(name)
            .and_then(|a| serde_json::from_slice(&a.content).ok())
    }

    /// Recompute every hash and projection and compare with what is stored.
    ///
    /// # Errors
    ///
    /// The first [`ReportVerifyError`] encountered.
    pub fn verify(&self) -> Result<(), ReportVerifyError> {
        for artifact in self.artifacts.values() {
            let recomputed = canonical_hash(HashDomain::ReportArtifact, &artifact.content);
            if recomputed != artifact.content_hash {
                return Err(ReportVerifyError::ContentHashMismatch {
                    artifact: artifact.name.clone(),
                    expected: artifact.content_hash.as_str().to_string(),
                    actual: recomputed.as_str().to_string(),
                });
            }
        }

        let expected_manifest = compute_manifest_bytes(&self.artifacts)
            .map_err(|detail| ReportVerifyError::CanonError { detail })?;
        if expected_manifest != self.manifest {
            return Err(ReportVerifyError::ManifestMismatch);
        }

        let expected_basis = compute_digest_basis_bytes(&self.artifacts)
            .map_err(|detail| ReportVerifyError::CanonError { detail })?;
        if expected_basis != self.digest_basis {
            return Err(ReportVerifyError::DigestBasisMismatch);
        }

        let recomputed_digest = canonical_hash(HashDomain::ReportDigest, &self.digest_basis);
        if recomputed_digest != self.digest {
            return Err(ReportVerifyError::DigestMismatch {
                expected: self.digest.as_str().to_string(),
                actual: recomputed_digest.as_str().to_string(),
            });
        }

        for artifact in self.artifacts.values() {
            let is_json = Path::new(&artifact.name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if artifact.normative && is_json && !is_canonical_json(&artifact.content) {
                return Err(ReportVerifyError::ArtifactNotCanonical {
                    artifact: artifact.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Write every artifact plus the manifest and digest into `dir`.
    ///
    /// Creates `dir` if needed. The directory path is not hashed.
    ///
    /// # Errors
    ///
    /// Any I/O error from creating the directory or writing a file.
    pub fn write_to_dir(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        for artifact in self.artifacts.values() {
            std::fs::write(dir.join(&artifact.name), &artifact.content)?;
        }
        std::fs::write(dir.join(MANIFEST_FILENAME), &self.manifest)?;
        std::fs::write(dir.join(DIGEST_FILENAME), self.digest.as_str())?;
        Ok(())
    }
}

fn compute_manifest_bytes(artifacts: &BTreeMap<String, ReportArtifact>) -> Result<Vec<u8>, String> {
    let listed: Vec<serde_json::Value> = artifacts
        .values()
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
                "normative": a.normative,
            })
        })
        .collect();

    canonical_json_bytes(&serde_json::json!({
        "artifacts": listed,
        "schema_version": "run_report.v1",
    }))
    .map_err(|e| e.to_string())
}

fn compute_digest_basis_bytes(
    artifacts: &BTreeMap<String, ReportArtifact>,
) -> Result<Vec<u8>, String> {
    let normative: Vec<serde_json::Value> = artifacts
        .values()
        .filter(|a| a.normative)
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
            })
        })
        .collect();

    canonical_json_bytes(&serde_json::json!({
        "artifacts": normative,
        "schema_version": "run_report_digest_basis.v1",
    }))
    .map_err(|e| e.to_string())
}

fn is_canonical_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|value| canonical_json_bytes(&value).ok())
        .is_some_and(|canon| canon == bytes)
}
