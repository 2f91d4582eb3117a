//! JSON file store for the editor collections.
//!
//! Each collection lives in its own file inside the assets directory. A missing
//! file reads as an empty collection. Writes replace the whole file through a
//! temp file in the same directory plus a rename, so readers never see a
//! half-written document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use zbierka_domain::{
    normalize_artifacts, normalize_possibilities, Artifact, CollectionKind, Possibility,
};

use crate::infrastructure::ports::{
    ArtifactRepo, CollectionVersion, ExpectedVersions, PossibilityRepo, RepoError, Versioned,
};

/// Bytes of an empty collection; also what a missing file hashes as.
const EMPTY_COLLECTION: &[u8] = b"[]";

pub struct JsonCollectionStore {
    assets_dir: PathBuf,
    artifacts_lock: Mutex<()>,
    possibilities_lock: Mutex<()>,
}

impl JsonCollectionStore {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            artifacts_lock: Mutex::new(()),
            possibilities_lock: Mutex::new(()),
        }
    }

    pub fn shared(assets_dir: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self::new(assets_dir))
    }

    pub fn path_for(&self, kind: CollectionKind) -> PathBuf {
        self.assets_dir.join(kind.file_name())
    }

    fn lock_for(&self, kind: CollectionKind) -> &Mutex<()> {
        match kind {
            CollectionKind::Artifacts => &self.artifacts_lock,
            CollectionKind::Possibilities => &self.possibilities_lock,
        }
    }

    /// Raw bytes of a collection file, or `[]` if it does not exist.
    async fn read_bytes(&self, kind: CollectionKind) -> Result<Vec<u8>, RepoError> {
        let path = self.path_for(kind);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    collection = %kind,
                    path = %path.display(),
                    "Collection file missing, treating as empty"
                );
                Ok(EMPTY_COLLECTION.to_vec())
            }
            Err(e) => Err(RepoError::io(
                "read_collection",
                format!("{}: {e}", path.display()),
            )),
        }
    }

    /// Read a collection as untyped JSON records plus its version.
    pub async fn read_values(
        &self,
        kind: CollectionKind,
    ) -> Result<(Vec<Value>, CollectionVersion), RepoError> {
        let bytes = self.read_bytes(kind).await?;
        let version = version_of(&bytes);
        let records: Vec<Value> = serde_json::from_slice(&bytes)
            .map_err(|e| RepoError::serialization(format!("{}: {e}", kind.file_name())))?;
        Ok((records, version))
    }

    /// Replace a collection file with `records`, tab-indented.
    ///
    /// The expected-version check and the write happen under the collection's
    /// lock, so two writers in this process cannot interleave between them.
    pub async fn write_records<T: Serialize>(
        &self,
        kind: CollectionKind,
        records: &[T],
        expected: Option<&ExpectedVersions>,
    ) -> Result<CollectionVersion, RepoError> {
        let bytes = to_tab_indented_json(records)?;
        let _guard = self.lock_for(kind).lock().await;

        if let Some(expected) = expected {
            let actual = version_of(&self.read_bytes(kind).await?);
            if !expected.matches(&actual) {
                return Err(RepoError::Conflict {
                    collection: kind,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }

        let version = version_of(&bytes);
        let path = self.path_for(kind);
        let count = records.len();
        tokio::task::spawn_blocking(move || atomic_write(&path, &bytes))
            .await
            .map_err(|e| RepoError::io("write_collection", e))??;

        tracing::info!(
            collection = %kind,
            records = count,
            version = %version,
            "Collection replaced"
        );
        Ok(version)
    }
}

#[async_trait]
impl ArtifactRepo for JsonCollectionStore {
    async fn list(&self) -> Result<Versioned<Artifact>, RepoError> {
        let (values, version) = self.read_values(CollectionKind::Artifacts).await?;
        let records = normalize_artifacts(values).map_err(RepoError::serialization)?;
        Ok(Versioned { records, version })
    }

    async fn replace_all(
        &self,
        artifacts: Vec<Artifact>,
        expected: Option<ExpectedVersions>,
    ) -> Result<CollectionVersion, RepoError> {
        self.write_records(CollectionKind::Artifacts, &artifacts, expected.as_ref())
            .await
    }
}

#[async_trait]
impl PossibilityRepo for JsonCollectionStore {
    async fn list(&self) -> Result<Versioned<Possibility>, RepoError> {
        let (values, version) = self.read_values(CollectionKind::Possibilities).await?;
        let records = normalize_possibilities(values).map_err(RepoError::serialization)?;
        Ok(Versioned { records, version })
    }

    async fn replace_all(
        &self,
        possibilities: Vec<Possibility>,
        expected: Option<ExpectedVersions>,
    ) -> Result<CollectionVersion, RepoError> {
        self.write_records(CollectionKind::Possibilities, &possibilities, expected.as_ref())
            .await
    }
}

/// sha256 of the stored bytes, hex encoded.
pub fn version_of(bytes: &[u8]) -> CollectionVersion {
    CollectionVersion::new(hex::encode(Sha256::digest(bytes)))
}

fn to_tab_indented_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, RepoError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(RepoError::serialization)?;
    Ok(buf)
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<(), RepoError> {
    let dir = path
        .parent()
        .ok_or_else(|| RepoError::io("write_collection", "collection path has no parent"))?;
    std::fs::create_dir_all(dir)
        .map_err(|e| RepoError::io("write_collection", format!("{}: {e}", dir.display())))?;
    let temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        RepoError::io(
            "write_collection",
            format!("temp file in {}: {e}", dir.display()),
        )
    })?;
    std::fs::write(temp.path(), data)
        .map_err(|e| RepoError::io("write_collection", format!("temp file: {e}")))?;
    temp.persist(path).map_err(|e| {
        RepoError::io("write_collection", format!("{}: {e}", path.display()))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zbierka_domain::{ArtifactId, PossibilityId, PossibilityRef};

    fn ring() -> Artifact {
        let mut artifact = Artifact::new(ArtifactId::new("ring"), "Ring", "Found in the river");
        artifact
            .possibilities
            .push(PossibilityRef::new(PossibilityId::new("dust")));
        artifact
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonCollectionStore::new(dir.path());

        let artifacts = ArtifactRepo::list(&store).await.expect("list");
        assert!(artifacts.records.is_empty());
        assert_eq!(artifacts.version, version_of(b"[]"));

        let possibilities = PossibilityRepo::list(&store).await.expect("list");
        assert!(possibilities.records.is_empty());
    }

    #[tokio::test]
    async fn written_collection_reads_back_equal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonCollectionStore::new(dir.path());
        let possibilities = vec![
            Possibility::new(PossibilityId::new("dust"), "Dust"),
            Possibility::new(PossibilityId::new("ash"), "Ash").with_description("grey"),
        ];

        let version = PossibilityRepo::replace_all(&store, possibilities.clone(), None)
            .await
            .expect("write");
        let read = PossibilityRepo::list(&store).await.expect("read");

        assert_eq!(read.records, possibilities);
        assert_eq!(read.version, version);
    }

    #[tokio::test]
    async fn files_are_tab_indented() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonCollectionStore::new(dir.path());

        ArtifactRepo::replace_all(&store, vec![ring()], None)
            .await
            .expect("write");

        let text = std::fs::read_to_string(dir.path().join("artifacts.json")).expect("read file");
        assert!(text.starts_with("[\n\t{\n\t\t\"id\": \"ring\""), "got: {text}");
    }

    #[tokio::test]
    async fn assets_dir_is_created_on_first_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonCollectionStore::new(dir.path().join("nested").join("assets"));

        ArtifactRepo::replace_all(&store, vec![ring()], None)
            .await
            .expect("write");

        assert!(store.path_for(CollectionKind::Artifacts).exists());
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("artifacts.json"), "{ not json").expect("seed");
        let store = JsonCollectionStore::new(dir.path());

        let err = ArtifactRepo::list(&store).await.expect_err("must fail");
        assert!(matches!(err, RepoError::Serialization(_)));
    }

    #[tokio::test]
    async fn legacy_file_is_normalized_on_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("artifacts.json"),
            r#"[{"name": "Coin", "description": "copper"}]"#,
        )
        .expect("seed");
        let store = JsonCollectionStore::new(dir.path());

        let artifacts = ArtifactRepo::list(&store).await.expect("list");
        assert_eq!(artifacts.records[0].id, "artifact-0");
        assert!(artifacts.records[0].possibilities.is_empty());
    }

    #[tokio::test]
    async fn stale_version_is_rejected_and_file_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonCollectionStore::new(dir.path());

        let first = ArtifactRepo::list(&store).await.expect("list").version;
        ArtifactRepo::replace_all(&store, vec![ring()], Some(first.clone().into()))
            .await
            .expect("first write matches");

        let err = ArtifactRepo::replace_all(&store, Vec::new(), Some(first.into()))
            .await
            .expect_err("stale token");
        assert!(err.is_conflict());

        let stored = ArtifactRepo::list(&store).await.expect("list");
        assert_eq!(stored.records, vec![ring()]);
    }

    #[tokio::test]
    async fn any_matching_version_allows_the_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonCollectionStore::new(dir.path());
        let current = ArtifactRepo::list(&store).await.expect("list").version;
        let expected =
            ExpectedVersions::any_of([CollectionVersion::new("stale"), current]).expect("versions");

        ArtifactRepo::replace_all(&store, vec![ring()], Some(expected))
            .await
            .expect("one version matches");

        let stored = ArtifactRepo::list(&store).await.expect("list");
        assert_eq!(stored.records, vec![ring()]);
    }

    #[tokio::test]
    async fn concurrent_writes_leave_one_complete_body() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Arc::new(JsonCollectionStore::new(dir.path()));
        let one = vec![ring()];
        let two = vec![
            Artifact::new(ArtifactId::new("coin"), "Coin", ""),
            Artifact::new(ArtifactId::new("key"), "Key", ""),
        ];

        let (a, b) = tokio::join!(
            ArtifactRepo::replace_all(store.as_ref(), one.clone(), None),
            ArtifactRepo::replace_all(store.as_ref(), two.clone(), None),
        );
        a.expect("first write");
        b.expect("second write");

        let stored = ArtifactRepo::list(store.as_ref()).await.expect("list").records;
        assert!(stored == one || stored == two, "unexpected merge: {stored:?}");
    }
}
