//! Revision operations.

use super::{join_fields, require_id, require_present, GoogleDriveConnector};
use crate::client::encode_path;
use crate::errors::DriveResult;
use crate::model::{Revision, RevisionList};
use crate::transport::ByteStream;
use serde::Serialize;

#[derive(Serialize)]
struct FieldsQuery {
    fields: String,
}

impl GoogleDriveConnector {
    /// Streams the content of a revision.
    ///
    /// The revision's `downloadUrl` must be present and non-blank; a
    /// missing revision or URL fails with an invalid-argument error before
    /// any request is issued.
    pub async fn download_revision(&self, revision: Option<&Revision>) -> DriveResult<ByteStream> {
        self.download(revision.and_then(|r| r.download_url.as_deref()))
            .await
    }

    /// Gets a particular revision of a file.
    pub async fn get_revision(&self, file_id: &str, revision_id: &str) -> DriveResult<Revision> {
        require_id("file id", file_id)?;
        require_id("revision id", revision_id)?;
        let path = format!(
            "/files/{}/revisions/{}",
            encode_path(file_id),
            encode_path(revision_id)
        );
        self.client()?.get(&path).await
    }

    /// Removes a particular revision of a file.
    pub async fn delete_revision(&self, file_id: &str, revision_id: &str) -> DriveResult<()> {
        require_id("file id", file_id)?;
        require_id("revision id", revision_id)?;
        let path = format!(
            "/files/{}/revisions/{}",
            encode_path(file_id),
            encode_path(revision_id)
        );
        self.client()?.delete(&path).await
    }

    /// Lists a file's revisions.
    pub async fn list_revisions(&self, file_id: &str) -> DriveResult<Vec<Revision>> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}/revisions", encode_path(file_id));
        let list: RevisionList = self.client()?.get(&path).await?;
        Ok(list.items)
    }

    /// Makes a partial update to a revision's metadata. Only the fields
    /// named in `fields` are applied; the mask is sent exactly as given, in
    /// input order.
    pub async fn patch_revision(
        &self,
        file_id: &str,
        revision: &Revision,
        fields: &[&str],
    ) -> DriveResult<Revision> {
        require_id("file id", file_id)?;
        let id = require_present("revision id", revision.id.as_deref())?;
        let path = format!(
            "/files/{}/revisions/{}",
            encode_path(file_id),
            encode_path(id)
        );

        let query = FieldsQuery {
            fields: join_fields(fields),
        };

        self.client()?
            .patch_with_params(&path, &query, revision)
            .await
    }

    /// Replaces a revision's metadata with the supplied state.
    pub async fn update_revision(
        &self,
        file_id: &str,
        revision: &Revision,
    ) -> DriveResult<Revision> {
        require_id("file id", file_id)?;
        let id = require_present("revision id", revision.id.as_deref())?;
        let path = format!(
            "/files/{}/revisions/{}",
            encode_path(file_id),
            encode_path(id)
        );
        self.client()?.put(&path, revision).await
    }
}
