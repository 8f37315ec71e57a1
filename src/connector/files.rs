//! File operations.

use super::{join_fields, require_id, require_present, GoogleDriveConnector};
use crate::client::encode_path;
use crate::errors::DriveResult;
use crate::model::{File, FileList};
use crate::pagination::{save_page_token, ExecutionContext, NEXT_PAGE_TOKEN};
use crate::stream::StreamContent;
use crate::transport::{ByteStream, MultipartBody, RequestBody};
use bytes::Bytes;
use serde::Serialize;

/// Options applied when uploading new content.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Whether to attempt OCR on jpg, png, gif, or pdf uploads.
    pub ocr: bool,
    /// Language hint for OCR (ISO 639-1 code).
    pub ocr_language: String,
    /// Whether to convert the file to the corresponding Google Docs format.
    pub convert: bool,
    /// Whether to pin the head revision.
    pub pinned: bool,
    /// Whether to use the content as indexable text.
    pub index_content: bool,
    /// Language of the timed text.
    pub timed_text_language: Option<String>,
    /// Timed text track name.
    pub timed_text_track_name: Option<String>,
}

impl Default for UploadParams {
    fn default() -> Self {
        Self {
            ocr: false,
            ocr_language: "en".to_string(),
            convert: false,
            pinned: false,
            index_content: false,
            timed_text_language: None,
            timed_text_track_name: None,
        }
    }
}

/// Options applied when patching or updating file metadata.
#[derive(Debug, Clone)]
pub struct FileWriteParams {
    /// Whether to attempt OCR on jpg, png, gif, or pdf uploads.
    pub ocr: bool,
    /// Language hint for OCR (ISO 639-1 code).
    pub ocr_language: String,
    /// Whether to convert the file to the corresponding Google Docs format.
    pub convert: bool,
    /// Whether to pin the head revision.
    pub pinned: bool,
    /// Whether a blob upload creates a new revision instead of replacing
    /// the head revision's content.
    pub new_revision: bool,
    /// Whether to update the view date after the operation.
    pub update_viewed_date: bool,
    /// Whether to set the modified date from the supplied value.
    pub set_modified_date: bool,
    /// Language of the timed text.
    pub timed_text_language: Option<String>,
    /// Timed text track name.
    pub timed_text_track_name: Option<String>,
}

impl Default for FileWriteParams {
    fn default() -> Self {
        Self {
            ocr: false,
            ocr_language: "en".to_string(),
            convert: false,
            pinned: false,
            new_revision: false,
            update_viewed_date: false,
            set_modified_date: false,
            timed_text_language: None,
            timed_text_track_name: None,
        }
    }
}

/// Options applied when copying a file.
#[derive(Debug, Clone)]
pub struct CopyParams {
    /// Whether to attempt OCR on jpg, png, gif, or pdf uploads.
    pub ocr: bool,
    /// Language hint for OCR (ISO 639-1 code).
    pub ocr_language: String,
    /// Whether to convert the file to the corresponding Google Docs format.
    pub convert: bool,
    /// Whether to pin the head revision.
    pub pinned: bool,
    /// Language of the timed text.
    pub timed_text_language: Option<String>,
    /// Timed text track name.
    pub timed_text_track_name: Option<String>,
}

impl Default for CopyParams {
    fn default() -> Self {
        Self {
            ocr: false,
            ocr_language: "en".to_string(),
            convert: false,
            pinned: false,
            timed_text_language: None,
            timed_text_track_name: None,
        }
    }
}

/// Parameters for listing files.
#[derive(Debug, Clone)]
pub struct ListFilesParams {
    /// Maximum number of files per page.
    pub max_results: u32,
    /// Query string for searching files.
    pub query: Option<String>,
    /// Continuation token; falls back to the one stored in the execution
    /// context when unset.
    pub page_token: Option<String>,
}

impl Default for ListFilesParams {
    fn default() -> Self {
        Self {
            max_results: 100,
            query: None,
            page_token: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetFileQuery {
    update_viewed_date: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListFilesQuery<'a> {
    max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadQuery<'a> {
    upload_type: &'static str,
    ocr: bool,
    ocr_language: &'a str,
    convert: bool,
    pinned: bool,
    use_content_as_indexable_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    timed_text_language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timed_text_track_name: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileWriteQuery<'a> {
    ocr: bool,
    ocr_language: &'a str,
    convert: bool,
    pinned: bool,
    set_modified_date: bool,
    new_revision: bool,
    update_viewed_date: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    timed_text_language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timed_text_track_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CopyQuery<'a> {
    ocr: bool,
    ocr_language: &'a str,
    convert: bool,
    pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    timed_text_language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timed_text_track_name: Option<&'a str>,
}

impl GoogleDriveConnector {
    /// Returns the metadata of the file with the matching id.
    pub async fn get_file_metadata(
        &self,
        file_id: &str,
        update_viewed_date: bool,
    ) -> DriveResult<File> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}", encode_path(file_id));
        self.client()?
            .get_with_params(&path, &GetFileQuery { update_viewed_date })
            .await
    }

    /// Streams the content of a file.
    ///
    /// The file's `downloadUrl` must be present and non-blank; a missing
    /// file or URL fails with an invalid-argument error before any request
    /// is issued. The caller consumes (and thereby closes) the stream.
    pub async fn download_file(&self, file: Option<&File>) -> DriveResult<ByteStream> {
        self.download(file.and_then(|f| f.download_url.as_deref()))
            .await
    }

    /// Uploads a file: metadata from `file`, content from `content`.
    pub async fn upload(
        &self,
        file: &File,
        content: StreamContent,
        params: &UploadParams,
    ) -> DriveResult<File> {
        let query = UploadQuery {
            upload_type: "multipart",
            ocr: params.ocr,
            ocr_language: &params.ocr_language,
            convert: params.convert,
            pinned: params.pinned,
            use_content_as_indexable_text: params.index_content,
            timed_text_language: params.timed_text_language.as_deref(),
            timed_text_track_name: params.timed_text_track_name.as_deref(),
        };

        let client = self.client()?;

        let metadata = serde_json::to_vec(file)
            .map_err(|e| crate::errors::DriveError::response(format!(
                "Failed to serialize file metadata: {}",
                e
            )))?;
        let content_type = content.mime_type().to_string();
        let bytes = content.collect().await?;

        let body = RequestBody::Multipart(MultipartBody::new(
            Bytes::from(metadata),
            bytes,
            content_type,
        ));

        client.upload_multipart("/files", &query, body).await
    }

    /// Makes a partial update to the file's metadata. Only the fields named
    /// in `fields` are applied; the mask is sent exactly as given, in input
    /// order.
    pub async fn patch_file(
        &self,
        file: &File,
        fields: &[&str],
        params: &FileWriteParams,
    ) -> DriveResult<File> {
        let id = require_present("file id", file.id.as_deref())?;
        let path = format!("/files/{}", encode_path(id));

        let query = FileWriteQuery {
            ocr: params.ocr,
            ocr_language: &params.ocr_language,
            convert: params.convert,
            pinned: params.pinned,
            set_modified_date: params.set_modified_date,
            new_revision: params.new_revision,
            update_viewed_date: params.update_viewed_date,
            timed_text_language: params.timed_text_language.as_deref(),
            timed_text_track_name: params.timed_text_track_name.as_deref(),
            fields: Some(join_fields(fields)),
        };

        self.client()?.patch_with_params(&path, &query, file).await
    }

    /// Replaces the file's metadata with the supplied state.
    pub async fn update_file(&self, file: &File, params: &FileWriteParams) -> DriveResult<File> {
        let id = require_present("file id", file.id.as_deref())?;
        let path = format!("/files/{}", encode_path(id));

        let query = FileWriteQuery {
            ocr: params.ocr,
            ocr_language: &params.ocr_language,
            convert: params.convert,
            pinned: params.pinned,
            set_modified_date: params.set_modified_date,
            new_revision: params.new_revision,
            update_viewed_date: params.update_viewed_date,
            timed_text_language: params.timed_text_language.as_deref(),
            timed_text_track_name: params.timed_text_track_name.as_deref(),
            fields: None,
        };

        self.client()?.put_with_params(&path, &query, file).await
    }

    /// Permanently deletes the file with the given id.
    pub async fn delete_file(&self, file_id: &str) -> DriveResult<()> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}", encode_path(file_id));
        self.client()?.delete(&path).await
    }

    /// Lists the user's files.
    ///
    /// The next-page token is stored in `ctx` as a side effect; when the
    /// response carries none the stored token is cleared.
    pub async fn list_files(
        &self,
        ctx: &ExecutionContext,
        params: &ListFilesParams,
    ) -> DriveResult<Vec<File>> {
        let page_token = params.page_token.clone().or_else(|| ctx.page_token());
        let query = ListFilesQuery {
            max_results: params.max_results,
            q: params.query.as_deref(),
            page_token: page_token.as_deref(),
        };

        let response: FileList = self.client()?.get_with_params("/files", &query).await?;

        save_page_token(ctx, NEXT_PAGE_TOKEN, response.next_page_token.as_deref());
        Ok(response.items)
    }

    /// Creates a copy of the file with id `source_id`, with metadata taken
    /// from `copied_file`.
    pub async fn copy_file(
        &self,
        source_id: &str,
        copied_file: &File,
        params: &CopyParams,
    ) -> DriveResult<File> {
        require_id("source file id", source_id)?;
        let path = format!("/files/{}/copy", encode_path(source_id));

        let query = CopyQuery {
            ocr: params.ocr,
            ocr_language: &params.ocr_language,
            convert: params.convert,
            pinned: params.pinned,
            timed_text_language: params.timed_text_language.as_deref(),
            timed_text_track_name: params.timed_text_track_name.as_deref(),
        };

        self.client()?
            .post_with_params(&path, &query, copied_file)
            .await
    }

    /// Sets the file's updated time to the current server time.
    pub async fn touch(&self, file_id: &str) -> DriveResult<File> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}/touch", encode_path(file_id));
        self.client()?.post_empty(&path).await
    }

    /// Moves the file to the trash.
    pub async fn trash_file(&self, file_id: &str) -> DriveResult<File> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}/trash", encode_path(file_id));
        self.client()?.post_empty(&path).await
    }

    /// Restores the file from the trash.
    pub async fn restore_file(&self, file_id: &str) -> DriveResult<File> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}/untrash", encode_path(file_id));
        self.client()?.post_empty(&path).await
    }
}
