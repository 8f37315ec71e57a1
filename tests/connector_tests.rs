//! Integration tests driving the connector against a mock Drive endpoint.

use futures::StreamExt;
use google_drive_connector::connector::{
    InsertPermissionParams, ListChangesParams, ListChildrenParams, ListFilesParams, UploadParams,
};
use google_drive_connector::model::{Comment, File, Permission, Revision};
use google_drive_connector::pagination::{ExecutionContext, NEXT_PAGE_TOKEN};
use google_drive_connector::{
    ConnectorConfig, DriveError, GoogleDriveConnector, StreamContent,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-access-token";

fn connector_for(server: &MockServer) -> GoogleDriveConnector {
    let config = ConnectorConfig::builder()
        .consumer_key("consumer-key")
        .consumer_secret("consumer-secret")
        .base_url(server.uri())
        .unwrap()
        .upload_url(server.uri())
        .unwrap()
        .build()
        .unwrap();

    let connector = GoogleDriveConnector::new(config);
    connector.authorize(TOKEN).unwrap();
    connector
}

#[tokio::test]
async fn get_file_metadata_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/f-1"))
        .and(query_param("updateViewedDate", "false"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "drive#file",
            "id": "f-1",
            "title": "quarterly-report.pdf",
            "mimeType": "application/pdf"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let file = connector.get_file_metadata("f-1", false).await.unwrap();

    assert_eq!(file.id.as_deref(), Some("f-1"));
    assert_eq!(file.title.as_deref(), Some("quarterly-report.pdf"));
}

#[tokio::test]
async fn operations_require_authorization() {
    let config = ConnectorConfig::builder()
        .consumer_key("consumer-key")
        .consumer_secret("consumer-secret")
        .build()
        .unwrap();
    let connector = GoogleDriveConnector::new(config);

    let err = connector.get_file_metadata("f-1", false).await.unwrap_err();
    assert!(matches!(err, DriveError::NotAuthorized(_)));
}

#[tokio::test]
async fn rejected_token_surfaces_as_token_expired() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/f-1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "errors": [{"domain": "global", "reason": "authError"}],
                "code": 401,
                "message": "Invalid Credentials"
            }
        })))
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let err = connector.get_file_metadata("f-1", false).await.unwrap_err();

    assert!(err.is_token_expired());
}

#[tokio::test]
async fn download_file_issues_one_get_and_returns_body_unmodified() {
    let server = MockServer::start().await;

    let payload: &[u8] = b"\x00\x01binary payload\xff";
    Mock::given(method("GET"))
        .and(path("/download/f-1"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let file = File {
        id: Some("f-1".to_string()),
        download_url: Some(format!("{}/download/f-1", server.uri())),
        ..Default::default()
    };

    let mut stream = connector.download_file(Some(&file)).await.unwrap();
    let mut collected = Vec::new();
    while let Some(chunk) = stream.next().await {
        collected.extend_from_slice(&chunk.unwrap());
    }

    assert_eq!(collected, payload);
}

#[tokio::test]
async fn download_file_rejects_missing_file_before_any_request() {
    let server = MockServer::start().await;
    let connector = connector_for(&server);

    let err = connector.download_file(None).await.unwrap_err();
    assert!(matches!(err, DriveError::InvalidArgument(_)));

    // Blank URL fails the same way; no mock is mounted, so a request
    // would have produced a different error kind.
    let file = File {
        download_url: Some("   ".to_string()),
        ..Default::default()
    };
    let err = connector.download_file(Some(&file)).await.unwrap_err();
    assert!(matches!(err, DriveError::InvalidArgument(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn download_revision_requires_download_url() {
    let server = MockServer::start().await;
    let connector = connector_for(&server);

    let err = connector.download_revision(None).await.unwrap_err();
    assert!(matches!(err, DriveError::InvalidArgument(_)));

    let revision = Revision::default();
    let err = connector
        .download_revision(Some(&revision))
        .await
        .unwrap_err();
    assert!(matches!(err, DriveError::InvalidArgument(_)));
}

#[tokio::test]
async fn list_files_stores_then_clears_page_token() {
    let server = MockServer::start().await;

    // Second page: matched by its continuation token, carries no next page.
    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param("pageToken", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "drive#fileList",
            "items": [{"id": "f-3", "title": "gamma"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // First page.
    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param("maxResults", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "drive#fileList",
            "items": [{"id": "f-1", "title": "alpha"}, {"id": "f-2", "title": "beta"}],
            "nextPageToken": "tok-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let ctx = ExecutionContext::new();

    let first = connector
        .list_files(&ctx, &ListFilesParams::default())
        .await
        .unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(ctx.page_token().as_deref(), Some("tok-2"));

    // Second call defaults its page token from the context.
    let second = connector
        .list_files(&ctx, &ListFilesParams::default())
        .await
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(ctx.page_token(), None);
}

#[tokio::test]
async fn list_files_in_folder_returns_ids_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/folder-1/children"))
        .and(query_param("maxResults", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "drive#childList",
            "items": [{"id": "c-1"}, {"id": "c-2"}, {"id": "c-3"}],
            "nextPageToken": "child-tok"
        })))
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let ctx = ExecutionContext::new();

    let ids = connector
        .list_files_in_folder(&ctx, Some("folder-1"), &ListChildrenParams::default())
        .await
        .unwrap();

    assert_eq!(ids, vec!["c-1", "c-2", "c-3"]);
    assert_eq!(ctx.page_token().as_deref(), Some("child-tok"));
}

#[tokio::test]
async fn empty_folder_listing_writes_no_side_effect() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/root/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "drive#childList"
        })))
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let ctx = ExecutionContext::new();
    ctx.set(NEXT_PAGE_TOKEN, "pre-existing");

    let ids = connector
        .list_files_in_folder(&ctx, None, &ListChildrenParams::default())
        .await
        .unwrap();

    assert!(ids.is_empty());
    // Untouched, not cleared: nothing was written for the empty result.
    assert_eq!(ctx.page_token().as_deref(), Some("pre-existing"));
}

#[tokio::test]
async fn patch_file_sends_literal_field_mask() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/files/f-1"))
        .and(query_param("fields", "title,description,title"))
        .and(body_string_contains("renamed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f-1",
            "title": "renamed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let file = File {
        id: Some("f-1".to_string()),
        title: Some("renamed".to_string()),
        ..Default::default()
    };

    // Input order preserved, duplicates kept.
    let patched = connector
        .patch_file(
            &file,
            &["title", "description", "title"],
            &Default::default(),
        )
        .await
        .unwrap();

    assert_eq!(patched.title.as_deref(), Some("renamed"));
}

#[tokio::test]
async fn patch_comment_sends_literal_field_mask() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/files/f-1/comments/c-9"))
        .and(query_param("fields", "content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "commentId": "c-9",
            "content": "revised"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let comment = Comment {
        comment_id: Some("c-9".to_string()),
        content: Some("revised".to_string()),
        ..Default::default()
    };

    let patched = connector
        .patch_comment("f-1", &comment, &["content"])
        .await
        .unwrap();
    assert_eq!(patched.content.as_deref(), Some("revised"));
}

#[tokio::test]
async fn upload_builds_multipart_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files"))
        .and(query_param("uploadType", "multipart"))
        .and(query_param("ocr", "false"))
        .and(query_param("ocrLanguage", "en"))
        .and(body_string_contains("\"title\":\"hello.txt\""))
        .and(body_string_contains("Hello, Drive!"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f-new",
            "title": "hello.txt",
            "mimeType": "text/plain"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let metadata = File {
        title: Some("hello.txt".to_string()),
        ..Default::default()
    };
    let content = StreamContent::from_bytes(mime::TEXT_PLAIN, "Hello, Drive!");

    let created = connector
        .upload(&metadata, content, &UploadParams::default())
        .await
        .unwrap();

    assert_eq!(created.id.as_deref(), Some("f-new"));
}

#[tokio::test]
async fn insert_permission_defaults_notification_emails_on() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/f-1/permissions"))
        .and(query_param("sendNotificationEmails", "true"))
        .and(body_string_contains("\"role\":\"reader\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "perm-1",
            "role": "reader",
            "type": "user"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let permission = Permission {
        role: Some("reader".to_string()),
        permission_type: Some("user".to_string()),
        value: Some("user@example.com".to_string()),
        ..Default::default()
    };

    let created = connector
        .insert_permission("f-1", &permission, &InsertPermissionParams::default())
        .await
        .unwrap();

    assert_eq!(created.id.as_deref(), Some("perm-1"));
}

#[tokio::test]
async fn list_changes_sends_defaults_and_stores_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/changes"))
        .and(query_param("includeDeleted", "true"))
        .and(query_param("includeSubscribed", "true"))
        .and(query_param("startChangeId", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "drive#changeList",
            "largestChangeId": "9000",
            "items": [
                {"id": "8999", "fileId": "f-1", "deleted": true},
                {"id": "9000", "fileId": "f-2", "file": {"id": "f-2", "title": "doc"}}
            ],
            "nextPageToken": "chg-tok"
        })))
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let ctx = ExecutionContext::new();
    let params = ListChangesParams {
        start_change_id: Some(500),
        ..Default::default()
    };

    let changes = connector.list_changes(&ctx, &params).await.unwrap();

    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].deleted, Some(true));
    assert!(changes[0].file.is_none());
    assert_eq!(changes[1].id, Some(9000));
    assert_eq!(ctx.page_token().as_deref(), Some("chg-tok"));
}

#[tokio::test]
async fn trash_and_restore_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/f-1/trash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f-1",
            "labels": {"trashed": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/files/f-1/untrash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f-1",
            "labels": {"trashed": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);

    let trashed = connector.trash_file("f-1").await.unwrap();
    assert_eq!(trashed.labels.unwrap().trashed, Some(true));

    let restored = connector.restore_file("f-1").await.unwrap();
    assert_eq!(restored.labels.unwrap().trashed, Some(false));
}

#[tokio::test]
async fn delete_file_handles_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/files/f-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    connector.delete_file("f-1").await.unwrap();
}

#[tokio::test]
async fn folder_membership_uses_children_collection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/root/children"))
        .and(body_string_contains("\"id\":\"f-1\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "drive#childReference",
            "id": "f-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/files/folder-9/children/f-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);

    connector.insert_file_in_folder("f-1", None).await.unwrap();
    connector
        .delete_file_from_folder("f-1", Some("folder-9"))
        .await
        .unwrap();
}

#[tokio::test]
async fn about_exposes_quota_and_formats() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "drive#about",
            "name": "Jane Doe",
            "quotaBytesTotal": "16106127360",
            "quotaBytesUsed": "5242880",
            "largestChangeId": "9000",
            "rootFolderId": "root-xyz",
            "exportFormats": [
                {"source": "application/vnd.google-apps.document", "targets": ["application/pdf"]}
            ]
        })))
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let about = connector.about().await.unwrap();

    assert_eq!(about.name.as_deref(), Some("Jane Doe"));
    assert_eq!(about.quota_bytes_total, Some(16_106_127_360));
    assert_eq!(about.root_folder_id.as_deref(), Some("root-xyz"));
    assert_eq!(about.export_formats.unwrap().len(), 1);
}

#[tokio::test]
async fn reauthorization_swaps_the_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/f-1"))
        .and(header("authorization", "Bearer second-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "f-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    connector.authorize("second-token").unwrap();

    connector.get_file_metadata("f-1", false).await.unwrap();
}

#[tokio::test]
async fn revoked_authorization_blocks_operations() {
    let server = MockServer::start().await;
    let connector = connector_for(&server);
    assert!(connector.is_authorized());

    connector.revoke_authorization();
    assert!(!connector.is_authorized());

    let err = connector.about().await.unwrap_err();
    assert!(matches!(err, DriveError::NotAuthorized(_)));
}
