//! Tests for media actions.

mod common;

use common::{client_for, mock_action, mock_anki_error, mock_anki_response, setup_mock_server};

#[tokio::test]
async fn test_retrieve_media() {
    let server = setup_mock_server().await;
    let client = client_for(&server);

    mock_action(
        &server,
        "retrieveMediaFile",
        mock_anki_response("SGVsbG8gV29ybGQ="),
    )
    .await;

    let encoded = client.media().retrieve("greeting.txt").await.unwrap();
    assert_eq!(encoded, "SGVsbG8gV29ybGQ=");
}

#[tokio::test]
async fn test_retrieve_missing_media_fails() {
    let server = setup_mock_server().await;
    let client = client_for(&server);

    // The host answers `false` for a file it does not have; that is not a
    // string, so the call must not succeed.
    mock_action(&server, "retrieveMediaFile", mock_anki_response(false)).await;

    let result = client.media().retrieve("no_such_file.png").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_retrieve_media_error_is_raised() {
    let server = setup_mock_server().await;
    let client = client_for(&server);

    mock_action(
        &server,
        "retrieveMediaFile",
        mock_anki_error("collection is not available"),
    )
    .await;

    let result = client.media().retrieve("cat.png").await;
    assert!(matches!(result, Err(cardstock::Error::AnkiConnect(_))));
}
