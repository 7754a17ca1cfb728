#[cfg(test)]
mod tests {
    use crate::{MessageService, MessageStore, ServiceError};

    async fn memory_store() -> MessageStore {
        MessageStore::open_in_memory().await.expect("open store")
    }

    async fn memory_service() -> MessageService {
        MessageService::new(memory_store().await)
    }

    // ── Store tests ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let store = memory_store().await;
        let messages = store.list().await.expect("list");
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn insert_returns_the_persisted_row() {
        let store = memory_store().await;

        let message = store.insert("Hello World").await.expect("insert");
        assert_eq!(message.id, 1);
        assert_eq!(message.content, "Hello World");

        let listed = store.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, message.id);
        assert_eq!(listed[0].content, message.content);
        // The stored timestamp must decode to the exact instant returned at
        // insert time.
        assert_eq!(listed[0].created_at, message.created_at);
    }

    #[tokio::test]
    async fn ids_strictly_increase() {
        let store = memory_store().await;

        let mut last_id = 0;
        for i in 0..5 {
            let message = store
                .insert(&format!("message {i}"))
                .await
                .expect("insert");
            assert!(
                message.id > last_id,
                "id {} should exceed previous id {last_id}",
                message.id
            );
            last_id = message.id;
        }
    }

    #[tokio::test]
    async fn list_orders_most_recent_first() {
        let store = memory_store().await;

        store.insert("first").await.expect("insert first");
        store.insert("second").await.expect("insert second");
        store.insert("third").await.expect("insert third");

        let listed = store.list().await.expect("list");
        let contents: Vec<&str> = listed.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let store = memory_store().await;
        store.insert("survives").await.expect("insert");

        store.initialize().await.expect("second initialize");
        store.initialize().await.expect("third initialize");

        let listed = store.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].content, "survives");
    }

    #[tokio::test]
    async fn open_creates_missing_data_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("nested").join("data").join("database.db");

        let store = MessageStore::open(&db_path).await.expect("open store");
        store.insert("on disk").await.expect("insert");

        assert!(db_path.exists(), "database file should have been created");
    }

    #[tokio::test]
    async fn reopen_preserves_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("database.db");

        {
            let store = MessageStore::open(&db_path).await.expect("open store");
            store.insert("durable").await.expect("insert");
        }

        let store = MessageStore::open(&db_path).await.expect("reopen store");
        let listed = store.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].content, "durable");
    }

    // ── Service tests ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_message_persists_valid_content() {
        let service = memory_service().await;

        let message = service
            .create_message(Some("hello".to_owned()))
            .await
            .expect("create");
        assert_eq!(message.id, 1);
        assert_eq!(message.content, "hello");
    }

    #[tokio::test]
    async fn create_message_rejects_missing_content() {
        let service = memory_service().await;

        let err = service.create_message(None).await.unwrap_err();
        assert!(
            matches!(err, ServiceError::Validation(_)),
            "expected validation error, got {err:?}"
        );
        assert_eq!(err.to_string(), "Message content is required");
    }

    #[tokio::test]
    async fn create_message_rejects_empty_content() {
        let service = memory_service().await;

        let err = service
            .create_message(Some(String::new()))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::Validation(_)),
            "expected validation error, got {err:?}"
        );
    }

    #[tokio::test]
    async fn rejected_content_is_not_persisted() {
        let service = memory_service().await;

        let _ = service.create_message(None).await;
        let _ = service.create_message(Some(String::new())).await;

        let listed = service.list_messages().await.expect("list");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn whitespace_content_is_stored_verbatim() {
        let service = memory_service().await;

        let message = service
            .create_message(Some("  padded  ".to_owned()))
            .await
            .expect("create");
        assert_eq!(message.content, "  padded  ");
    }

    #[tokio::test]
    async fn list_messages_orders_most_recent_first() {
        let service = memory_service().await;

        service
            .create_message(Some("first".to_owned()))
            .await
            .expect("create first");
        service
            .create_message(Some("second".to_owned()))
            .await
            .expect("create second");

        let listed = service.list_messages().await.expect("list");
        assert_eq!(listed[0].content, "second");
        assert_eq!(listed[1].content, "first");
    }
}
