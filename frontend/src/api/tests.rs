use super::test_support::mock::*;
use super::*;
use crate::utils::storage::TokenStore;
use serde_json::json;

fn item_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "itemId": id,
        "itemName": name,
        "location": "Library",
        "foundOrLostDate": "2025-03-14",
        "itemStatus": "FOUND",
        "user": "U001"
    })
}

fn png() -> ImageUpload {
    ImageUpload {
        file_name: "umbrella.png".into(),
        mime_type: "image/png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

#[tokio::test]
async fn authorized_calls_carry_the_bearer_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/laf/api/v1/item/getAllItems");
        then.status(200).json_body(json!([item_json("I1", "Umbrella")]));
    });
    let auth = TestAuth::new(Some("tok-123"), "/items/all");

    let items = auth.client(&server).get_all_items().await.unwrap();

    assert_eq!(items[0].item_name, "Umbrella");
    assert_eq!(items[0].item_status, Some(ItemStatus::Found));
    let sent = &server.received()[0];
    assert_eq!(sent.authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn no_header_without_a_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/laf/api/v1/item/getItemsByStatus/LOST");
        then.status(200).json_body(json!([]));
    });
    let auth = TestAuth::new(None, "/items/lost");

    let items = auth
        .client(&server)
        .get_items_by_status(ItemStatus::Lost)
        .await
        .unwrap();

    assert!(items.is_empty());
    assert!(server.received()[0].authorization.is_none());
}

#[tokio::test]
async fn unauthorized_clears_the_token_and_redirects_once() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/laf/api/v1/user/getAllUsers");
        then.status(401).json_body(json!({ "message": "JWT expired" }));
    });
    let auth = TestAuth::new(Some("stale"), "/all-users");
    let client = auth.client(&server);

    let first = client.get_all_users().await.unwrap_err();
    let second = client.get_all_users().await.unwrap_err();

    assert!(first.is_unauthorized());
    assert_eq!(first.error, "JWT expired");
    assert!(second.is_unauthorized());
    assert_eq!(auth.tokens.load(), None);
    assert_eq!(auth.navigator.visits(), vec!["/sign-in".to_string()]);
}

#[tokio::test]
async fn forbidden_sends_the_user_to_the_forbidden_page() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/laf/api/v1/request/getAllRequests");
        then.status(403).text_body("Access Denied");
    });
    let auth = TestAuth::new(Some("user-token"), "/requests/all");

    let err = auth.client(&server).get_all_claim_requests().await.unwrap_err();

    assert_eq!(err.code, "FORBIDDEN");
    assert_eq!(err.error, "Access Denied");
    assert_eq!(auth.navigator.last_visit().as_deref(), Some("/forbidden"));
    assert_eq!(auth.tokens.load().as_deref(), Some("user-token"));
}

#[tokio::test]
async fn forbidden_on_the_forbidden_page_does_not_loop() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/laf/api/v1/item/getAllItems");
        then.status(403);
    });
    let auth = TestAuth::new(Some("user-token"), "/forbidden");

    let _ = auth.client(&server).get_all_items().await;

    assert!(auth.navigator.visits().is_empty());
}

#[tokio::test]
async fn sign_in_is_public_and_maps_bad_credentials() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/laf/api/v1/auth/login");
        then.status(401).json_body(json!({ "message": "Bad credentials" }));
    });
    let auth = TestAuth::new(Some("old"), "/sign-in");

    let err = auth
        .client(&server)
        .sign_in(&SignInRequest {
            email: "alice@example.com".into(),
            password: "wrong-password".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Invalid username or password.");
    let sent = &server.received()[0];
    assert!(sent.authorization.is_none());
    assert_eq!(sent.body.as_ref().unwrap()["email"], "alice@example.com");
    assert!(auth.navigator.visits().is_empty());
    assert_eq!(auth.tokens.load().as_deref(), Some("old"));
}

#[tokio::test]
async fn sign_in_returns_the_issued_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/laf/api/v1/auth/login");
        then.status(200).json_body(json!({ "token": "fresh" }));
    });
    let auth = TestAuth::new(None, "/sign-in");

    let token = auth
        .client(&server)
        .sign_in(&SignInRequest {
            email: "alice@example.com".into(),
            password: "correct-horse".into(),
        })
        .await
        .unwrap();

    assert_eq!(token, "fresh");
}

#[tokio::test]
async fn sign_up_conflict_reports_duplicate_email() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/laf/api/v1/auth/register");
        then.status(409).json_body(json!({ "message": "duplicate key" }));
    });
    let auth = TestAuth::new(None, "/sign-up");

    let err = auth
        .client(&server)
        .sign_up(&SignUpRequest {
            name: "Alice Example".into(),
            email: "alice@example.com".into(),
            password: "correct-horse".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, "CONFLICT");
    assert_eq!(err.error, "Email already exists.");
}

#[tokio::test]
async fn create_item_without_image_never_reaches_the_server() {
    let server = MockServer::start_async().await;
    let auth = TestAuth::new(Some("t"), "/items/add-items");
    let item = Item {
        item_name: "Umbrella".into(),
        ..Item::default()
    };

    let err = auth.client(&server).create_item(&item, None).await.unwrap_err();

    assert_eq!(err.code, "VALIDATION_ERROR");
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn create_item_posts_multipart() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/laf/api/v1/item");
        then.status(201).json_body(item_json("I7", "Umbrella"));
    });
    let auth = TestAuth::new(Some("t"), "/items/add-items");
    let item = Item {
        item_name: "Umbrella".into(),
        ..Item::default()
    };

    let created = auth.client(&server).create_item(&item, Some(png())).await.unwrap();

    assert_eq!(created.item_id.as_deref(), Some("I7"));
    let content_type = server.received()[0].content_type.clone().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn update_item_uploads_the_image_before_patching() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PATCH).path("/laf/api/v1/item/updateItemImg/I1");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(PATCH).path("/laf/api/v1/item/I1");
        then.status(200).json_body(item_json("I1", "Red umbrella"));
    });
    let auth = TestAuth::new(Some("t"), "/items/edit-item/I1");
    let item = Item {
        item_id: Some("I1".into()),
        item_name: "Red umbrella".into(),
        ..Item::default()
    };
    let client = auth.client(&server);

    client.update_item(&item, Some(png())).await.unwrap();
    let paths: Vec<String> = server.received().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec!["/laf/api/v1/item/updateItemImg/I1", "/laf/api/v1/item/I1"]
    );

    client.update_item(&item, None).await.unwrap();
    assert_eq!(server.hits(&PATCH, "/laf/api/v1/item/updateItemImg/I1"), 1);
    assert_eq!(server.hits(&PATCH, "/laf/api/v1/item/I1"), 2);
}

#[tokio::test]
async fn search_terms_are_path_encoded() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/laf/api/v1/item/search/blue%20bag");
        then.status(200).json_body(json!([item_json("I2", "Blue bag")]));
    });
    let auth = TestAuth::new(Some("t"), "/items/all");

    let found = auth.client(&server).search_items("blue bag").await.unwrap();

    assert_eq!(found[0].item_name, "Blue bag");
}

#[tokio::test]
async fn server_message_is_surfaced_on_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/laf/api/v1/item/I404");
        then.status(404).text_body("Item not found with id I404");
    });
    let auth = TestAuth::new(Some("t"), "/items/edit-item/I404");

    let err = auth.client(&server).get_item("I404").await.unwrap_err();

    assert_eq!(err.code, "NOT_FOUND");
    assert_eq!(err.error, "Item not found with id I404");
}

#[tokio::test]
async fn delete_item_targets_the_item() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/laf/api/v1/item/I3");
        then.status(204).text_body("");
    });
    let auth = TestAuth::new(Some("t"), "/items/all");

    auth.client(&server).delete_item("I3").await.unwrap();

    assert_eq!(server.hits(&DELETE, "/laf/api/v1/item/I3"), 1);
}

#[tokio::test]
async fn claim_requests_are_created_and_reviewed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/laf/api/v1/request");
        then.status(201).json_body(json!({
            "requestId": "R1", "item": "I1", "requestMessage": "mine", "requestStatus": "PENDING"
        }));
    });
    server.mock(|when, then| {
        when.method(PATCH).path("/laf/api/v1/request/approve/R1");
        then.status(200);
    });
    let auth = TestAuth::new(Some("t"), "/requests/all");
    let client = auth.client(&server);

    let created = client
        .create_claim_request(&ClaimRequest {
            item: "I1".into(),
            request_message: "mine".into(),
            ..ClaimRequest::default()
        })
        .await
        .unwrap();
    client.approve_claim_request("R1").await.unwrap();

    assert_eq!(created.request_status, Some(RequestStatus::Pending));
    let body = server.received()[0].body.clone().unwrap();
    assert_eq!(body, json!({ "item": "I1", "requestMessage": "mine" }));
    assert_eq!(server.hits(&PATCH, "/laf/api/v1/request/approve/R1"), 1);
}

#[tokio::test]
async fn update_claim_request_requires_an_id() {
    let server = MockServer::start_async().await;
    let auth = TestAuth::new(Some("t"), "/requests/my-requests");

    let err = auth
        .client(&server)
        .update_claim_request(&ClaimRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, "VALIDATION_ERROR");
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn user_search_and_update_paths() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/laf/api/v1/user/search/sam");
        then.status(200).json_body(json!([
            { "id": "U4", "name": "Sam Rivers", "email": "sam@example.com", "role": "USER" }
        ]));
    });
    let auth = TestAuth::new(Some("t"), "/all-users");

    let users = auth.client(&server).search_users("sam").await.unwrap();

    assert_eq!(users[0].role, Some(Role::User));
    assert_eq!(server.hits(&GET, "/laf/api/v1/user/search/sam"), 1);
}
