use salesboard::{
    repositories::user_repository::SqliteUserRepository,
    services::user_service::{CreateUserRequest, UserService, UserServiceError},
    test_utils::test_helpers,
};
use std::sync::Arc;

fn request(username: &str, email: &str, password: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_create_user_success() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let user = service
        .create_user(request("alice", "alice@example.com", "password123"))
        .await
        .unwrap();

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_ne!(user.password_hash, "password123");
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_create_user_trims_input() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let user = service
        .create_user(request("  carol ", " carol@example.com ", "pw"))
        .await
        .unwrap();

    assert_eq!(user.username, "carol");
    assert_eq!(user.email, "carol@example.com");
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    service
        .create_user(request("dup", "first@example.com", "pw"))
        .await
        .unwrap();

    let result = service
        .create_user(request("dup", "second@example.com", "pw"))
        .await;
    assert!(matches!(result, Err(UserServiceError::UsernameTaken)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    service
        .create_user(request("one", "same@example.com", "pw"))
        .await
        .unwrap();

    let result = service
        .create_user(request("two", "same@example.com", "pw"))
        .await;
    assert!(matches!(result, Err(UserServiceError::EmailTaken)));
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let result = service
        .create_user(request("", "x@example.com", "pw"))
        .await;
    assert!(matches!(
        result,
        Err(UserServiceError::MissingField("username"))
    ));

    let result = service.create_user(request("x", "   ", "pw")).await;
    assert!(matches!(result, Err(UserServiceError::MissingField("email"))));

    let result = service
        .create_user(request("x", "x@example.com", ""))
        .await;
    assert!(matches!(
        result,
        Err(UserServiceError::MissingField("password"))
    ));
}

#[tokio::test]
async fn test_list_users_paginates() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    for i in 0..3 {
        service
            .create_user(request(
                &format!("user{}", i),
                &format!("user{}@example.com", i),
                "pw",
            ))
            .await
            .unwrap();
    }

    let all = service.list_users(None, None).await.unwrap();
    assert_eq!(all.len(), 3);

    let page = service.list_users(Some(2), Some(1)).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].username, "user1");
}
