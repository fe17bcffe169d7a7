// Tests for the directory flows using direct database operations (without HTTP)
// This validates the core storage behavior behind the admin endpoints

mod common;
use common::{client::TestClient, TestContext};

use directory_auth::types::error::AppError;
use directory_auth::types::user::{DBUserCreate, DBUserUpdate};
use directory_auth::utils::password::{hash_password, verify_password};
use entity::user::UserRole;
use uuid::Uuid;

// ========== SEEDING ==========

#[tokio::test]
async fn test_seeded_accounts_database_flow() {
    let ctx = TestContext::new().await;

    let users = ctx.db.list_users().await.unwrap();
    assert_eq!(users.len(), 2);

    let admin = ctx
        .db
        .find_user_by_email("admin@example.com")
        .await
        .unwrap()
        .expect("seeded admin missing");
    assert_eq!(admin.role, UserRole::Admin);
    assert!(verify_password("admin123", &admin.password_hash));

    let user = ctx
        .db
        .find_user_by_email("user@example.com")
        .await
        .unwrap()
        .expect("seeded user missing");
    assert_eq!(user.role, UserRole::User);
    assert!(verify_password("user123", &user.password_hash));

    println!("✅ Seeded accounts database flow test passed!");
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let ctx = TestContext::new().await;

    // Startup already seeded once; running it again must change nothing
    ctx.db.seed_default_users().await.unwrap();
    ctx.db.seed_default_users().await.unwrap();

    let users = ctx.db.list_users().await.unwrap();
    assert_eq!(users.len(), 2);

    println!("✅ Seeding idempotence test passed!");
}

// ========== USER CRUD ==========

#[tokio::test]
async fn test_user_crud_database_flow() {
    let ctx = TestContext::new().await;

    let email = format!("crud-{}@test.com", Uuid::new_v4());
    let created = ctx
        .db
        .create_user(DBUserCreate {
            email: email.clone(),
            password_hash: hash_password("password123").unwrap(),
            role: UserRole::User,
        })
        .await
        .unwrap();

    assert_eq!(created.email, email);
    assert_eq!(created.role, UserRole::User);
    assert!(created.password_hash.starts_with("$argon2"));

    let fetched = ctx.db.get_user_by_id(&created.id).await.unwrap();
    assert_eq!(fetched.email, email);

    let updated = ctx
        .db
        .update_user(
            &created.id,
            DBUserUpdate {
                role: Some(UserRole::Admin),
                password_hash: Some(hash_password("rotated").unwrap()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(updated.email, email);
    assert!(verify_password("rotated", &updated.password_hash));
    assert!(!verify_password("password123", &updated.password_hash));

    ctx.db.delete_user(&created.id).await.unwrap();
    let gone = ctx.db.get_user_by_id(&created.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));

    println!("✅ User CRUD database flow test passed!");
}

#[tokio::test]
async fn test_duplicate_email_database_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (user_id, _token) = client.create_test_user(None).await;
    let first = ctx.db.get_user_by_id(&user_id).await.unwrap();

    // Insert with the same address must surface the unique violation
    let dup = ctx
        .db
        .create_user(DBUserCreate {
            email: first.email.clone(),
            password_hash: hash_password("password123").unwrap(),
            role: UserRole::User,
        })
        .await;
    assert!(matches!(dup, Err(AppError::AlreadyExists)));

    // Renaming another record onto that address fails the same way
    let (other_id, _token) = client.create_test_user(None).await;
    let renamed = ctx
        .db
        .update_user(
            &other_id,
            DBUserUpdate {
                email: Some(first.email.clone()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(renamed, Err(AppError::AlreadyExists)));

    println!("✅ Duplicate email database flow test passed!");
}

#[tokio::test]
async fn test_list_ordering_database_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (older_id, _token) = client.create_test_user(None).await;
    let (newer_id, _token) = client.create_test_user(None).await;

    let users = ctx.db.list_users().await.unwrap();
    let pos_older = users.iter().position(|u| u.id == older_id).unwrap();
    let pos_newer = users.iter().position(|u| u.id == newer_id).unwrap();

    assert!(pos_newer < pos_older);

    println!("✅ List ordering database flow test passed!");
}

#[tokio::test]
async fn test_unknown_lookups_database_flow() {
    let ctx = TestContext::new().await;

    let missing = ctx.db.get_user_by_id(&Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    let deleted = ctx.db.delete_user(&Uuid::new_v4()).await;
    assert!(matches!(deleted, Err(AppError::NotFound)));

    let absent = ctx.db.find_user_by_email("ghost@test.com").await.unwrap();
    assert!(absent.is_none());

    println!("✅ Unknown lookups database flow test passed!");
}
