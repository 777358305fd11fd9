mod common;

use accha_chai_be::{
    db::{
        rating::{list_ratings, recompute_aggregate, submit_rating},
        saved::{get_saved_stalls, save_stall, unsave_stall},
        stall::{create_stall, delete_stall, get_stall, list_stalls, update_stall},
        store::DocumentStore,
        user::{delete_account, track_activity},
    },
    errors::AppError,
    models::{
        paths::StorePath,
        rating::RatingValue,
        stall::{DELETED_USER, Location, NewStall, Stall, StallUpdate},
        user::UserDoc,
    },
};
use chrono::{DateTime, Duration, Utc};
use common::MemoryStore;

fn new_stall(name: &str, rating: Option<RatingValue>) -> NewStall {
    NewStall {
        name: name.to_string(),
        description: Some("Kulhad chai, open till midnight".to_string()),
        photo: Some("https://example.com/chai.jpg".to_string()),
        location: Location {
            lat: 28.6139,
            lng: 77.209,
        },
        rating,
    }
}

async fn insert_stall(
    store: &MemoryStore,
    id: &str,
    added_by: &str,
    created_at: DateTime<Utc>,
) {
    let stall = Stall {
        name: format!("Stall {id}"),
        description: None,
        photo: None,
        location: Location {
            lat: 19.076,
            lng: 72.8777,
        },
        added_by: added_by.to_string(),
        created_at,
        verified: false,
        average_rating: 0.0,
        ratings_count: 0,
        updated_at: None,
    };

    store
        .set(
            &StorePath::stalls(),
            id,
            serde_json::to_value(&stall).unwrap(),
            false,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_created_stalls_round_trip() {
    let store = MemoryStore::default();

    let entry = create_stall(
        &store,
        new_stall("Tapri", Some(RatingValue::Good)),
        "u1",
        "u1@example.com",
    )
    .await
    .unwrap();

    let stall = get_stall(&store, &entry.id).await.unwrap().unwrap();
    assert_eq!(stall.name, "Tapri");
    assert_eq!(stall.added_by, "u1");
    assert!(!stall.verified);
    assert_eq!(stall.location.lat, 28.6139);
    assert!(stall.updated_at.is_none());

    assert!(get_stall(&store, "no-such-stall").await.unwrap().is_none());
}

#[tokio::test]
async fn test_listing_returns_newest_first() {
    let store = MemoryStore::default();
    let now = Utc::now();

    insert_stall(&store, "older", "u1", now - Duration::hours(2)).await;
    insert_stall(&store, "newest", "u1", now).await;
    insert_stall(&store, "oldest", "u1", now - Duration::days(1)).await;

    let stalls = list_stalls(&store).await.unwrap();
    let ids: Vec<&str> = stalls.iter().map(|entry| entry.id.as_str()).collect();

    assert_eq!(ids, vec!["newest", "older", "oldest"]);
}

#[tokio::test]
async fn test_updates_merge_onto_the_existing_document() {
    let store = MemoryStore::default();

    let entry = create_stall(
        &store,
        new_stall("Tapri", Some(RatingValue::Average)),
        "u1",
        "u1@example.com",
    )
    .await
    .unwrap();

    let updates = StallUpdate {
        name: Some("Tapri 2.0".to_string()),
        ..StallUpdate::default()
    };
    update_stall(&store, &entry.id, "u1", updates).await.unwrap();

    let stall = get_stall(&store, &entry.id).await.unwrap().unwrap();
    assert_eq!(stall.name, "Tapri 2.0");
    assert_eq!(
        stall.description.as_deref(),
        Some("Kulhad chai, open till midnight")
    );
    assert!(stall.updated_at.is_some());
    // Aggregate fields are not touched by edits.
    assert_eq!(stall.average_rating, 2.0);
    assert_eq!(stall.ratings_count, 1);
}

#[tokio::test]
async fn test_only_the_owner_can_edit() {
    let store = MemoryStore::default();

    let entry = create_stall(&store, new_stall("Tapri", None), "u1", "u1@example.com")
        .await
        .unwrap();

    let result = update_stall(&store, &entry.id, "u2", StallUpdate::default()).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let missing = update_stall(&store, "no-such-stall", "u1", StallUpdate::default()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_deletion_removes_the_stall_and_its_ratings() {
    let store = MemoryStore::default();

    let entry = create_stall(
        &store,
        new_stall("Tapri", Some(RatingValue::Good)),
        "u1",
        "u1@example.com",
    )
    .await
    .unwrap();
    submit_rating(&store, &entry.id, "u2", "u2@example.com", RatingValue::Poor)
        .await
        .unwrap();

    delete_stall(&store, &entry.id, "u1").await.unwrap();

    assert!(get_stall(&store, &entry.id).await.unwrap().is_none());
    assert!(list_ratings(&store, &entry.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deletion_is_owner_only() {
    let store = MemoryStore::default();

    let entry = create_stall(&store, new_stall("Tapri", None), "u1", "u1@example.com")
        .await
        .unwrap();

    let result = delete_stall(&store, &entry.id, "u2").await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(get_stall(&store, &entry.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_deletion_is_blocked_once_community_owned() {
    let store = MemoryStore::default();

    insert_stall(&store, "old-stall", "u1", Utc::now() - Duration::days(8)).await;

    let result = delete_stall(&store, "old-stall", "u1").await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(get_stall(&store, "old-stall").await.unwrap().is_some());
}

#[tokio::test]
async fn test_saved_stalls_round_trip() {
    let store = MemoryStore::default();

    assert!(get_saved_stalls(&store, "u1").await.unwrap().is_empty());

    save_stall(&store, "u1", "stall-a").await.unwrap();
    save_stall(&store, "u1", "stall-b").await.unwrap();
    // Saving twice keeps a single entry.
    save_stall(&store, "u1", "stall-a").await.unwrap();

    let saved = get_saved_stalls(&store, "u1").await.unwrap();
    assert_eq!(saved, vec!["stall-a".to_string(), "stall-b".to_string()]);

    unsave_stall(&store, "u1", "stall-a").await.unwrap();
    assert_eq!(
        get_saved_stalls(&store, "u1").await.unwrap(),
        vec!["stall-b".to_string()]
    );

    // Unknown user or stall id is a no-op.
    unsave_stall(&store, "u1", "never-saved").await.unwrap();
    unsave_stall(&store, "u9", "stall-b").await.unwrap();
}

#[tokio::test]
async fn test_activity_tracking_sets_first_active_only_once() {
    let store = MemoryStore::default();

    track_activity(&store, "u1").await.unwrap();

    let doc = store.get(&StorePath::users(), "u1").await.unwrap().unwrap();
    let user: UserDoc = serde_json::from_value(doc).unwrap();
    let first = user.first_active_at.unwrap();

    track_activity(&store, "u1").await.unwrap();

    let doc = store.get(&StorePath::users(), "u1").await.unwrap().unwrap();
    let user: UserDoc = serde_json::from_value(doc).unwrap();

    assert_eq!(user.first_active_at.unwrap(), first);
    assert!(user.last_active_at.unwrap() >= first);
}

#[tokio::test]
async fn test_account_deletion_anonymizes_without_losing_ratings() {
    let store = MemoryStore::default();

    let theirs = create_stall(&store, new_stall("Tapri", None), "u1", "u1@example.com")
        .await
        .unwrap();
    let mine = create_stall(
        &store,
        new_stall("Chai Adda", Some(RatingValue::Good)),
        "u2",
        "u2@example.com",
    )
    .await
    .unwrap();

    submit_rating(&store, &theirs.id, "u2", "u2@example.com", RatingValue::Average)
        .await
        .unwrap();
    save_stall(&store, "u2", &theirs.id).await.unwrap();

    delete_account(&store, "u2", "u2@example.com").await.unwrap();

    // The user document is gone.
    assert!(store.get(&StorePath::users(), "u2").await.unwrap().is_none());

    // The rating survives with its author stripped.
    let ratings = list_ratings(&store, &theirs.id).await.unwrap();
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].rating.rating, RatingValue::Average);
    assert!(ratings[0].rating.user_id.is_none());
    assert!(ratings[0].rating.deleted_at.is_some());

    // The anonymized rating still counts toward the aggregate.
    let summary = recompute_aggregate(&store, &theirs.id).await.unwrap();
    assert_eq!(summary.average_rating, 2.0);
    assert_eq!(summary.ratings_count, 1);

    // The deleted user's stall stays up under the sentinel owner.
    let stall = get_stall(&store, &mine.id).await.unwrap().unwrap();
    assert_eq!(stall.added_by, DELETED_USER);

    // Other owners are untouched.
    let stall = get_stall(&store, &theirs.id).await.unwrap().unwrap();
    assert_eq!(stall.added_by, "u1");
}
