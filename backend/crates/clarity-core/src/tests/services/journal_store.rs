use crate::tests::fakes::{InMemoryJournal, entry_with};
use crate::{CoreError, EntryFields, JournalStore, MonthFilter, UserId};

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

const OWNER: UserId = UserId(1);
const STRANGER: UserId = UserId(2);

#[tokio::test]
async fn given_valid_fields_when_created_then_entry_is_owned_and_returned() {
    let store = JournalStore::new(Arc::new(InMemoryJournal::default()));

    let entry = store
        .create_entry(
            OWNER,
            entry_with(Some("joy"), Some(7)),
            Some("/uploads/a.jpg".to_string()),
        )
        .await
        .unwrap();

    assert_that!(entry.user_id, eq(OWNER));
    assert_that!(entry.fields.intensity, some(eq(7)));
    assert_that!(entry.photo_ref.as_deref(), some(eq("/uploads/a.jpg")));

    let fetched = store.get_entry(entry.id, OWNER).await.unwrap();
    assert_that!(fetched, eq(&entry));
}

#[tokio::test]
async fn given_out_of_range_intensity_when_created_then_nothing_is_stored() {
    let store = JournalStore::new(Arc::new(InMemoryJournal::default()));

    for intensity in [0, 11] {
        let result = store
            .create_entry(OWNER, entry_with(Some("joy"), Some(intensity)), None)
            .await;
        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    let listed = store.list_entries(OWNER, None).await.unwrap();
    assert_that!(listed, is_empty());
}

#[tokio::test]
async fn given_entries_in_several_months_when_listed_by_month_then_only_that_month() {
    let journal = Arc::new(InMemoryJournal::default());
    journal.seed(
        OWNER,
        EntryFields::default(),
        Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap(),
    );
    let feb_first = journal.seed(
        OWNER,
        EntryFields::default(),
        Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
    );
    let feb_last = journal.seed(
        OWNER,
        EntryFields::default(),
        Utc.with_ymd_and_hms(2025, 2, 28, 12, 0, 0).unwrap(),
    );
    journal.seed(
        OWNER,
        EntryFields::default(),
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
    );
    let store = JournalStore::new(journal);

    let listed = store
        .list_entries(OWNER, Some(MonthFilter::new(2, 2025).unwrap()))
        .await
        .unwrap();

    let ids: Vec<_> = listed.iter().map(|e| e.id).collect();
    assert_that!(ids, eq(&vec![feb_last, feb_first]));
}

#[tokio::test]
async fn given_other_users_entry_when_accessed_then_not_found() {
    let journal = Arc::new(InMemoryJournal::default());
    let id = journal.seed(OWNER, EntryFields::default(), Utc::now());
    let store = JournalStore::new(journal);

    let get = store.get_entry(id, STRANGER).await;
    let delete = store.delete_entry(id, STRANGER).await;
    let listed = store.list_entries(STRANGER, None).await.unwrap();

    assert!(matches!(get, Err(CoreError::NotFound { .. })));
    assert!(matches!(delete, Err(CoreError::NotFound { .. })));
    assert_that!(listed, is_empty());

    // Still there for the owner
    assert!(store.get_entry(id, OWNER).await.is_ok());
}

#[tokio::test]
async fn given_own_entry_when_deleted_then_gone() {
    let journal = Arc::new(InMemoryJournal::default());
    let id = journal.seed(OWNER, EntryFields::default(), Utc::now());
    let store = JournalStore::new(journal);

    store.delete_entry(id, OWNER).await.unwrap();

    assert!(matches!(
        store.get_entry(id, OWNER).await,
        Err(CoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete_entry(id, OWNER).await,
        Err(CoreError::NotFound { .. })
    ));
}
