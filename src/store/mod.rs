//! Canonical in-memory record store.
//!
//! `Store` is a cheaply clonable handle over the single shared state; every
//! reader gets fresh clones and every writer goes through a narrow method,
//! so no caller ever holds a reference into the internal collections.
//! Locks are taken per call and released before control returns, never held
//! across an await point.

pub mod seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{AppError, AppResult};
use crate::models::{Item, User};
use crate::query::{self, ItemFilter};

#[derive(Debug, Default)]
struct State {
    items: Vec<Item>,
    users: Vec<User>,
}

/// Shared handle to the item and user collections.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<State>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the demo fixtures.
    pub fn with_demo_data() -> Self {
        Self {
            inner: Arc::new(RwLock::new(State {
                items: seed::demo_items(),
                users: seed::demo_users(),
            })),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, State>> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, State>> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }

    // --- Items ---

    /// Appends a new item. The id must not collide with a stored one.
    pub fn insert_item(&self, item: Item) -> AppResult<Item> {
        let mut state = self.write()?;
        if state.items.iter().any(|existing| existing.id == item.id) {
            return Err(AppError::Duplicate(format!(
                "item id {} already exists",
                item.id
            )));
        }
        state.items.push(item.clone());
        Ok(item)
    }

    pub fn get_item(&self, id: &str) -> AppResult<Item> {
        let state = self.read()?;
        state
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    /// Runs the filter over the current collection under one read lock.
    pub fn query_items(&self, filter: &ItemFilter) -> AppResult<Vec<Item>> {
        let state = self.read()?;
        Ok(query::run(&state.items, filter))
    }

    /// Edits an item through `apply`. The closure works on a scratch copy;
    /// the store commits it only when the closure returns `Ok`, so a failed
    /// edit leaves the record untouched.
    pub fn update_item<F>(&self, id: &str, apply: F) -> AppResult<Item>
    where
        F: FnOnce(&mut Item) -> AppResult<()>,
    {
        let mut state = self.write()?;
        let slot = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        let mut draft = slot.clone();
        apply(&mut draft)?;
        // Record identity is fixed for life.
        draft.id.clone_from(&slot.id);
        *slot = draft;
        Ok(slot.clone())
    }

    pub fn delete_item(&self, id: &str) -> AppResult<()> {
        let mut state = self.write()?;
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() == before {
            return Err(AppError::NotFound("Item not found".to_string()));
        }
        Ok(())
    }

    // --- Users ---

    /// Appends a new user. Emails are unique across the store.
    pub fn insert_user(&self, user: User) -> AppResult<User> {
        let mut state = self.write()?;
        if state.users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::Duplicate(
                "User already exists with this email".to_string(),
            ));
        }
        if state.users.iter().any(|existing| existing.id == user.id) {
            return Err(AppError::Duplicate(format!(
                "user id {} already exists",
                user.id
            )));
        }
        state.users.push(user.clone());
        Ok(user)
    }

    pub fn get_user(&self, id: &str) -> AppResult<User> {
        let state = self.read()?;
        state
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Returns every user in registration order.
    pub fn list_users(&self) -> AppResult<Vec<User>> {
        let state = self.read()?;
        Ok(state.users.clone())
    }

    /// Same scratch-copy contract as [`Store::update_item`].
    pub fn update_user<F>(&self, id: &str, apply: F) -> AppResult<User>
    where
        F: FnOnce(&mut User) -> AppResult<()>,
    {
        let mut state = self.write()?;
        let slot = state
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut draft = slot.clone();
        apply(&mut draft)?;
        draft.id.clone_from(&slot.id);
        *slot = draft;
        Ok(slot.clone())
    }

    /// Removes a user record. Items they reported stay in the store.
    pub fn delete_user(&self, id: &str) -> AppResult<()> {
        let mut state = self.write()?;
        let before = state.users.len();
        state.users.retain(|user| user.id != id);
        if state.users.len() == before {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }

    /// Clones both collections under a single read lock, so the pair is
    /// mutually consistent.
    pub fn snapshot(&self) -> AppResult<(Vec<Item>, Vec<User>)> {
        let state = self.read()?;
        Ok((state.items.clone(), state.users.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, ItemType, Role, UserStatus};
    use chrono::Utc;

    fn sample_item(id: &str, title: &str) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            description: "A sample record".to_string(),
            category: "Other".to_string(),
            item_type: ItemType::Lost,
            location: "Central Library".to_string(),
            date_reported: Utc::now(),
            status: ItemStatus::Active,
            owner_id: "u2".to_string(),
            owner_name: "John Doe".to_string(),
            owner_email: "student@kiit.ac.in".to_string(),
            owner_phone: "+91 9876543211".to_string(),
            images: vec![],
            tags: vec![],
            reward: None,
            updated_at: None,
        }
    }

    fn sample_user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            name: "Someone".to_string(),
            role: Role::Student,
            student_id: "KIIT2024002".to_string(),
            phone: "+91 9876543212".to_string(),
            joined_date: Utc::now(),
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_insert_and_get_item() {
        let store = Store::new();
        store.insert_item(sample_item("i1", "Keys")).unwrap();
        let fetched = store.get_item("i1").unwrap();
        assert_eq!(fetched.title, "Keys");
    }

    #[test]
    fn test_get_missing_item_is_not_found() {
        let store = Store::new();
        let err = store.get_item("nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_insert_duplicate_item_id_rejected() {
        let store = Store::new();
        store.insert_item(sample_item("i1", "Keys")).unwrap();
        let err = store.insert_item(sample_item("i1", "Wallet")).unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
    }

    #[test]
    fn test_update_commits_only_on_ok() {
        let store = Store::new();
        store.insert_item(sample_item("i1", "Keys")).unwrap();

        let err = store
            .update_item("i1", |item| {
                item.title = "Changed".to_string();
                Err(AppError::InvalidInput("rejecting mid-edit".to_string()))
            })
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(store.get_item("i1").unwrap().title, "Keys");

        let updated = store
            .update_item("i1", |item| {
                item.title = "Changed".to_string();
                Ok(())
            })
            .unwrap();
        assert_eq!(updated.title, "Changed");
        assert_eq!(store.get_item("i1").unwrap().title, "Changed");
    }

    #[test]
    fn test_update_preserves_record_identity() {
        let store = Store::new();
        store.insert_item(sample_item("i1", "Keys")).unwrap();
        let updated = store
            .update_item("i1", |item| {
                item.id = "hijacked".to_string();
                Ok(())
            })
            .unwrap();
        assert_eq!(updated.id, "i1");
        assert!(store.get_item("i1").is_ok());
    }

    #[test]
    fn test_delete_item() {
        let store = Store::new();
        store.insert_item(sample_item("i1", "Keys")).unwrap();
        store.delete_item("i1").unwrap();
        assert!(matches!(
            store.get_item("i1").unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            store.delete_item("i1").unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[test]
    fn test_query_results_are_detached_clones() {
        let store = Store::new();
        store.insert_item(sample_item("i1", "Keys")).unwrap();

        let mut results = store.query_items(&ItemFilter::default()).unwrap();
        results[0].title = "Scribbled on".to_string();

        assert_eq!(store.get_item("i1").unwrap().title, "Keys");
    }

    #[test]
    fn test_insert_user_rejects_duplicate_email() {
        let store = Store::new();
        store.insert_user(sample_user("u1", "a@kiit.ac.in")).unwrap();
        let err = store
            .insert_user(sample_user("u9", "a@kiit.ac.in"))
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
        assert_eq!(err.to_string(), "Duplicate: User already exists with this email");
    }

    #[test]
    fn test_delete_user_keeps_their_items() {
        let store = Store::new();
        store.insert_user(sample_user("u2", "b@kiit.ac.in")).unwrap();
        store.insert_item(sample_item("i1", "Keys")).unwrap();

        store.delete_user("u2").unwrap();
        assert!(store.get_item("i1").is_ok());
    }

    #[test]
    fn test_snapshot_returns_both_collections() {
        let store = Store::with_demo_data();
        let (items, users) = store.snapshot().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_clone_shares_state() {
        let store = Store::new();
        let handle = store.clone();
        handle.insert_item(sample_item("i1", "Keys")).unwrap();
        assert!(store.get_item("i1").is_ok());
    }
}
