use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::Caller;
use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemDraft, ItemStatus, ItemUpdate, Role, User, UserStatus, MAX_IMAGES};
use crate::query::ItemFilter;
use crate::store::Store;

/// Item reporting, lookup and lifecycle operations.
pub struct ItemsService {
    store: Store,
    latency: Duration,
}

impl ItemsService {
    pub fn new(store: Store, latency: Duration) -> Self {
        Self { store, latency }
    }

    /// Every operation pays this up front, success or failure, like the
    /// network round trip it stands in for.
    async fn simulate_latency(&self) {
        tokio::time::sleep(self.latency).await;
    }

    /// Resolves the caller against the user store. Role and account status
    /// come from the stored record, never from the caller's own claims.
    fn resolve_caller(&self, caller: &Caller) -> AppResult<User> {
        let user = match self.store.get_user(&caller.user_id) {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => {
                tracing::warn!("Denied unknown caller: {}", caller.user_id);
                return Err(AppError::PermissionDenied(
                    "Caller is not a registered user".to_string(),
                ));
            }
            Err(e) => return Err(e),
        };
        if user.status != UserStatus::Active {
            tracing::warn!("Denied suspended account: {}", user.id);
            return Err(AppError::PermissionDenied("Account suspended".to_string()));
        }
        Ok(user)
    }

    fn verify_can_edit(acting: &User, item: &Item) -> AppResult<()> {
        if acting.role == Role::Admin || acting.id == item.owner_id {
            Ok(())
        } else {
            tracing::warn!("Denied {}: not the reporter of item {}", acting.id, item.id);
            Err(AppError::PermissionDenied(
                "Only the reporter or an admin can modify this item".to_string(),
            ))
        }
    }

    fn validate_draft(draft: &ItemDraft) -> AppResult<()> {
        require_field(&draft.title, "Title")?;
        require_field(&draft.description, "Description")?;
        require_field(&draft.category, "Category")?;
        require_field(&draft.location, "Location")?;
        require_field(&draft.owner_id, "Owner id")?;
        require_field(&draft.owner_name, "Owner name")?;
        require_field(&draft.owner_email, "Owner email")?;
        require_field(&draft.owner_phone, "Owner phone")?;
        validate_reward(draft.reward)?;
        validate_images(&draft.images)?;
        Ok(())
    }

    fn validate_update(item: &Item, update: &ItemUpdate) -> AppResult<()> {
        if let Some(title) = &update.title {
            require_field(title, "Title")?;
        }
        if let Some(description) = &update.description {
            require_field(description, "Description")?;
        }
        if let Some(category) = &update.category {
            require_field(category, "Category")?;
        }
        if let Some(location) = &update.location {
            require_field(location, "Location")?;
        }
        if update.status == Some(ItemStatus::Active) && item.status == ItemStatus::Resolved {
            return Err(AppError::InvalidInput(
                "A resolved item cannot be reopened".to_string(),
            ));
        }
        validate_reward(update.reward)?;
        if let Some(images) = &update.images {
            validate_images(images)?;
        }
        Ok(())
    }

    fn apply_update(item: &mut Item, update: ItemUpdate) {
        let ItemUpdate {
            title,
            description,
            category,
            location,
            status,
            images,
            tags,
            reward,
        } = update;
        if let Some(title) = title {
            item.title = title;
        }
        if let Some(description) = description {
            item.description = description;
        }
        if let Some(category) = category {
            item.category = category;
        }
        if let Some(location) = location {
            item.location = location;
        }
        if let Some(status) = status {
            item.status = status;
        }
        if let Some(images) = images {
            item.images = images;
        }
        if let Some(tags) = tags {
            item.tags = tags;
        }
        if let Some(reward) = reward {
            item.reward = Some(reward);
        }
        item.updated_at = Some(Utc::now());
    }

    /// Returns matching items, newest first. Open to any caller.
    pub async fn list_items(&self, filter: &ItemFilter) -> AppResult<Vec<Item>> {
        self.simulate_latency().await;
        self.store.query_items(filter)
    }

    pub async fn get_item(&self, id: &str) -> AppResult<Item> {
        self.simulate_latency().await;
        self.store.get_item(id)
    }

    /// Files a new report. The record always starts active with a fresh id
    /// and a server-side timestamp; students can only report under their
    /// own account, admins may file on someone's behalf.
    pub async fn create_item(&self, caller: &Caller, draft: ItemDraft) -> AppResult<Item> {
        self.simulate_latency().await;

        let acting = self.resolve_caller(caller)?;
        if draft.owner_id != acting.id && acting.role != Role::Admin {
            tracing::warn!(
                "Denied {}: filing a report owned by {}",
                acting.id,
                draft.owner_id
            );
            return Err(AppError::PermissionDenied(
                "Items can only be reported under the caller's own account".to_string(),
            ));
        }
        Self::validate_draft(&draft)?;

        let item = self.store.insert_item(Item {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            item_type: draft.item_type,
            location: draft.location,
            date_reported: Utc::now(),
            status: ItemStatus::Active,
            owner_id: draft.owner_id,
            owner_name: draft.owner_name,
            owner_email: draft.owner_email,
            owner_phone: draft.owner_phone,
            images: draft.images,
            tags: draft.tags,
            reward: draft.reward,
            updated_at: None,
        })?;
        tracing::info!("Item created: {} ({})", item.id, item.title);
        Ok(item)
    }

    /// Merges the provided fields into the stored record and stamps
    /// `updated_at`. Permission and validation run against the live record
    /// under the store's write lock, so a rejected edit changes nothing.
    pub async fn update_item(
        &self,
        caller: &Caller,
        id: &str,
        update: ItemUpdate,
    ) -> AppResult<Item> {
        self.simulate_latency().await;

        let acting = self.resolve_caller(caller)?;
        let updated = self.store.update_item(id, |item| {
            Self::verify_can_edit(&acting, item)?;
            Self::validate_update(item, &update)?;
            Self::apply_update(item, update);
            Ok(())
        })?;
        tracing::info!("Item updated: {}", updated.id);
        Ok(updated)
    }

    /// Marks a report resolved. Resolving an already-resolved item succeeds
    /// without touching the record.
    pub async fn resolve_item(&self, caller: &Caller, id: &str) -> AppResult<Item> {
        self.simulate_latency().await;

        let acting = self.resolve_caller(caller)?;
        let resolved = self.store.update_item(id, |item| {
            Self::verify_can_edit(&acting, item)?;
            if item.status != ItemStatus::Resolved {
                item.status = ItemStatus::Resolved;
                item.updated_at = Some(Utc::now());
            }
            Ok(())
        })?;
        tracing::info!("Item resolved: {}", resolved.id);
        Ok(resolved)
    }

    pub async fn delete_item(&self, caller: &Caller, id: &str) -> AppResult<()> {
        self.simulate_latency().await;

        let acting = self.resolve_caller(caller)?;
        let item = self.store.get_item(id)?;
        Self::verify_can_edit(&acting, &item)?;
        self.store.delete_item(id)?;
        tracing::info!("Item deleted: {}", id);
        Ok(())
    }
}

fn require_field(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

fn validate_reward(reward: Option<i64>) -> AppResult<()> {
    match reward {
        Some(amount) if amount < 0 => Err(AppError::InvalidInput(
            "Reward cannot be negative".to_string(),
        )),
        _ => Ok(()),
    }
}

fn validate_images(images: &[String]) -> AppResult<()> {
    if images.len() > MAX_IMAGES {
        return Err(AppError::InvalidInput(format!(
            "At most {MAX_IMAGES} images are allowed"
        )));
    }
    Ok(())
}
