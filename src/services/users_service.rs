use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::Caller;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, Role, User, UserStatus, UserUpdate};
use crate::store::Store;

/// Account registration and administration.
pub struct UsersService {
    store: Store,
    latency: Duration,
}

impl UsersService {
    pub fn new(store: Store, latency: Duration) -> Self {
        Self { store, latency }
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(self.latency).await;
    }

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

    fn verify_admin(&self, caller: &Caller) -> AppResult<User> {
        let acting = self.resolve_caller(caller)?;
        if acting.role != Role::Admin {
            tracing::warn!("Denied {}: admin role required", acting.id);
            return Err(AppError::PermissionDenied("Admin role required".to_string()));
        }
        Ok(acting)
    }

    /// Creates an account. Open to anyone; registration always yields an
    /// active student, admin accounts come from provisioning.
    pub async fn register_user(&self, registration: NewUser) -> AppResult<User> {
        self.simulate_latency().await;

        if registration.name.trim().is_empty() {
            return Err(AppError::InvalidInput("Name is required".to_string()));
        }
        if !registration.email.contains('@') {
            return Err(AppError::InvalidInput(
                "A valid email is required".to_string(),
            ));
        }

        let user = self.store.insert_user(User {
            id: Uuid::new_v4().to_string(),
            email: registration.email,
            name: registration.name,
            role: Role::Student,
            student_id: registration.student_id,
            phone: registration.phone,
            joined_date: Utc::now(),
            status: UserStatus::Active,
        })?;
        tracing::info!("User registered: {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Returns every account in registration order. Admin only.
    pub async fn list_users(&self, caller: &Caller) -> AppResult<Vec<User>> {
        self.simulate_latency().await;
        self.verify_admin(caller)?;
        self.store.list_users()
    }

    /// Fetches one account. Users can read their own profile, admins any.
    pub async fn get_user(&self, caller: &Caller, id: &str) -> AppResult<User> {
        self.simulate_latency().await;

        let acting = self.resolve_caller(caller)?;
        if acting.id != id && acting.role != Role::Admin {
            tracing::warn!("Denied {}: reading profile of {}", acting.id, id);
            return Err(AppError::PermissionDenied(
                "Only the account owner or an admin can view this profile".to_string(),
            ));
        }
        self.store.get_user(id)
    }

    /// Merges the provided fields into an account. Users can edit their own
    /// name and phone; status changes (suspend / reinstate) are admin only.
    pub async fn update_user(
        &self,
        caller: &Caller,
        id: &str,
        update: UserUpdate,
    ) -> AppResult<User> {
        self.simulate_latency().await;

        let acting = self.resolve_caller(caller)?;
        let is_admin = acting.role == Role::Admin;
        if acting.id != id && !is_admin {
            tracing::warn!("Denied {}: editing profile of {}", acting.id, id);
            return Err(AppError::PermissionDenied(
                "Only the account owner or an admin can edit this profile".to_string(),
            ));
        }
        if update.status.is_some() && !is_admin {
            tracing::warn!("Denied {}: changing account status", acting.id);
            return Err(AppError::PermissionDenied(
                "Only an admin can change account status".to_string(),
            ));
        }
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(AppError::InvalidInput("Name is required".to_string()));
            }
        }

        let updated = self.store.update_user(id, |user| {
            let UserUpdate { name, phone, status } = update;
            if let Some(name) = name {
                user.name = name;
            }
            if let Some(phone) = phone {
                user.phone = phone;
            }
            if let Some(status) = status {
                user.status = status;
            }
            Ok(())
        })?;
        tracing::info!("User updated: {}", updated.id);
        Ok(updated)
    }

    /// Removes an account. Admin only. Items the user reported stay listed
    /// with their denormalized contact snapshot.
    pub async fn delete_user(&self, caller: &Caller, id: &str) -> AppResult<()> {
        self.simulate_latency().await;

        self.verify_admin(caller)?;
        self.store.delete_user(id)?;
        tracing::info!("User deleted: {}", id);
        Ok(())
    }
}
