//! User directory
//!
//! CRUD over user accounts. Each call loads the whole `users` collection,
//! works on it in memory, and saves it back on success. Usernames are
//! compared and stored without surrounding whitespace.

use log::{info, warn};
use std::sync::Arc;

use super::model::{User, UserSummary};
use crate::auth::permissions::{Operation, authorize};
use crate::auth::validator::{validate_password_entry, validate_username};
use crate::auth::{Identity, PasswordHasher, Role};
use crate::error::UserError;
use crate::storage::{CollectionStore, USERS, load_typed, save_typed};

#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn CollectionStore>,
    hasher: PasswordHasher,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn CollectionStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    fn load(&self) -> Vec<User> {
        let mut users: Vec<User> = load_typed(&*self.store, USERS);
        users.retain(|user| {
            let keep = user.role != Role::Guest;
            if !keep {
                warn!("Ignoring stored guest account '{}'", user.username);
            }
            keep
        });
        users
    }

    fn save(&self, users: &[User]) -> Result<(), UserError> {
        save_typed(&*self.store, USERS, users)?;
        Ok(())
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        let username = username.trim();
        self.load().into_iter().find(|user| user.username == username)
    }

    pub fn admin_exists(&self) -> bool {
        self.load().iter().any(|user| user.role == Role::Admin)
    }

    /// Creates the admin account. Only one admin may ever be signed up.
    pub fn create_admin(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<User, UserError> {
        if self.admin_exists() {
            warn!("Refused admin signup for '{}': admin exists", username);
            return Err(UserError::DuplicateAdmin);
        }
        self.create(username, password, confirmation, Role::Admin)
    }

    pub fn create_staff(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<User, UserError> {
        self.create(username, password, confirmation, Role::Staff)
    }

    fn create(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
        role: Role,
    ) -> Result<User, UserError> {
        let username = username.trim();
        validate_username(username)?;
        validate_password_entry(password, confirmation)?;

        let mut users = self.load();
        if users.iter().any(|user| user.username == username) {
            warn!("Refused signup: username '{}' taken", username);
            return Err(UserError::DuplicateUsername(username.to_string()));
        }

        let password_hash = self
            .hasher
            .hash(password)
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            username: username.to_string(),
            password_hash,
            role,
        };
        users.push(user.clone());
        self.save(&users)?;

        info!("Created {} account '{}'", role, username);
        Ok(user)
    }

    /// Removes an account. The sole admin can never be removed, and nobody
    /// may remove themselves.
    pub fn delete_user(&self, requester: &Identity, target: &str) -> Result<User, UserError> {
        authorize(requester, Operation::DeleteUser)?;
        let target = target.trim();

        let mut users = self.load();
        let index = users
            .iter()
            .position(|user| user.username == target)
            .ok_or_else(|| UserError::NotFound(target.to_string()))?;

        let admins = users.iter().filter(|user| user.role == Role::Admin).count();
        if users[index].role == Role::Admin && admins <= 1 {
            warn!("Refused to delete '{}': last admin", target);
            return Err(UserError::LastAdminProtected(target.to_string()));
        }

        if target == requester.username() {
            warn!("Refused self-deletion by '{}'", target);
            return Err(UserError::SelfDeletion);
        }

        let removed = users.remove(index);
        self.save(&users)?;

        info!("{} deleted user '{}'", requester, removed.username);
        Ok(removed)
    }

    pub fn list_users(&self, requester: &Identity) -> Result<Vec<UserSummary>, UserError> {
        authorize(requester, Operation::ListUsers)?;
        Ok(self.load().iter().map(User::summary).collect())
    }
}
