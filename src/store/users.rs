//! User repository

use parking_lot::RwLock;
use validator::Validate;

use crate::domain::user::{RegisterRequest, User};
use crate::{Result, StoreError};

#[derive(Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Plaintext credential check against the fixture data.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        self.users
            .read()
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
            .ok_or(StoreError::InvalidCredentials)
    }

    pub fn register(&self, req: RegisterRequest) -> Result<User> {
        req.validate()?;
        let mut users = self.users.write();
        if users.iter().any(|u| u.email == req.email) {
            return Err(StoreError::Validation("Email already registered".into()));
        }
        let user = User::new(req.name, req.email, req.password);
        users.push(user.clone());
        Ok(user)
    }

    pub fn find(&self, id: &str) -> Result<User> {
        self.users
            .read()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("User"))
    }

    pub fn list(&self) -> Vec<User> {
        self.users.read().clone()
    }

    pub fn count(&self) -> usize {
        self.users.read().len()
    }
}
