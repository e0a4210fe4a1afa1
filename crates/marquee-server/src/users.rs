//! Registered accounts

use crate::auth::{hash_password, verify_password};
use crate::error::{Result, ServerError};
use marquee_client::User;
use std::collections::HashMap;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password_hash: String,
}

/// Users keyed by id, with a case-insensitive email index
#[derive(Debug, Default)]
pub struct UserDirectory {
    accounts: HashMap<String, Account>,
    by_email: HashMap<String, String>,
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ServerError::BadRequest(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Reject a registration before any hashing is done
    pub fn check_registration(&self, name: &str, email: &str, password: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ServerError::BadRequest("name is required".to_string()));
        }
        validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ServerError::BadRequest(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        self.ensure_email_free(email)
    }

    fn ensure_email_free(&self, email: &str) -> Result<()> {
        if self.by_email.contains_key(&email_key(email)) {
            return Err(ServerError::Conflict(format!(
                "an account for {} already exists",
                email.trim()
            )));
        }
        Ok(())
    }

    /// Store an account whose password is already hashed
    ///
    /// The email is checked again here since another registration may have
    /// taken it while the hash was computed.
    pub fn insert(&mut self, name: &str, email: &str, password_hash: String) -> Result<User> {
        self.ensure_email_free(email)?;

        let user = User::new(uuid::Uuid::new_v4().to_string(), name.trim(), email.trim());
        let account = Account {
            user: user.clone(),
            password_hash,
        };
        self.by_email.insert(email_key(email), user.id.clone());
        self.accounts.insert(user.id.clone(), account);
        log::info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Validate, hash and store in one step; blocks for the hash
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        self.check_registration(name, email, password)?;
        self.insert(name, email, hash_password(password)?)
    }

    /// The user behind `email` together with their stored password hash
    pub fn credentials(&self, email: &str) -> Option<(User, String)> {
        self.by_email
            .get(&email_key(email))
            .and_then(|id| self.accounts.get(id))
            .map(|account| (account.user.clone(), account.password_hash.clone()))
    }

    /// The user behind `email`, if the password matches; blocks for the check
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        self.credentials(email)
            .filter(|(_, hash)| verify_password(password, hash))
            .map(|(user, _)| user)
            .ok_or(ServerError::InvalidCredentials)
    }

    pub fn get(&self, id: &str) -> Result<&User> {
        self.accounts
            .get(id)
            .map(|account| &account.user)
            .ok_or_else(|| ServerError::NotFound("user".to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut User> {
        self.accounts
            .get_mut(id)
            .map(|account| &mut account.user)
            .ok_or_else(|| ServerError::NotFound("user".to_string()))
    }

    /// Change name and/or email; a new email must not belong to someone else
    pub fn update_profile(
        &mut self,
        id: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<User> {
        let current_key = email_key(&self.get(id)?.email);

        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(ServerError::BadRequest("name is required".to_string()));
            }
        }
        if let Some(email) = email {
            validate_email(email)?;
            let key = email_key(email);
            if key != current_key && self.by_email.contains_key(&key) {
                return Err(ServerError::Conflict(format!(
                    "an account for {} already exists",
                    email.trim()
                )));
            }
            self.by_email.remove(&current_key);
            self.by_email.insert(key, id.to_string());
        }

        let user = self.get_mut(id)?;
        if let Some(name) = name {
            user.name = name.trim().to_string();
        }
        if let Some(email) = email {
            user.email = email.trim().to_string();
        }
        Ok(user.clone())
    }
}
