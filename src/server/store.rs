//! In-memory account, token and brief question store.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::error::ApiError;
use crate::auth::{generate_token, hash_password, verify_password};
use crate::domain::{validate_registration, Role};
use crate::models::{BriefQuestion, RegisterRequest, User, UsersPage};
use crate::startup::{ServerConfig, DEFAULT_TOKEN_TTL_SECS};

/// Default users per page.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Largest accepted page size.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Longest accepted token lifetime, in seconds (ten years).
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

fn ttl_from_secs(secs: u64) -> Duration {
    // Clamped so `now + ttl` cannot overflow.
    Duration::seconds(secs.min(MAX_TOKEN_TTL_SECS) as i64)
}

#[derive(Debug, Clone, Copy)]
struct IssuedToken {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password_hash: String,
}

/// Backing store for the REST service.
///
/// Users and questions are kept in insertion order, which is also their
/// creation order. Expired tokens are dropped whenever a new one is issued.
#[derive(Debug)]
pub struct Store {
    accounts: Vec<Account>,
    tokens: HashMap<String, IssuedToken>,
    token_ttl: Duration,
    questions: Vec<BriefQuestion>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            tokens: HashMap::new(),
            token_ttl: ttl_from_secs(DEFAULT_TOKEN_TTL_SECS),
            questions: Vec::new(),
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Create a store holding the admin account described by `config`.
    pub fn seeded(config: &ServerConfig) -> Self {
        let mut store = Self::new().with_token_ttl(ttl_from_secs(config.token_ttl_secs));
        store.insert_account(
            &config.admin_username,
            &config.admin_email,
            &config.admin_password,
            Role::Admin,
        );
        store
    }

    fn insert_account(&mut self, username: &str, email: &str, password: &str, role: Role) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            role,
            created_at: Utc::now(),
        };
        self.accounts.push(Account {
            user: user.clone(),
            password_hash: hash_password(password),
        });
        user
    }

    pub fn user_count(&self) -> usize {
        self.accounts.len()
    }

    /// Register a regular user.
    pub fn register(&mut self, request: &RegisterRequest) -> Result<User, ApiError> {
        let username = request.username.trim();
        let email = request.email.trim();
        validate_registration(username, email, &request.password)?;

        if self
            .accounts
            .iter()
            .any(|a| a.user.email.eq_ignore_ascii_case(email))
        {
            return Err(ApiError::Conflict("Email is already registered".to_string()));
        }
        if self
            .accounts
            .iter()
            .any(|a| a.user.username.eq_ignore_ascii_case(username))
        {
            return Err(ApiError::Conflict("Username is already taken".to_string()));
        }

        Ok(self.insert_account(username, email, &request.password, Role::User))
    }

    /// Check credentials and issue a bearer token.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(String, User), ApiError> {
        let email = email.trim();
        let user = self
            .accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
            .filter(|a| verify_password(password, &a.password_hash))
            .map(|a| a.user.clone())
            .ok_or(ApiError::InvalidCredentials)?;

        let now = Utc::now();
        self.prune_expired(now);

        let token = generate_token();
        self.tokens.insert(
            token.clone(),
            IssuedToken {
                user_id: user.id,
                expires_at: now + self.token_ttl,
            },
        );
        Ok((token, user))
    }

    /// Drop tokens that expired at or before `now`.
    pub fn prune_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.tokens.len();
        self.tokens.retain(|_, issued| issued.expires_at > now);
        before - self.tokens.len()
    }

    pub fn live_token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Revoke a token. Returns false if it was not live.
    pub fn logout(&mut self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }

    /// Resolve a live bearer token to its user. Expired tokens resolve to
    /// nothing even before they are pruned.
    pub fn user_for_token(&self, token: &str) -> Option<User> {
        let issued = self.tokens.get(token)?;
        if issued.expires_at <= Utc::now() {
            return None;
        }
        self.find_user(issued.user_id)
    }

    pub fn find_user(&self, id: Uuid) -> Option<User> {
        self.accounts
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
    }

    /// One page of users, oldest first.
    ///
    /// `limit` is clamped to `1..=MAX_PAGE_LIMIT` and `page` to at least 1.
    /// A page past the end is empty.
    pub fn list_users(&self, limit: u32, page: u32) -> UsersPage {
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);
        let page = page.max(1);
        let total = self.accounts.len() as u32;
        let total_pages = total.div_ceil(limit);

        let skip = ((page - 1) as usize).saturating_mul(limit as usize);
        let users = self
            .accounts
            .iter()
            .skip(skip)
            .take(limit as usize)
            .map(|a| a.user.clone())
            .collect();

        UsersPage { users, total_pages }
    }

    /// Delete a user and revoke their tokens.
    pub fn delete_user(&mut self, id: Uuid) -> Result<(), ApiError> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.user.id == id)
            .ok_or(ApiError::NotFound("User"))?;
        self.accounts.remove(index);
        self.tokens.retain(|_, issued| issued.user_id != id);
        Ok(())
    }

    /// Every brief question, oldest first.
    pub fn brief_questions(&self) -> Vec<BriefQuestion> {
        self.questions.clone()
    }

    pub fn add_brief_question(&mut self, question: &str) -> Result<BriefQuestion, ApiError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ApiError::BadRequest("Question cannot be empty".to_string()));
        }
        let entry = BriefQuestion {
            id: Uuid::new_v4(),
            question: question.to_string(),
            created_at: Utc::now(),
        };
        self.questions.push(entry.clone());
        Ok(entry)
    }

    pub fn delete_brief_question(&mut self, id: Uuid) -> Result<(), ApiError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(ApiError::NotFound("Brief question"))?;
        self.questions.remove(index);
        Ok(())
    }
}
