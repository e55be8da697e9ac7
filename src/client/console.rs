//! Admin console page models.
//!
//! Each page owns its data, a [`Pagination`] where it lists pages, and a
//! local error banner. Failures never escape a page: they are turned into
//! the banner text and the page keeps its previous data.

use uuid::Uuid;

use super::admin::AdminClient;
use super::error::ClientError;
use crate::domain::{PageItem, Pagination};
use crate::error::{ErrorCategory, MarkleeError};
use crate::models::{BriefQuestion, User};
use crate::traits::HttpClient;

/// Default number of users per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// The error banner a page shows after a failed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub hint: &'static str,
    /// Whether the page offers a retry button.
    pub retryable: bool,
}

impl Banner {
    fn from_client_error(err: &ClientError) -> Self {
        let unified = MarkleeError::from(err.clone());
        Self {
            message: err.ui_message(),
            hint: unified.recovery_hint(),
            retryable: unified.is_retryable(),
        }
    }

    /// Input rejected before anything was sent.
    fn invalid_input(message: &str) -> Self {
        Self {
            message: message.to_string(),
            hint: ErrorCategory::User.recovery_hint(),
            retryable: false,
        }
    }
}

fn report(action: &str, err: &ClientError) -> Banner {
    let code = MarkleeError::from(err.clone()).error_code();
    tracing::warn!(action, code, error = %err, "Admin request failed");
    Banner::from_client_error(err)
}

/// The user management page.
#[derive(Debug, Clone)]
pub struct UserManagementPage {
    users: Vec<User>,
    pagination: Pagination,
    page_size: u32,
    error: Option<Banner>,
}

impl Default for UserManagementPage {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl UserManagementPage {
    pub fn new(page_size: u32) -> Self {
        Self {
            users: Vec::new(),
            pagination: Pagination::new(1, 1),
            page_size: page_size.max(1),
            error: None,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|b| b.message.as_str())
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.error.as_ref()
    }

    /// Recovery hint shown under the error message.
    pub fn error_hint(&self) -> Option<&'static str> {
        self.error.as_ref().map(|b| b.hint)
    }

    pub fn can_retry(&self) -> bool {
        self.error.as_ref().is_some_and(|b| b.retryable)
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    /// The page-number window for the footer.
    pub fn page_items(&self) -> Vec<PageItem> {
        self.pagination.items()
    }

    /// Fetch `page` and replace the list. The pagination is left alone.
    async fn fetch<C: HttpClient>(&mut self, client: &AdminClient<C>, page: u32) -> Option<u32> {
        match client.list_users(self.page_size, page).await {
            Ok(result) => {
                self.users = result.users;
                self.error = None;
                Some(result.total_pages)
            }
            Err(e) => {
                self.error = Some(report("list users", &e));
                None
            }
        }
    }

    /// Fetch the current page. Returns true on success.
    pub async fn refresh<C: HttpClient>(&mut self, client: &AdminClient<C>) -> bool {
        let current = self.pagination.current_page();
        match self.fetch(client, current).await {
            Some(total_pages) => {
                self.pagination.set_total_pages(total_pages);
                true
            }
            None => false,
        }
    }

    /// Jump to `page`. Nothing is fetched when the page is out of range or
    /// already selected. The selection only moves once the fetch succeeds,
    /// so a failed jump can be retried.
    pub async fn go_to<C: HttpClient>(&mut self, client: &AdminClient<C>, page: u32) -> bool {
        let mut target = self.pagination.clone();
        if target.select(page).is_none() {
            return false;
        }
        match self.fetch(client, page).await {
            Some(total_pages) => {
                target.set_total_pages(total_pages);
                self.pagination = target;
                true
            }
            None => false,
        }
    }

    pub async fn next_page<C: HttpClient>(&mut self, client: &AdminClient<C>) -> bool {
        let next = self.pagination.current_page().saturating_add(1);
        self.go_to(client, next).await
    }

    pub async fn previous_page<C: HttpClient>(&mut self, client: &AdminClient<C>) -> bool {
        let previous = self.pagination.current_page().saturating_sub(1);
        self.go_to(client, previous).await
    }

    /// Delete a user, then reload the current page.
    pub async fn delete_user<C: HttpClient>(&mut self, client: &AdminClient<C>, id: Uuid) -> bool {
        if let Err(e) = client.delete_user(id).await {
            self.error = Some(report("delete user", &e));
            return false;
        }
        self.refresh(client).await
    }
}

/// The brief questions editor.
#[derive(Debug, Clone, Default)]
pub struct BriefQuestionsPage {
    questions: Vec<BriefQuestion>,
    draft: String,
    error: Option<Banner>,
}

impl BriefQuestionsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[BriefQuestion] {
        &self.questions
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|b| b.message.as_str())
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.error.as_ref()
    }

    /// Recovery hint shown under the error message.
    pub fn error_hint(&self) -> Option<&'static str> {
        self.error.as_ref().map(|b| b.hint)
    }

    pub fn can_retry(&self) -> bool {
        self.error.as_ref().is_some_and(|b| b.retryable)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub async fn refresh<C: HttpClient>(&mut self, client: &AdminClient<C>) -> bool {
        match client.list_brief_questions().await {
            Ok(questions) => {
                self.questions = questions;
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(report("list brief questions", &e));
                false
            }
        }
    }

    /// Submit the draft. An empty draft is rejected locally.
    pub async fn submit<C: HttpClient>(&mut self, client: &AdminClient<C>) -> bool {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            self.error = Some(Banner::invalid_input("Question cannot be empty"));
            return false;
        }
        match client.create_brief_question(&text).await {
            Ok(question) => {
                self.questions.push(question);
                self.draft.clear();
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(report("create brief question", &e));
                false
            }
        }
    }

    pub async fn delete<C: HttpClient>(&mut self, client: &AdminClient<C>, id: Uuid) -> bool {
        match client.delete_brief_question(id).await {
            Ok(()) => {
                self.questions.retain(|q| q.id != id);
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(report("delete brief question", &e));
                false
            }
        }
    }
}
