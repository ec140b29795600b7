//! Storage service requests
//!
//! `ApiClient` turns reads and validated drafts into `ApiRequest` values.
//! Sending them is left to a `Transport`, so no HTTP stack lives here.

use std::fmt;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{
    Budget, BudgetDraft, BudgetId, Category, CategoryDraft, CategoryId, Expense, ExpenseDraft,
    ExpenseId, Month, Snapshot, SnapshotWindow,
};

use super::SnapshotSource;

/// Bearer token issued by the authentication service
///
/// The token is never printed; `Debug` and `Display` redact it.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request to the storage service, ready for a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with '/'
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Full URL for this request under `base`
    ///
    /// Query values are dates, integers and ids, none of which need escaping.
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

/// Sends requests to the storage service
///
/// Implementations own connection handling and retries. A non-success
/// response should be reported as `PocketbookError::Source`.
pub trait Transport {
    fn send(&self, request: &ApiRequest, token: &BearerToken) -> PocketbookResult<Value>;
}

/// Builds requests for one authenticated user
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: BearerToken,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: BearerToken) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    /// `Authorization` header value for every request from this client
    pub fn authorization(&self) -> String {
        self.token.header_value()
    }

    pub fn url(&self, request: &ApiRequest) -> String {
        request.url(&self.base_url)
    }

    pub fn list_categories(&self) -> ApiRequest {
        ApiRequest::new(Method::Get, "/categories")
    }

    /// Expenses dated within `[start, end]`
    pub fn list_expenses(&self, start: NaiveDate, end: NaiveDate) -> ApiRequest {
        ApiRequest::new(Method::Get, "/expenses")
            .with_query("startDate", start.format("%Y-%m-%d"))
            .with_query("endDate", end.format("%Y-%m-%d"))
    }

    pub fn list_budgets(&self, month: Month) -> ApiRequest {
        ApiRequest::new(Method::Get, "/budgets")
            .with_query("year", month.year)
            .with_query("month", month.month)
    }

    pub fn create_expense(&self, draft: &ExpenseDraft) -> PocketbookResult<ApiRequest> {
        let body = expense_body(draft)?;
        Ok(ApiRequest::new(Method::Post, "/expenses").with_body(body))
    }

    pub fn update_expense(
        &self,
        id: &ExpenseId,
        draft: &ExpenseDraft,
    ) -> PocketbookResult<ApiRequest> {
        let body = expense_body(draft)?;
        Ok(ApiRequest::new(Method::Put, format!("/expenses/{}", id)).with_body(body))
    }

    pub fn delete_expense(&self, id: &ExpenseId) -> ApiRequest {
        ApiRequest::new(Method::Delete, format!("/expenses/{}", id))
    }

    pub fn create_category(&self, draft: &CategoryDraft) -> PocketbookResult<ApiRequest> {
        let body = category_body(draft)?;
        Ok(ApiRequest::new(Method::Post, "/categories").with_body(body))
    }

    pub fn update_category(
        &self,
        id: &CategoryId,
        draft: &CategoryDraft,
    ) -> PocketbookResult<ApiRequest> {
        let body = category_body(draft)?;
        Ok(ApiRequest::new(Method::Put, format!("/categories/{}", id)).with_body(body))
    }

    /// Delete a category that no expense in `snapshot` still uses
    pub fn delete_category(
        &self,
        id: &CategoryId,
        snapshot: &Snapshot,
    ) -> PocketbookResult<ApiRequest> {
        let in_use = snapshot
            .expenses
            .iter()
            .filter(|e| &e.category_id == id)
            .count();
        if in_use > 0 {
            return Err(PocketbookError::Validation(format!(
                "Category {} has {} expense(s); reassign or delete them first",
                id, in_use
            )));
        }
        Ok(ApiRequest::new(Method::Delete, format!("/categories/{}", id)))
    }

    pub fn update_budget(
        &self,
        id: &BudgetId,
        draft: &BudgetDraft,
    ) -> PocketbookResult<ApiRequest> {
        draft.validate()?;
        let body = serde_json::to_value(draft)?;
        Ok(ApiRequest::new(Method::Put, format!("/budgets/{}", id)).with_body(body))
    }
}

fn expense_body(draft: &ExpenseDraft) -> PocketbookResult<Value> {
    let payload = draft.to_payload()?;
    Ok(serde_json::to_value(payload)?)
}

fn category_body(draft: &CategoryDraft) -> PocketbookResult<Value> {
    draft.validate()?;
    let trimmed = CategoryDraft {
        name: draft.name.trim().to_string(),
        ..draft.clone()
    };
    Ok(serde_json::to_value(&trimmed)?)
}

/// Fetches snapshots from the storage service through a transport
pub struct ApiSnapshotSource<T: Transport> {
    client: ApiClient,
    transport: T,
}

impl<T: Transport> ApiSnapshotSource<T> {
    pub fn new(client: ApiClient, transport: T) -> Self {
        Self { client, transport }
    }

    fn get<R: DeserializeOwned>(&self, request: &ApiRequest) -> PocketbookResult<Vec<R>> {
        debug!(method = %request.method, url = %self.client.url(request), "sending request");
        let value = self.transport.send(request, self.client.token())?;
        serde_json::from_value(value).map_err(|e| {
            PocketbookError::Source(format!("Unexpected response from {}: {}", request.path, e))
        })
    }
}

impl<T: Transport> SnapshotSource for ApiSnapshotSource<T> {
    fn fetch(&self, window: &SnapshotWindow) -> PocketbookResult<Snapshot> {
        let categories: Vec<Category> = self.get(&self.client.list_categories())?;
        let expenses: Vec<Expense> =
            self.get(&self.client.list_expenses(window.start, window.end))?;
        let budgets: Vec<Budget> = self.get(&self.client.list_budgets(window.budget_month))?;
        Ok(Snapshot::new(categories, expenses, budgets))
    }
}
