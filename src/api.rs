use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::API_BASE_URL;
use crate::error::{FetchError, SubmissionError};
use crate::models::{
    DashboardSnapshot, ExpenseEntry, IncomeEntry, JournalEntry, NewExpense, NewIncome,
    NewJournalEntry, SourceTotal,
};

pub const DASHBOARD_PATH: &str = "/api/dashboard";
pub const INCOME_PATH: &str = "/api/income";
pub const EXPENSES_PATH: &str = "/api/expenses";
pub const JOURNAL_PATH: &str = "/api/journal";
pub const INCOME_SOURCES_PATH: &str = "/api/analytics/income-sources";

/// Record collections that can be deleted by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Income,
    Expenses,
    Journal,
}

impl Collection {
    pub fn path(self) -> &'static str {
        match self {
            Collection::Income => INCOME_PATH,
            Collection::Expenses => EXPENSES_PATH,
            Collection::Journal => JOURNAL_PATH,
        }
    }
}

/// The remote tracker API. Only the status code decides success; response
/// bodies of writes are ignored.
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, FetchError>;
    async fn list_income(&self) -> Result<Vec<IncomeEntry>, FetchError>;
    async fn list_expenses(&self) -> Result<Vec<ExpenseEntry>, FetchError>;
    async fn list_journal(&self) -> Result<Vec<JournalEntry>, FetchError>;
    async fn income_by_source(&self) -> Result<Vec<SourceTotal>, FetchError>;
    async fn submit_income(&self, entry: &NewIncome) -> Result<(), SubmissionError>;
    async fn submit_expense(&self, entry: &NewExpense) -> Result<(), SubmissionError>;
    async fn submit_journal(&self, entry: &NewJournalEntry) -> Result<(), SubmissionError>;
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), SubmissionError>;
}

/// `gloo-net` client for the tracker API. No timeouts, no retries.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| FetchError::Network {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        if !resp.ok() {
            return Err(FetchError::Status {
                endpoint: path.to_string(),
                status: resp.status(),
            });
        }

        resp.json::<T>().await.map_err(|e| FetchError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), SubmissionError> {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| SubmissionError::Encode {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        let resp = request.send().await.map_err(|e| SubmissionError::Network {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;

        check_status(path, resp).await
    }
}

async fn check_status(endpoint: &str, resp: Response) -> Result<(), SubmissionError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let detail = match resp.text().await {
        Ok(body) => error_detail(&body),
        Err(_) => None,
    };
    Err(SubmissionError::Status {
        endpoint: endpoint.to_string(),
        status,
        detail,
    })
}

/// Pulls the message out of a FastAPI error body (`{"detail": ...}`).
/// Validation errors carry a list; the first message is used.
fn error_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    match json.get("detail")? {
        serde_json::Value::String(msg) => Some(msg.clone()),
        serde_json::Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(|msg| msg.as_str())
            .map(str::to_string),
        _ => None,
    }
}

#[async_trait(?Send)]
impl DashboardApi for ApiClient {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, FetchError> {
        self.get_json(DASHBOARD_PATH).await
    }

    async fn list_income(&self) -> Result<Vec<IncomeEntry>, FetchError> {
        self.get_json(INCOME_PATH).await
    }

    async fn list_expenses(&self) -> Result<Vec<ExpenseEntry>, FetchError> {
        self.get_json(EXPENSES_PATH).await
    }

    async fn list_journal(&self) -> Result<Vec<JournalEntry>, FetchError> {
        self.get_json(JOURNAL_PATH).await
    }

    async fn income_by_source(&self) -> Result<Vec<SourceTotal>, FetchError> {
        self.get_json(INCOME_SOURCES_PATH).await
    }

    async fn submit_income(&self, entry: &NewIncome) -> Result<(), SubmissionError> {
        self.post_json(INCOME_PATH, entry).await
    }

    async fn submit_expense(&self, entry: &NewExpense) -> Result<(), SubmissionError> {
        self.post_json(EXPENSES_PATH, entry).await
    }

    async fn submit_journal(&self, entry: &NewJournalEntry) -> Result<(), SubmissionError> {
        self.post_json(JOURNAL_PATH, entry).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), SubmissionError> {
        let path = format!("{}/{}", collection.path(), id);
        let resp = Request::delete(&self.url(&path))
            .send()
            .await
            .map_err(|e| SubmissionError::Network {
                endpoint: path.clone(),
                message: e.to_string(),
            })?;
        check_status(&path, resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = ApiClient::new("https://tracker.example/");
        assert_eq!(client.url(DASHBOARD_PATH), "https://tracker.example/api/dashboard");
    }

    #[test]
    fn delete_paths_follow_the_collection() {
        assert_eq!(Collection::Income.path(), "/api/income");
        assert_eq!(Collection::Expenses.path(), "/api/expenses");
        assert_eq!(Collection::Journal.path(), "/api/journal");
    }

    #[test]
    fn error_detail_reads_fastapi_bodies() {
        assert_eq!(
            error_detail(r#"{"detail": "Income entry not found"}"#),
            Some("Income entry not found".to_string())
        );
        assert_eq!(
            error_detail(
                r#"{"detail": [{"loc": ["body", "amount"], "msg": "value is not a valid float", "type": "type_error.float"}]}"#
            ),
            Some("value is not a valid float".to_string())
        );
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(r#"{"message": "nope"}"#), None);
    }
}
