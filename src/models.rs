use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::classifier::{ExpenseCategory, IncomeSource, Mood};

// The API returns raw documents; a `null` where a value is expected is read as
// the type's default rather than failing the whole snapshot.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One read of `/api/dashboard`. Replaced wholesale on every refresh.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub total_income: Option<f64>,
    #[serde(default)]
    pub total_expenses: Option<f64>,
    #[serde(default)]
    pub net_progress: Option<f64>,
    #[serde(default)]
    pub goal_amount: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub milestones: Vec<Milestone>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_income: Vec<IncomeEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_expenses: Vec<ExpenseEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Milestone {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_amount: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IncomeEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: IncomeSource,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExpenseEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct JournalEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

/// Row of `/api/analytics/income-sources`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SourceTotal {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub source: IncomeSource,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
}

/// Body of `POST /api/income`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewIncome {
    pub amount: f64,
    pub source: IncomeSource,
    pub description: String,
    pub date: NaiveDate,
}

/// Body of `POST /api/expenses`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
}

/// Body of `POST /api/journal`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub date: NaiveDate,
}
