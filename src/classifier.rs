//! Categorical tags carried by records and their display labels.
//!
//! Each tag set is closed, with an `Unrecognized` variant that keeps whatever
//! raw value the API sent. Unknown tags are displayed verbatim.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Income,
    Expense,
}

/// Display label for a raw tag of the given record kind.
pub fn label_for(kind: RecordKind, tag: &str) -> String {
    match kind {
        RecordKind::Income => IncomeSource::from(tag).label().into_owned(),
        RecordKind::Expense => ExpenseCategory::from(tag).label().into_owned(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IncomeSource {
    Trading,
    Freelancing,
    SellingPhones,
    Other,
    Unrecognized(String),
}

impl IncomeSource {
    /// Selectable sources, in form order.
    pub const OPTIONS: [IncomeSource; 4] = [
        IncomeSource::Trading,
        IncomeSource::Freelancing,
        IncomeSource::SellingPhones,
        IncomeSource::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            IncomeSource::Trading => "trading",
            IncomeSource::Freelancing => "freelancing",
            IncomeSource::SellingPhones => "selling_phones",
            IncomeSource::Other => "other",
            IncomeSource::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> Cow<'_, str> {
        match self {
            IncomeSource::Trading => Cow::Borrowed("📈 Trading"),
            IncomeSource::Freelancing => Cow::Borrowed("💻 Freelancing"),
            IncomeSource::SellingPhones => Cow::Borrowed("📱 Selling Phones"),
            IncomeSource::Other => Cow::Borrowed("💼 Other"),
            IncomeSource::Unrecognized(raw) => Cow::Borrowed(raw.as_str()),
        }
    }
}

// A record with no tag at all displays as an empty label.
impl Default for IncomeSource {
    fn default() -> Self {
        IncomeSource::Unrecognized(String::new())
    }
}

impl From<&str> for IncomeSource {
    fn from(raw: &str) -> Self {
        match raw {
            "trading" => IncomeSource::Trading,
            "freelancing" => IncomeSource::Freelancing,
            "selling_phones" => IncomeSource::SellingPhones,
            "other" => IncomeSource::Other,
            _ => IncomeSource::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for IncomeSource {
    fn from(raw: String) -> Self {
        match IncomeSource::from(raw.as_str()) {
            IncomeSource::Unrecognized(_) => IncomeSource::Unrecognized(raw),
            known => known,
        }
    }
}

impl From<IncomeSource> for String {
    fn from(source: IncomeSource) -> Self {
        match source {
            IncomeSource::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    Wifi,
    Gym,
    TradingAccounts,
    TuitionDeposits,
    Food,
    Transport,
    Other,
    Unrecognized(String),
}

impl ExpenseCategory {
    pub const OPTIONS: [ExpenseCategory; 7] = [
        ExpenseCategory::Wifi,
        ExpenseCategory::Gym,
        ExpenseCategory::TradingAccounts,
        ExpenseCategory::TuitionDeposits,
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ExpenseCategory::Wifi => "wifi",
            ExpenseCategory::Gym => "gym",
            ExpenseCategory::TradingAccounts => "trading_accounts",
            ExpenseCategory::TuitionDeposits => "tuition_deposits",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Other => "other",
            ExpenseCategory::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> Cow<'_, str> {
        match self {
            ExpenseCategory::Wifi => Cow::Borrowed("🌐 WiFi"),
            ExpenseCategory::Gym => Cow::Borrowed("🏋️ Gym"),
            ExpenseCategory::TradingAccounts => Cow::Borrowed("📊 Trading Accounts"),
            ExpenseCategory::TuitionDeposits => Cow::Borrowed("🎓 Tuition Deposits"),
            ExpenseCategory::Food => Cow::Borrowed("🍕 Food"),
            ExpenseCategory::Transport => Cow::Borrowed("🚗 Transport"),
            ExpenseCategory::Other => Cow::Borrowed("💳 Other"),
            ExpenseCategory::Unrecognized(raw) => Cow::Borrowed(raw.as_str()),
        }
    }
}

impl Default for ExpenseCategory {
    fn default() -> Self {
        ExpenseCategory::Unrecognized(String::new())
    }
}

impl From<&str> for ExpenseCategory {
    fn from(raw: &str) -> Self {
        match raw {
            "wifi" => ExpenseCategory::Wifi,
            "gym" => ExpenseCategory::Gym,
            "trading_accounts" => ExpenseCategory::TradingAccounts,
            "tuition_deposits" => ExpenseCategory::TuitionDeposits,
            "food" => ExpenseCategory::Food,
            "transport" => ExpenseCategory::Transport,
            "other" => ExpenseCategory::Other,
            _ => ExpenseCategory::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for ExpenseCategory {
    fn from(raw: String) -> Self {
        match ExpenseCategory::from(raw.as_str()) {
            ExpenseCategory::Unrecognized(_) => ExpenseCategory::Unrecognized(raw),
            known => known,
        }
    }
}

impl From<ExpenseCategory> for String {
    fn from(category: ExpenseCategory) -> Self {
        match category {
            ExpenseCategory::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Positive,
    #[default]
    Neutral,
    Negative,
    Unrecognized(String),
}

impl Mood {
    pub const OPTIONS: [Mood; 3] = [Mood::Positive, Mood::Neutral, Mood::Negative];

    pub fn as_str(&self) -> &str {
        match self {
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
            Mood::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Mood::Positive => Cow::Borrowed("😊 Positive"),
            Mood::Neutral => Cow::Borrowed("😐 Neutral"),
            Mood::Negative => Cow::Borrowed("😔 Negative"),
            Mood::Unrecognized(raw) => Cow::Borrowed(raw.as_str()),
        }
    }
}

impl From<&str> for Mood {
    fn from(raw: &str) -> Self {
        match raw {
            "positive" => Mood::Positive,
            "neutral" => Mood::Neutral,
            "negative" => Mood::Negative,
            _ => Mood::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for Mood {
    fn from(raw: String) -> Self {
        Mood::from(raw.as_str())
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        mood.as_str().to_string()
    }
}
