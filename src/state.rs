//! Whole-app view state and the reducer that advances it.
//!
//! Every UI event and every network outcome becomes an [`Action`]; nothing
//! else mutates what is on screen.

use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use crate::classifier::{ExpenseCategory, IncomeSource, Mood};
use crate::error::FormError;
use crate::models::{
    DashboardSnapshot, ExpenseEntry, IncomeEntry, JournalEntry, NewExpense, NewIncome,
    NewJournalEntry, SourceTotal,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Income,
    Expenses,
    Milestones,
    Journal,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Income,
        Tab::Expenses,
        Tab::Milestones,
        Tab::Journal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "📊 Dashboard",
            Tab::Income => "💰 Income",
            Tab::Expenses => "💸 Expenses",
            Tab::Milestones => "🏆 Milestones",
            Tab::Journal => "📝 Journal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    AddIncome,
    AddExpense,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Income,
    Expense,
    Journal,
}

impl FormKind {
    fn success_message(self) -> &'static str {
        match self {
            FormKind::Income => "Income added.",
            FormKind::Expense => "Expense added.",
            FormKind::Journal => "Journal entry added successfully!",
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            FormKind::Income => "Could not add income",
            FormKind::Expense => "Could not add expense",
            FormKind::Journal => "Could not add journal entry",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::MissingAmount);
    }
    let amount = raw
        .parse::<f64>()
        .map_err(|_| FormError::InvalidAmount(raw.to_string()))?;
    if !amount.is_finite() {
        return Err(FormError::InvalidAmount(raw.to_string()));
    }
    if amount <= 0.0 {
        return Err(FormError::NonPositiveAmount);
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(raw.to_string()))
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct IncomeForm {
    pub amount: String,
    pub source: IncomeSource,
    pub description: String,
    pub date: String,
}

impl IncomeForm {
    pub fn new(today: NaiveDate) -> Self {
        IncomeForm {
            amount: String::new(),
            source: IncomeSource::Trading,
            description: String::new(),
            date: iso(today),
        }
    }

    pub fn to_entry(&self) -> Result<NewIncome, FormError> {
        Ok(NewIncome {
            amount: parse_amount(&self.amount)?,
            source: self.source.clone(),
            description: self.description.trim().to_string(),
            date: parse_date(&self.date)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: String,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        ExpenseForm {
            amount: String::new(),
            category: ExpenseCategory::Wifi,
            description: String::new(),
            date: iso(today),
        }
    }

    pub fn to_entry(&self) -> Result<NewExpense, FormError> {
        Ok(NewExpense {
            amount: parse_amount(&self.amount)?,
            category: self.category.clone(),
            description: self.description.trim().to_string(),
            date: parse_date(&self.date)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JournalForm {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub date: String,
}

impl JournalForm {
    pub fn new(today: NaiveDate) -> Self {
        JournalForm {
            title: String::new(),
            content: String::new(),
            mood: Mood::Neutral,
            date: iso(today),
        }
    }

    pub fn to_entry(&self) -> Result<NewJournalEntry, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.content.trim().is_empty() {
            return Err(FormError::MissingContent);
        }
        Ok(NewJournalEntry {
            title: title.to_string(),
            content: self.content.clone(),
            mood: self.mood.clone(),
            date: parse_date(&self.date)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum IncomeField {
    Amount(String),
    Source(IncomeSource),
    Description(String),
    Date(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpenseField {
    Amount(String),
    Category(ExpenseCategory),
    Description(String),
    Date(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum JournalField {
    Title(String),
    Content(String),
    Mood(Mood),
    Date(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectTab(Tab),
    OpenModal(Modal),
    CloseModal,
    EditIncome(IncomeField),
    EditExpense(ExpenseField),
    EditJournal(JournalField),
    DashboardRequested,
    DashboardLoaded(DashboardSnapshot),
    DashboardFailed,
    IncomeListLoaded(Vec<IncomeEntry>),
    ExpenseListLoaded(Vec<ExpenseEntry>),
    JournalListLoaded(Vec<JournalEntry>),
    SourceTotalsLoaded(Vec<SourceTotal>),
    FormRejected(FormKind, FormError),
    SubmissionStarted(FormKind),
    /// Carries the local date the cleared form defaults to.
    SubmissionSucceeded(FormKind, NaiveDate),
    SubmissionFailed(FormKind, String),
    DeleteFailed(String),
    DismissNotice,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub modal: Option<Modal>,
    pub loading: bool,
    pub snapshot: Option<Rc<DashboardSnapshot>>,
    pub income_entries: Rc<Vec<IncomeEntry>>,
    pub expense_entries: Rc<Vec<ExpenseEntry>>,
    pub journal_entries: Rc<Vec<JournalEntry>>,
    pub source_totals: Rc<Vec<SourceTotal>>,
    pub income_form: IncomeForm,
    pub expense_form: ExpenseForm,
    pub journal_form: JournalForm,
    pub submitting: Option<FormKind>,
    pub notice: Option<Notice>,
}

impl ViewState {
    pub fn new(today: NaiveDate) -> Self {
        ViewState {
            active_tab: Tab::Dashboard,
            modal: None,
            loading: true,
            snapshot: None,
            income_entries: Rc::default(),
            expense_entries: Rc::default(),
            journal_entries: Rc::default(),
            source_totals: Rc::default(),
            income_form: IncomeForm::new(today),
            expense_form: ExpenseForm::new(today),
            journal_form: JournalForm::new(today),
            submitting: None,
            notice: None,
        }
    }

    /// The full-screen spinner is only shown until a first snapshot arrives.
    pub fn show_loading_screen(&self) -> bool {
        self.loading && self.snapshot.is_none()
    }

    pub fn apply(&self, action: Action) -> ViewState {
        let mut next = self.clone();
        match action {
            Action::SelectTab(tab) => next.active_tab = tab,
            Action::OpenModal(modal) => {
                next.modal = Some(modal);
                next.notice = None;
            }
            Action::CloseModal => {
                next.modal = None;
                next.notice = None;
            }
            Action::EditIncome(field) => match field {
                IncomeField::Amount(v) => next.income_form.amount = v,
                IncomeField::Source(v) => next.income_form.source = v,
                IncomeField::Description(v) => next.income_form.description = v,
                IncomeField::Date(v) => next.income_form.date = v,
            },
            Action::EditExpense(field) => match field {
                ExpenseField::Amount(v) => next.expense_form.amount = v,
                ExpenseField::Category(v) => next.expense_form.category = v,
                ExpenseField::Description(v) => next.expense_form.description = v,
                ExpenseField::Date(v) => next.expense_form.date = v,
            },
            Action::EditJournal(field) => match field {
                JournalField::Title(v) => next.journal_form.title = v,
                JournalField::Content(v) => next.journal_form.content = v,
                JournalField::Mood(v) => next.journal_form.mood = v,
                JournalField::Date(v) => next.journal_form.date = v,
            },
            Action::DashboardRequested => next.loading = true,
            Action::DashboardLoaded(snapshot) => {
                next.snapshot = Some(Rc::new(snapshot));
                next.loading = false;
            }
            // stale snapshot stays on screen
            Action::DashboardFailed => next.loading = false,
            Action::IncomeListLoaded(list) => next.income_entries = Rc::new(list),
            Action::ExpenseListLoaded(list) => next.expense_entries = Rc::new(list),
            Action::JournalListLoaded(list) => next.journal_entries = Rc::new(list),
            Action::SourceTotalsLoaded(list) => next.source_totals = Rc::new(list),
            Action::FormRejected(_, err) => {
                next.notice = Some(Notice {
                    level: NoticeLevel::Error,
                    message: err.to_string(),
                });
            }
            Action::SubmissionStarted(kind) => {
                next.submitting = Some(kind);
                next.notice = None;
            }
            Action::SubmissionSucceeded(kind, today) => {
                match kind {
                    FormKind::Income => {
                        next.income_form = IncomeForm::new(today);
                        next.modal = None;
                    }
                    FormKind::Expense => {
                        next.expense_form = ExpenseForm::new(today);
                        next.modal = None;
                    }
                    FormKind::Journal => next.journal_form = JournalForm::new(today),
                }
                next.submitting = None;
                next.notice = Some(Notice {
                    level: NoticeLevel::Success,
                    message: kind.success_message().to_string(),
                });
            }
            Action::SubmissionFailed(kind, reason) => {
                next.submitting = None;
                next.notice = Some(Notice {
                    level: NoticeLevel::Error,
                    message: format!("{}: {}", kind.failure_prefix(), reason),
                });
            }
            Action::DeleteFailed(reason) => {
                next.notice = Some(Notice {
                    level: NoticeLevel::Error,
                    message: format!("Could not delete entry: {}", reason),
                });
            }
            Action::DismissNotice => next.notice = None,
        }
        next
    }
}

impl Reducible for ViewState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn state() -> ViewState {
        ViewState::new(today())
    }

    #[test]
    fn forms_start_with_reference_defaults() {
        let s = state();
        assert_eq!(s.income_form.source, IncomeSource::Trading);
        assert_eq!(s.income_form.date, "2025-07-01");
        assert_eq!(s.expense_form.category, ExpenseCategory::Wifi);
        assert_eq!(s.journal_form.mood, Mood::Neutral);
        assert_eq!(s.active_tab, Tab::Dashboard);
        assert!(s.show_loading_screen());
    }

    #[test]
    fn income_form_builds_request_body() {
        let form = IncomeForm {
            amount: " 1500 ".to_string(),
            source: IncomeSource::Freelancing,
            description: String::new(),
            date: "2025-07-01".to_string(),
        };
        let entry = form.to_entry().unwrap();
        assert_eq!(entry.amount, 1500.0);
        assert_eq!(entry.date, today());
    }

    #[test]
    fn amounts_must_be_positive_numbers() {
        let mut form = ExpenseForm::new(today());
        assert_eq!(form.to_entry(), Err(FormError::MissingAmount));

        form.amount = "abc".to_string();
        assert_eq!(
            form.to_entry(),
            Err(FormError::InvalidAmount("abc".to_string()))
        );

        form.amount = "0".to_string();
        assert_eq!(form.to_entry(), Err(FormError::NonPositiveAmount));

        form.amount = "-30".to_string();
        assert_eq!(form.to_entry(), Err(FormError::NonPositiveAmount));

        form.amount = "inf".to_string();
        assert!(matches!(form.to_entry(), Err(FormError::InvalidAmount(_))));

        form.amount = "12.5".to_string();
        form.date = "01/07/2025".to_string();
        assert_eq!(
            form.to_entry(),
            Err(FormError::InvalidDate("01/07/2025".to_string()))
        );
    }

    #[test]
    fn journal_needs_title_and_content() {
        let mut form = JournalForm::new(today());
        assert_eq!(form.to_entry(), Err(FormError::MissingTitle));
        form.title = "Week one".to_string();
        form.content = "   ".to_string();
        assert_eq!(form.to_entry(), Err(FormError::MissingContent));
        form.content = "Sold three phones.".to_string();
        assert_eq!(form.to_entry().unwrap().mood, Mood::Neutral);
    }

    #[test]
    fn edits_touch_only_their_field() {
        let s = state()
            .apply(Action::OpenModal(Modal::AddIncome))
            .apply(Action::EditIncome(IncomeField::Amount("250".to_string())))
            .apply(Action::EditIncome(IncomeField::Source(IncomeSource::SellingPhones)));

        assert_eq!(s.modal, Some(Modal::AddIncome));
        assert_eq!(s.income_form.amount, "250");
        assert_eq!(s.income_form.source, IncomeSource::SellingPhones);
        assert_eq!(s.expense_form, ExpenseForm::new(today()));
    }

    #[test]
    fn successful_income_resets_form_and_closes_modal() {
        let s = state()
            .apply(Action::OpenModal(Modal::AddIncome))
            .apply(Action::EditIncome(IncomeField::Amount("250".to_string())))
            .apply(Action::SubmissionStarted(FormKind::Income))
            .apply(Action::SubmissionSucceeded(FormKind::Income, today()));

        assert_eq!(s.modal, None);
        assert_eq!(s.submitting, None);
        assert_eq!(s.income_form, IncomeForm::new(today()));
        assert_eq!(s.notice.unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn form_reset_uses_the_date_of_the_submission() {
        let next_day = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();
        let s = state()
            .apply(Action::EditExpense(ExpenseField::Amount("90".to_string())))
            .apply(Action::SubmissionSucceeded(FormKind::Expense, next_day));

        assert_eq!(s.expense_form.date, "2025-07-02");
        assert_eq!(s.expense_form, ExpenseForm::new(next_day));
        assert_eq!(s.income_form.date, "2025-07-01");
    }

    #[test]
    fn failed_submission_keeps_draft_and_shows_error() {
        let s = state()
            .apply(Action::OpenModal(Modal::AddExpense))
            .apply(Action::EditExpense(ExpenseField::Amount("90".to_string())))
            .apply(Action::SubmissionStarted(FormKind::Expense))
            .apply(Action::SubmissionFailed(
                FormKind::Expense,
                "status 500".to_string(),
            ));

        assert_eq!(s.modal, Some(Modal::AddExpense));
        assert_eq!(s.expense_form.amount, "90");
        let notice = s.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Could not add expense: status 500");
    }

    #[test]
    fn journal_success_keeps_tab_and_announces() {
        let s = state()
            .apply(Action::SelectTab(Tab::Journal))
            .apply(Action::EditJournal(JournalField::Title("Week one".to_string())))
            .apply(Action::SubmissionSucceeded(FormKind::Journal, today()));

        assert_eq!(s.active_tab, Tab::Journal);
        assert_eq!(s.journal_form.title, "");
        assert_eq!(
            s.notice.unwrap().message,
            "Journal entry added successfully!"
        );
    }

    #[test]
    fn snapshot_is_replaced_wholesale() {
        let first = DashboardSnapshot {
            net_progress: Some(100.0),
            ..DashboardSnapshot::default()
        };
        let second = DashboardSnapshot {
            total_income: Some(50.0),
            ..DashboardSnapshot::default()
        };

        let s = state()
            .apply(Action::DashboardLoaded(first))
            .apply(Action::DashboardRequested);
        assert!(s.loading);
        assert!(!s.show_loading_screen());

        let s = s.apply(Action::DashboardLoaded(second.clone()));
        assert_eq!(s.snapshot.as_deref(), Some(&second));
        assert_eq!(s.snapshot.unwrap().net_progress, None);
    }

    #[test]
    fn failed_refresh_keeps_stale_snapshot_without_notice() {
        let snapshot = DashboardSnapshot {
            net_progress: Some(100.0),
            ..DashboardSnapshot::default()
        };
        let s = state()
            .apply(Action::DashboardLoaded(snapshot.clone()))
            .apply(Action::DashboardRequested)
            .apply(Action::DashboardFailed);

        assert!(!s.loading);
        assert_eq!(s.snapshot.as_deref(), Some(&snapshot));
        assert_eq!(s.notice, None);
    }

    #[test]
    fn reducer_wraps_apply() {
        let s = Rc::new(state());
        let next = s.reduce(Action::SelectTab(Tab::Milestones));
        assert_eq!(next.active_tab, Tab::Milestones);
    }
}
