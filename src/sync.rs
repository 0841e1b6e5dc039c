//! Network round-trips, expressed as sequences of reducer actions.
//!
//! Writes are followed by a full re-fetch of whatever they affect; the fetched
//! values replace local state wholesale. Concurrent submissions are not
//! coordinated, the last refresh to land wins.

use chrono::NaiveDate;

use crate::api::{Collection, DashboardApi};
use crate::state::{Action, ExpenseForm, FormKind, IncomeForm, JournalForm, Tab};

pub async fn refresh_dashboard<A>(api: &A, dispatch: &dyn Fn(Action))
where
    A: DashboardApi + ?Sized,
{
    dispatch(Action::DashboardRequested);
    match api.fetch_dashboard().await {
        Ok(snapshot) => {
            log::debug!(
                "dashboard refreshed: net progress {:?}, {} milestones",
                snapshot.net_progress,
                snapshot.milestones.len()
            );
            dispatch(Action::DashboardLoaded(snapshot));
        }
        Err(err) => {
            log::error!("Error fetching dashboard data: {}", err);
            dispatch(Action::DashboardFailed);
        }
    }
}

pub async fn refresh_income<A>(api: &A, dispatch: &dyn Fn(Action))
where
    A: DashboardApi + ?Sized,
{
    match api.list_income().await {
        Ok(list) => dispatch(Action::IncomeListLoaded(list)),
        Err(err) => log::error!("Error fetching income entries: {}", err),
    }
    match api.income_by_source().await {
        Ok(totals) => dispatch(Action::SourceTotalsLoaded(totals)),
        Err(err) => log::error!("Error fetching income by source: {}", err),
    }
}

pub async fn refresh_expenses<A>(api: &A, dispatch: &dyn Fn(Action))
where
    A: DashboardApi + ?Sized,
{
    match api.list_expenses().await {
        Ok(list) => dispatch(Action::ExpenseListLoaded(list)),
        Err(err) => log::error!("Error fetching expense entries: {}", err),
    }
}

pub async fn refresh_journal<A>(api: &A, dispatch: &dyn Fn(Action))
where
    A: DashboardApi + ?Sized,
{
    match api.list_journal().await {
        Ok(list) => dispatch(Action::JournalListLoaded(list)),
        Err(err) => log::error!("Error fetching journal entries: {}", err),
    }
}

/// POST the income draft, then re-fetch the dashboard once. A rejected draft
/// never reaches the network. With the income history on screen, that list
/// is reloaded after the dashboard. `today` is the date the cleared form
/// starts from.
pub async fn add_income<A>(
    api: &A,
    form: &IncomeForm,
    open_tab: Tab,
    today: NaiveDate,
    dispatch: &dyn Fn(Action),
)
where
    A: DashboardApi + ?Sized,
{
    let entry = match form.to_entry() {
        Ok(entry) => entry,
        Err(err) => {
            dispatch(Action::FormRejected(FormKind::Income, err));
            return;
        }
    };

    dispatch(Action::SubmissionStarted(FormKind::Income));
    if let Err(err) = api.submit_income(&entry).await {
        log::error!("Error adding income: {}", err);
        dispatch(Action::SubmissionFailed(FormKind::Income, err.to_string()));
        return;
    }
    dispatch(Action::SubmissionSucceeded(FormKind::Income, today));
    refresh_dashboard(api, dispatch).await;
    if open_tab == Tab::Income {
        refresh_income(api, dispatch).await;
    }
}

pub async fn add_expense<A>(
    api: &A,
    form: &ExpenseForm,
    open_tab: Tab,
    today: NaiveDate,
    dispatch: &dyn Fn(Action),
)
where
    A: DashboardApi + ?Sized,
{
    let entry = match form.to_entry() {
        Ok(entry) => entry,
        Err(err) => {
            dispatch(Action::FormRejected(FormKind::Expense, err));
            return;
        }
    };

    dispatch(Action::SubmissionStarted(FormKind::Expense));
    if let Err(err) = api.submit_expense(&entry).await {
        log::error!("Error adding expense: {}", err);
        dispatch(Action::SubmissionFailed(FormKind::Expense, err.to_string()));
        return;
    }
    dispatch(Action::SubmissionSucceeded(FormKind::Expense, today));
    refresh_dashboard(api, dispatch).await;
    if open_tab == Tab::Expenses {
        refresh_expenses(api, dispatch).await;
    }
}

/// Journal entries don't move the totals, so only the journal list reloads.
pub async fn add_journal<A>(api: &A, form: &JournalForm, today: NaiveDate, dispatch: &dyn Fn(Action))
where
    A: DashboardApi + ?Sized,
{
    let entry = match form.to_entry() {
        Ok(entry) => entry,
        Err(err) => {
            dispatch(Action::FormRejected(FormKind::Journal, err));
            return;
        }
    };

    dispatch(Action::SubmissionStarted(FormKind::Journal));
    if let Err(err) = api.submit_journal(&entry).await {
        log::error!("Error adding journal entry: {}", err);
        dispatch(Action::SubmissionFailed(FormKind::Journal, err.to_string()));
        return;
    }
    dispatch(Action::SubmissionSucceeded(FormKind::Journal, today));
    refresh_journal(api, dispatch).await;
}

pub async fn delete_entry<A>(api: &A, collection: Collection, id: &str, dispatch: &dyn Fn(Action))
where
    A: DashboardApi + ?Sized,
{
    if let Err(err) = api.delete(collection, id).await {
        log::error!("Error deleting {}: {}", collection.path(), err);
        dispatch(Action::DeleteFailed(err.to_string()));
        return;
    }
    match collection {
        Collection::Income => {
            refresh_income(api, dispatch).await;
            refresh_dashboard(api, dispatch).await;
        }
        Collection::Expenses => {
            refresh_expenses(api, dispatch).await;
            refresh_dashboard(api, dispatch).await;
        }
        Collection::Journal => refresh_journal(api, dispatch).await,
    }
}
