use chrono::{Local, NaiveDate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, Collection};
use crate::components::{
    DashboardTab, ExpenseModal, ExpensesTab, Header, IncomeModal, IncomeTab, JournalTab,
    LoadingScreen, MilestonesTab, NoticeBanner, TabNav,
};
use crate::state::{Action, ExpenseField, FormKind, IncomeField, JournalField, Modal, Tab, ViewState};
use crate::sync;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| ViewState::new(local_today()));
    let api = use_memo(|_| ApiClient::default(), ());

    // initial dashboard load
    {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    sync::refresh_dashboard(&*api, &|action| dispatcher.dispatch(action)).await;
                });
                || ()
            },
            (),
        );
    }

    // history tabs load their list whenever they are opened
    {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |tab: &Tab| {
                let tab = *tab;
                spawn_local(async move {
                    let dispatch = |action: Action| dispatcher.dispatch(action);
                    match tab {
                        Tab::Income => sync::refresh_income(&*api, &dispatch).await,
                        Tab::Expenses => sync::refresh_expenses(&*api, &dispatch).await,
                        Tab::Journal => sync::refresh_journal(&*api, &dispatch).await,
                        Tab::Dashboard | Tab::Milestones => {}
                    }
                });
                || ()
            },
            state.active_tab,
        );
    }

    let on_select_tab = {
        let dispatcher = state.dispatcher();
        Callback::from(move |tab: Tab| dispatcher.dispatch(Action::SelectTab(tab)))
    };
    let on_open_modal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |modal: Modal| dispatcher.dispatch(Action::OpenModal(modal)))
    };
    let on_close_modal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(Action::CloseModal))
    };
    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(Action::DismissNotice))
    };

    let on_edit_income = {
        let dispatcher = state.dispatcher();
        Callback::from(move |field: IncomeField| dispatcher.dispatch(Action::EditIncome(field)))
    };
    let on_edit_expense = {
        let dispatcher = state.dispatcher();
        Callback::from(move |field: ExpenseField| dispatcher.dispatch(Action::EditExpense(field)))
    };
    let on_edit_journal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |field: JournalField| dispatcher.dispatch(Action::EditJournal(field)))
    };

    let on_submit_income = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        let form = state.income_form.clone();
        let tab = state.active_tab;
        Callback::from(move |_: ()| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let form = form.clone();
            spawn_local(async move {
                let dispatch = |action: Action| dispatcher.dispatch(action);
                sync::add_income(&*api, &form, tab, local_today(), &dispatch).await;
            });
        })
    };
    let on_submit_expense = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        let form = state.expense_form.clone();
        let tab = state.active_tab;
        Callback::from(move |_: ()| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let form = form.clone();
            spawn_local(async move {
                let dispatch = |action: Action| dispatcher.dispatch(action);
                sync::add_expense(&*api, &form, tab, local_today(), &dispatch).await;
            });
        })
    };
    let on_submit_journal = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        let form = state.journal_form.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let form = form.clone();
            spawn_local(async move {
                sync::add_journal(&*api, &form, local_today(), &|action| dispatcher.dispatch(action)).await;
            });
        })
    };

    let on_delete = |collection: Collection| {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |id: String| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                sync::delete_entry(&*api, collection, &id, &|action| dispatcher.dispatch(action)).await;
            });
        })
    };

    if state.show_loading_screen() {
        return html! { <LoadingScreen /> };
    }

    let snapshot = state.snapshot.clone().unwrap_or_default();
    let submitting = |kind: FormKind| state.submitting == Some(kind);

    let body = match state.active_tab {
        Tab::Dashboard => html! { <DashboardTab snapshot={snapshot} on_open={on_open_modal.clone()} /> },
        Tab::Income => html! {
            <IncomeTab
                entries={state.income_entries.clone()}
                totals={state.source_totals.clone()}
                on_add={on_open_modal.reform(|_: ()| Modal::AddIncome)}
                on_delete={on_delete(Collection::Income)}
            />
        },
        Tab::Expenses => html! {
            <ExpensesTab
                entries={state.expense_entries.clone()}
                on_add={on_open_modal.reform(|_: ()| Modal::AddExpense)}
                on_delete={on_delete(Collection::Expenses)}
            />
        },
        Tab::Milestones => html! { <MilestonesTab snapshot={snapshot} /> },
        Tab::Journal => html! {
            <JournalTab
                form={state.journal_form.clone()}
                entries={state.journal_entries.clone()}
                submitting={submitting(FormKind::Journal)}
                on_edit={on_edit_journal}
                on_submit={on_submit_journal}
                on_delete={on_delete(Collection::Journal)}
            />
        },
    };

    let modal = match state.modal {
        Some(Modal::AddIncome) => html! {
            <IncomeModal
                form={state.income_form.clone()}
                submitting={submitting(FormKind::Income)}
                notice={state.notice.clone()}
                on_edit={on_edit_income}
                on_submit={on_submit_income}
                on_close={on_close_modal}
                on_dismiss={on_dismiss.clone()}
            />
        },
        Some(Modal::AddExpense) => html! {
            <ExpenseModal
                form={state.expense_form.clone()}
                submitting={submitting(FormKind::Expense)}
                notice={state.notice.clone()}
                on_edit={on_edit_expense}
                on_submit={on_submit_expense}
                on_close={on_close_modal}
                on_dismiss={on_dismiss.clone()}
            />
        },
        None => html! {},
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <Header />
            <TabNav active={state.active_tab} on_select={on_select_tab} />
            <main class="max-w-4xl mx-auto px-4 py-6">
                if state.modal.is_none() {
                    <NoticeBanner notice={state.notice.clone()} on_dismiss={on_dismiss} />
                }
                { body }
            </main>
            { modal }
        </div>
    }
}
