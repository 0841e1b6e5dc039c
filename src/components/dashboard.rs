use std::rc::Rc;

use yew::prelude::*;

use crate::activity::recent_activity;
use crate::classifier::RecordKind;
use crate::components::ProgressBar;
use crate::format::format_currency;
use crate::models::DashboardSnapshot;
use crate::state::Modal;

#[derive(Properties, PartialEq)]
pub struct DashboardTabProps {
    pub snapshot: Rc<DashboardSnapshot>,
    pub on_open: Callback<Modal>,
}

#[function_component(DashboardTab)]
pub fn dashboard_tab(props: &DashboardTabProps) -> Html {
    let snapshot = &props.snapshot;
    let progress = snapshot.goal_progress();
    let activity = recent_activity(snapshot);

    let open_income = props.on_open.reform(|_: MouseEvent| Modal::AddIncome);
    let open_expense = props.on_open.reform(|_: MouseEvent| Modal::AddExpense);

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Progress to P2M Goal"}</h2>
                <div class="space-y-4">
                    <div class="flex justify-between items-center">
                        <span class="text-sm text-gray-600">{"Current Progress"}</span>
                        <span class="text-2xl font-bold text-green-600">{ format_currency(snapshot.net_progress()) }</span>
                    </div>
                    <ProgressBar percentage={progress.percentage} class="mb-4" />
                    <div class="grid grid-cols-2 gap-4 text-sm">
                        <div>
                            <p class="text-gray-600">{"Total Income"}</p>
                            <p class="text-xl font-bold text-green-600">{ format_currency(snapshot.total_income()) }</p>
                        </div>
                        <div>
                            <p class="text-gray-600">{"Total Expenses"}</p>
                            <p class="text-xl font-bold text-red-600">{ format_currency(snapshot.total_expenses()) }</p>
                        </div>
                    </div>
                    <div class="text-center pt-4">
                        <p class="text-sm text-gray-600">{ format!("Remaining: {}", format_currency(progress.remaining)) }</p>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <button type="button" onclick={open_income} class="bg-green-500 hover:bg-green-600 text-white rounded-lg p-4 text-center transition-colors">
                    <div class="text-2xl mb-2">{"💰"}</div>
                    <div class="font-medium">{"Add Income"}</div>
                </button>
                <button type="button" onclick={open_expense} class="bg-red-500 hover:bg-red-600 text-white rounded-lg p-4 text-center transition-colors">
                    <div class="text-2xl mb-2">{"💸"}</div>
                    <div class="font-medium">{"Add Expense"}</div>
                </button>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">{"Recent Activities"}</h3>
                <div class="space-y-3">
                    if activity.is_empty() {
                        <p class="text-sm text-gray-500">{"Nothing recorded yet."}</p>
                    }
                    { for activity.into_iter().map(|item| {
                        let (row, title, amount) = match item.kind {
                            RecordKind::Income => ("flex justify-between items-center p-3 bg-green-50 rounded", "font-medium text-green-700", "text-green-600 font-bold"),
                            RecordKind::Expense => ("flex justify-between items-center p-3 bg-red-50 rounded", "font-medium text-red-700", "text-red-600 font-bold"),
                        };
                        html! {
                            <div class={row}>
                                <div>
                                    <p class={title}>{ item.label }</p>
                                    <p class="text-sm text-gray-600">{ item.date }</p>
                                </div>
                                <span class={amount}>{ item.amount }</span>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
