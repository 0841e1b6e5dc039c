use std::rc::Rc;

use yew::prelude::*;

use crate::format::{format_currency, format_date};
use crate::models::{ExpenseEntry, IncomeEntry, SourceTotal};

struct Row {
    id: Option<String>,
    date: String,
    label: String,
    description: String,
    amount: String,
}

fn history_table(title: &'static str, empty: &'static str, rows: Vec<Row>, on_delete: &Callback<String>) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="p-6 border-b">
                <h3 class="text-lg font-semibold text-gray-900">{ title }</h3>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-gray-50 text-gray-500 text-[10px] uppercase tracking-widest">
                            <th class="px-6 py-3 font-bold">{"Date"}</th>
                            <th class="px-6 py-3 font-bold">{"Type"}</th>
                            <th class="px-6 py-3 font-bold">{"Description"}</th>
                            <th class="px-6 py-3 font-bold text-right">{"Amount"}</th>
                            <th class="px-6 py-3"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y">
                        if rows.is_empty() {
                            <tr><td colspan="5" class="px-6 py-6 text-center text-gray-500">{ empty }</td></tr>
                        }
                        { for rows.into_iter().enumerate().map(|(idx, row)| {
                            let delete = match row.id {
                                Some(id) => {
                                    let on_delete = on_delete.clone();
                                    html! {
                                        <button type="button" class="text-xs text-red-500 hover:text-red-700" onclick={Callback::from(move |_| on_delete.emit(id.clone()))}>
                                            {"Delete"}
                                        </button>
                                    }
                                }
                                None => html! {},
                            };
                            html! {
                                <tr key={idx} class="text-sm hover:bg-gray-50">
                                    <td class="px-6 py-3 text-gray-600">{ row.date }</td>
                                    <td class="px-6 py-3 text-gray-900">{ row.label }</td>
                                    <td class="px-6 py-3 text-gray-600">{ row.description }</td>
                                    <td class="px-6 py-3 text-right font-semibold">{ row.amount }</td>
                                    <td class="px-6 py-3 text-right">{ delete }</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IncomeTabProps {
    pub entries: Rc<Vec<IncomeEntry>>,
    pub totals: Rc<Vec<SourceTotal>>,
    pub on_add: Callback<()>,
    pub on_delete: Callback<String>,
}

#[function_component(IncomeTab)]
pub fn income_tab(props: &IncomeTabProps) -> Html {
    let rows = props
        .entries
        .iter()
        .map(|entry| Row {
            id: entry.id.clone(),
            date: format_date(&entry.date),
            label: entry.source.label().into_owned(),
            description: entry.description.clone().unwrap_or_default(),
            amount: format!("+{}", format_currency(entry.amount)),
        })
        .collect();

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow p-6">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-lg font-semibold text-gray-900">{"Income by Source"}</h2>
                    <button type="button" onclick={props.on_add.reform(|_: MouseEvent| ())} class="bg-green-500 hover:bg-green-600 text-white text-sm px-4 py-2 rounded-md transition-colors">
                        {"Add Income"}
                    </button>
                </div>
                if props.totals.is_empty() {
                    <p class="text-sm text-gray-500">{"No income recorded yet."}</p>
                }
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    { for props.totals.iter().map(|total| html! {
                        <div class="p-3 bg-green-50 rounded">
                            <p class="text-sm font-medium text-green-700">{ total.source.label().into_owned() }</p>
                            <p class="text-lg font-bold text-green-600">{ format_currency(total.total) }</p>
                            <p class="text-xs text-gray-500">{ format!("{} entries", total.count) }</p>
                        </div>
                    }) }
                </div>
            </div>
            { history_table("Income History", "No income entries yet.", rows, &props.on_delete) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpensesTabProps {
    pub entries: Rc<Vec<ExpenseEntry>>,
    pub on_add: Callback<()>,
    pub on_delete: Callback<String>,
}

#[function_component(ExpensesTab)]
pub fn expenses_tab(props: &ExpensesTabProps) -> Html {
    let rows = props
        .entries
        .iter()
        .map(|entry| Row {
            id: entry.id.clone(),
            date: format_date(&entry.date),
            label: entry.category.label().into_owned(),
            description: entry.description.clone().unwrap_or_default(),
            amount: format!("-{}", format_currency(entry.amount)),
        })
        .collect();

    html! {
        <div class="space-y-6">
            <div class="flex justify-end">
                <button type="button" onclick={props.on_add.reform(|_: MouseEvent| ())} class="bg-red-500 hover:bg-red-600 text-white text-sm px-4 py-2 rounded-md transition-colors">
                    {"Add Expense"}
                </button>
            </div>
            { history_table("Expense History", "No expense entries yet.", rows, &props.on_delete) }
        </div>
    }
}
