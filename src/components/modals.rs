use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::classifier::{ExpenseCategory, IncomeSource};
use crate::components::NoticeBanner;
use crate::state::{ExpenseField, ExpenseForm, IncomeField, IncomeForm, Notice};

pub(crate) const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

pub(crate) fn text_input<F>(kind: &'static str, value: &str, on_edit: F) -> Html
where
    F: Fn(String) + 'static,
{
    html! {
        <input type={kind} value={value.to_string()} class={INPUT_CLASS} oninput={Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit(input.value());
        })} />
    }
}

/// Text input handler that wraps the new value into a field edit.
pub(crate) fn edit_with<T: 'static>(on_edit: &Callback<T>, wrap: fn(String) -> T) -> impl Fn(String) + 'static {
    let on_edit = on_edit.clone();
    move |value| on_edit.emit(wrap(value))
}

fn modal_shell(title: &'static str, body: Html) -> Html {
    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-lg max-w-md w-full p-6">
                <h3 class="text-lg font-semibold mb-4">{ title }</h3>
                { body }
            </div>
        </div>
    }
}

pub(crate) fn on_submit_form(on_submit: &Callback<()>) -> Callback<SubmitEvent> {
    let on_submit = on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
    })
}

#[derive(Properties, PartialEq)]
pub struct IncomeModalProps {
    pub form: IncomeForm,
    pub submitting: bool,
    pub notice: Option<Notice>,
    pub on_edit: Callback<IncomeField>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[function_component(IncomeModal)]
pub fn income_modal(props: &IncomeModalProps) -> Html {
    let on_source = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit(IncomeField::Source(IncomeSource::from(select.value())));
        })
    };

    modal_shell(
        "Add Income",
        html! {
            <form onsubmit={on_submit_form(&props.on_submit)} class="space-y-4">
                <NoticeBanner notice={props.notice.clone()} on_dismiss={props.on_dismiss.clone()} />
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Amount (BWP)"}</label>
                    { text_input("number", &props.form.amount, edit_with(&props.on_edit, IncomeField::Amount)) }
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Source"}</label>
                    <select class={INPUT_CLASS} onchange={on_source}>
                        { for IncomeSource::OPTIONS.into_iter().map(|source| html! {
                            <option value={source.as_str().to_string()} selected={source == props.form.source}>
                                { source.label().into_owned() }
                            </option>
                        }) }
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Description"}</label>
                    { text_input("text", &props.form.description, edit_with(&props.on_edit, IncomeField::Description)) }
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Date"}</label>
                    { text_input("date", &props.form.date, edit_with(&props.on_edit, IncomeField::Date)) }
                </div>
                <div class="flex space-x-3">
                    <button type="submit" disabled={props.submitting} class="flex-1 bg-green-500 hover:bg-green-600 text-white py-2 px-4 rounded-md transition-colors">
                        { if props.submitting { "Saving..." } else { "Add Income" } }
                    </button>
                    <button type="button" onclick={props.on_close.reform(|_: MouseEvent| ())} class="flex-1 bg-gray-500 hover:bg-gray-600 text-white py-2 px-4 rounded-md transition-colors">
                        {"Cancel"}
                    </button>
                </div>
            </form>
        },
    )
}

#[derive(Properties, PartialEq)]
pub struct ExpenseModalProps {
    pub form: ExpenseForm,
    pub submitting: bool,
    pub notice: Option<Notice>,
    pub on_edit: Callback<ExpenseField>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ExpenseModal)]
pub fn expense_modal(props: &ExpenseModalProps) -> Html {
    let on_category = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit(ExpenseField::Category(ExpenseCategory::from(select.value())));
        })
    };

    modal_shell(
        "Add Expense",
        html! {
            <form onsubmit={on_submit_form(&props.on_submit)} class="space-y-4">
                <NoticeBanner notice={props.notice.clone()} on_dismiss={props.on_dismiss.clone()} />
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Amount (BWP)"}</label>
                    { text_input("number", &props.form.amount, edit_with(&props.on_edit, ExpenseField::Amount)) }
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Category"}</label>
                    <select class={INPUT_CLASS} onchange={on_category}>
                        { for ExpenseCategory::OPTIONS.into_iter().map(|category| html! {
                            <option value={category.as_str().to_string()} selected={category == props.form.category}>
                                { category.label().into_owned() }
                            </option>
                        }) }
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Description"}</label>
                    { text_input("text", &props.form.description, edit_with(&props.on_edit, ExpenseField::Description)) }
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Date"}</label>
                    { text_input("date", &props.form.date, edit_with(&props.on_edit, ExpenseField::Date)) }
                </div>
                <div class="flex space-x-3">
                    <button type="submit" disabled={props.submitting} class="flex-1 bg-red-500 hover:bg-red-600 text-white py-2 px-4 rounded-md transition-colors">
                        { if props.submitting { "Saving..." } else { "Add Expense" } }
                    </button>
                    <button type="button" onclick={props.on_close.reform(|_: MouseEvent| ())} class="flex-1 bg-gray-500 hover:bg-gray-600 text-white py-2 px-4 rounded-md transition-colors">
                        {"Cancel"}
                    </button>
                </div>
            </form>
        },
    )
}
