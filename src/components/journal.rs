use std::rc::Rc;

use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::modals::{edit_with, on_submit_form, text_input, INPUT_CLASS};
use crate::classifier::Mood;
use crate::format::format_date;
use crate::models::JournalEntry;
use crate::state::{JournalField, JournalForm};

#[derive(Properties, PartialEq)]
pub struct JournalTabProps {
    pub form: JournalForm,
    pub entries: Rc<Vec<JournalEntry>>,
    pub submitting: bool,
    pub on_edit: Callback<JournalField>,
    pub on_submit: Callback<()>,
    pub on_delete: Callback<String>,
}

#[function_component(JournalTab)]
pub fn journal_tab(props: &JournalTabProps) -> Html {
    let on_content = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit(JournalField::Content(area.value()));
        })
    };
    let on_mood = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit(JournalField::Mood(Mood::from(select.value())));
        })
    };

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Add Journal Entry"}</h2>
                <form onsubmit={on_submit_form(&props.on_submit)} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Title"}</label>
                        { text_input("text", &props.form.title, edit_with(&props.on_edit, JournalField::Title)) }
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Content"}</label>
                        <textarea rows="4" class={INPUT_CLASS} value={props.form.content.clone()} oninput={on_content} />
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"Mood"}</label>
                            <select class={INPUT_CLASS} onchange={on_mood}>
                                { for Mood::OPTIONS.into_iter().map(|mood| html! {
                                    <option value={mood.as_str().to_string()} selected={mood == props.form.mood}>
                                        { mood.label().into_owned() }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"Date"}</label>
                            { text_input("date", &props.form.date, edit_with(&props.on_edit, JournalField::Date)) }
                        </div>
                    </div>
                    <button type="submit" disabled={props.submitting} class="w-full bg-blue-500 hover:bg-blue-600 text-white py-2 px-4 rounded-md transition-colors">
                        { if props.submitting { "Saving..." } else { "Add Journal Entry" } }
                    </button>
                </form>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Past Entries"}</h2>
                if props.entries.is_empty() {
                    <p class="text-sm text-gray-500">{"No journal entries yet."}</p>
                }
                <div class="space-y-4">
                    { for props.entries.iter().map(|entry| {
                        let delete = entry.id.clone().map(|id| {
                            let on_delete = props.on_delete.clone();
                            html! {
                                <button type="button" class="text-xs text-red-500 hover:text-red-700" onclick={Callback::from(move |_| on_delete.emit(id.clone()))}>
                                    {"Delete"}
                                </button>
                            }
                        });
                        html! {
                            <div class="p-4 rounded-lg border border-gray-200">
                                <div class="flex justify-between items-start mb-2">
                                    <div>
                                        <h3 class="font-bold text-gray-900">{ entry.title.clone() }</h3>
                                        <p class="text-xs text-gray-500">
                                            { format_date(&entry.date) }
                                            if let Some(mood) = &entry.mood {
                                                { format!(" · {}", mood.label()) }
                                            }
                                        </p>
                                    </div>
                                    { for delete }
                                </div>
                                <p class="text-sm text-gray-700 whitespace-pre-line">{ entry.content.clone() }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
