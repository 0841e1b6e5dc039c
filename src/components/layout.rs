use yew::prelude::*;

use crate::state::{Notice, NoticeLevel, Tab};

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="bg-white shadow-sm border-b">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-2xl font-bold text-gray-900">{"🎯 Mission: UCT"}</h1>
                    <div class="text-right">
                        <p class="text-sm text-gray-600">{"July - December 2025"}</p>
                        <p class="text-xs text-gray-500">{"P2M Goal"}</p>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabNavProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabNav)]
pub fn tab_nav(props: &TabNavProps) -> Html {
    html! {
        <nav class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex space-x-8 overflow-x-auto">
                    { for Tab::ALL.into_iter().map(|tab| {
                        let class_name = if tab == props.active {
                            "py-4 px-2 text-sm font-medium whitespace-nowrap border-b-2 transition-colors border-blue-500 text-blue-600"
                        } else {
                            "py-4 px-2 text-sm font-medium whitespace-nowrap border-b-2 transition-colors border-transparent text-gray-500 hover:text-gray-700"
                        };
                        let on_select = props.on_select.clone();
                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(tab))}>
                                { tab.label() }
                            </button>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let class_name = match notice.level {
        NoticeLevel::Success => "flex justify-between items-center p-3 mb-4 rounded-md bg-green-50 text-green-700 text-sm",
        NoticeLevel::Error => "flex justify-between items-center p-3 mb-4 rounded-md bg-red-50 text-red-700 text-sm",
    };
    html! {
        <div class={class_name} role="status">
            <span>{ notice.message.clone() }</span>
            <button type="button" class="ml-4 font-bold" aria-label="Dismiss" onclick={props.on_dismiss.reform(|_: MouseEvent| ())}>
                {"×"}
            </button>
        </div>
    }
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500 mx-auto mb-4"></div>
                <p class="text-gray-600">{"Loading your financial roadmap..."}</p>
            </div>
        </div>
    }
}
