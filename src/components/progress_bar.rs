use yew::prelude::*;

use crate::format::format_percentage;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Already clamped to `0..=100`.
    pub percentage: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class={classes!("relative", props.class.clone())}>
            <div class="w-full bg-gray-200 rounded-full h-4">
                <div
                    class="bg-gradient-to-r from-green-500 to-blue-500 h-4 rounded-full transition-all duration-500 ease-out"
                    style={format!("width: {}%", props.percentage)}
                ></div>
            </div>
            <div class="absolute inset-0 flex items-center justify-center">
                <span class="text-xs font-bold text-gray-800">{ format_percentage(props.percentage) }</span>
            </div>
        </div>
    }
}
