use std::rc::Rc;

use yew::prelude::*;

use crate::components::ProgressBar;
use crate::format::format_currency;
use crate::models::DashboardSnapshot;

#[derive(Properties, PartialEq)]
pub struct MilestonesTabProps {
    pub snapshot: Rc<DashboardSnapshot>,
}

#[function_component(MilestonesTab)]
pub fn milestones_tab(props: &MilestonesTabProps) -> Html {
    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-6">{"Your Milestones"}</h2>
                <div class="space-y-4">
                    if props.snapshot.milestones.is_empty() {
                        <p class="text-sm text-gray-500">{"No milestones defined."}</p>
                    }
                    { for props.snapshot.milestone_states().map(|(milestone, state)| {
                        let card = if state.achieved {
                            "p-4 rounded-lg border-2 border-green-500 bg-green-50"
                        } else {
                            "p-4 rounded-lg border-2 border-gray-200 bg-gray-50"
                        };
                        html! {
                            <div class={card}>
                                <div class="flex justify-between items-start mb-2">
                                    <div>
                                        <h3 class="font-bold text-gray-900">{ milestone.title.clone() }</h3>
                                        <p class="text-sm text-gray-600">{ milestone.description.clone() }</p>
                                    </div>
                                    <div class="text-right">
                                        <span class="text-lg font-bold">{ format_currency(milestone.target_amount) }</span>
                                        if state.achieved {
                                            <div class="text-green-600 text-xl">{"🎉"}</div>
                                        }
                                    </div>
                                </div>
                                <ProgressBar percentage={state.percentage} class="mt-2" />
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
