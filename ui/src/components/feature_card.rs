use yew::prelude::*;

use crate::components::Icon;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub badge: Option<AttrValue>,
}

#[function_component]
pub fn FeatureCard(props: &Props) -> Html {
    html! {
        <div class="relative overflow-hidden bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <div class="flex items-center justify-between">
                { props.icon.svg("h-10 w-10 text-neutral-900 dark:text-neutral-100") }
                if let Some(badge) = &props.badge {
                    <span class="px-2 py-1 rounded-full text-xs font-medium bg-neutral-100 dark:bg-neutral-700 text-neutral-700 dark:text-neutral-300">
                        { badge.clone() }
                    </span>
                }
            </div>
            <h3 class="mt-4 text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                { props.title.clone() }
            </h3>
            <p class="mt-2 text-sm text-neutral-600 dark:text-neutral-400">
                { props.description.clone() }
            </p>
        </div>
    }
}
