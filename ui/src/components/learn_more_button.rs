use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Section the button scrolls to. The parent that owns both the button
    /// and the section passes the same ref to each, so there is no lookup
    /// by element id. An unattached ref makes the click a no-op.
    pub target: NodeRef,
}

#[function_component]
pub fn LearnMoreButton(props: &Props) -> Html {
    let onclick = {
        let target = props.target.clone();
        Callback::from(move |_: MouseEvent| {
            // Re-resolve on every click; the section may not be mounted.
            if let Some(element) = target.cast::<web_sys::Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element
                    .scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    html! {
        <button
            {onclick}
            class="px-6 py-3 rounded-md text-base font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-900 dark:text-neutral-100 hover:bg-neutral-100 dark:hover:bg-neutral-800 transition-colors"
        >
            {"Learn More"}
        </button>
    }
}
