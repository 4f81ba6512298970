use yew::prelude::*;

use crate::components::Icon;

/// Fallback view shown when the page cannot be assembled. Static by
/// design: there is no retry, only a full reload.
#[function_component]
pub fn ErrorDisplay() -> Html {
    html! {
        <main class="min-h-screen flex items-center justify-center p-4">
            <div class="max-w-md w-full flex gap-3 p-4 rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800">
                { Icon::AlertCircle.svg("h-5 w-5 flex-shrink-0 text-neutral-900 dark:text-neutral-100") }
                <div>
                    <h2 class="font-semibold text-neutral-900 dark:text-neutral-100">
                        {"Something went wrong"}
                    </h2>
                    <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-400">
                        {"We're having trouble loading this page. Please try refreshing or come back later."}
                    </p>
                </div>
            </div>
        </main>
    }
}
