use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::{use_logout, use_title};
use crate::{AuthState, Route, State, content};

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("MovieNight - Dashboard");
    let (state, _) = use_store::<State>();
    let on_logout = use_logout();

    match &state.auth_state {
        AuthState::Unknown => html! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-neutral-900 dark:border-neutral-100"></div>
            </div>
        },
        AuthState::LoggedOut => html! {
            <Redirect<Route> to={Route::Home} />
        },
        AuthState::LoggedIn(profile) => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <div class="flex justify-between items-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        { format!("Welcome back, {}!", profile.preferred_name()) }
                    </h1>
                    <button
                        onclick={on_logout}
                        class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-900 dark:text-neutral-100 hover:bg-neutral-100 dark:hover:bg-neutral-800 transition-colors"
                    >
                        {"Sign out"}
                    </button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    { for content::FEATURES.iter().map(|feature| html! {
                        <div key={feature.title} class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                            <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                                { feature.title }
                            </h2>
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                { feature.description }
                            </p>
                        </div>
                    }) }
                </div>
            </main>
        },
    }
}
