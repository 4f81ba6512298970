use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{LoginForm, login_form::AuthMode};
use crate::hooks::use_title;
use crate::{Route, State};

#[function_component]
pub fn LoginPage() -> Html {
    use_title("MovieNight - Sign in");
    let navigator = use_navigator().unwrap();
    let mode = use_state(|| AuthMode::Login);
    let (state, _) = use_store::<State>();

    // Redirect to the dashboard if already logged in
    {
        let navigator = navigator.clone();
        let is_authenticated = state.is_authenticated();

        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Dashboard);
            }
        });
    }

    let on_auth_success = {
        let navigator = navigator.clone();

        Callback::from(move |_profile: responses::UserProfile| {
            navigator.push(&Route::Dashboard);
        })
    };

    let toggle_mode = {
        let mode = mode.clone();

        Callback::from(move |_: MouseEvent| {
            mode.set(match *mode {
                AuthMode::Login => AuthMode::CreateAccount,
                AuthMode::CreateAccount => AuthMode::Login,
            });
        })
    };

    let (title, description, submit_text, toggle_text) = match *mode {
        AuthMode::Login => (
            "Sign in to MovieNight",
            "Pick up where your group left off",
            "Sign in",
            "Don't have an account? Create one",
        ),
        AuthMode::CreateAccount => (
            "Create your account",
            "Start discovering movies together",
            "Get started",
            "Already have an account? Sign in",
        ),
    };

    html! {
        <div class="flex items-center justify-center min-h-[80vh] px-4">
            <div class="max-w-md w-full space-y-4">
                <LoginForm
                    title={title}
                    description={description}
                    submit_text={submit_text}
                    mode={*mode}
                    on_success={on_auth_success}
                />
                <div class="text-center">
                    <button
                        onclick={toggle_mode}
                        class="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-neutral-100 underline"
                    >
                        { toggle_text }
                    </button>
                </div>
            </div>
        </div>
    }
}
