use payloads::{requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    CreateAccount,
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub submit_text: AttrValue,
    pub mode: AuthMode,
    pub on_success: Callback<responses::UserProfile>,
}

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();

    let email_ref = use_node_ref();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Shared login callback that handles the login API call and state
    // management. Account creation funnels through here after signup.
    let perform_login = {
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_success = props.on_success.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |credentials: requests::LoginCredentials| {
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = crate::get_api_client();
                match api_client.login(&credentials).await {
                    Ok(_) => match api_client.user_profile().await {
                        Ok(profile) => {
                            dispatch.reduce_mut(|state| {
                                state.auth_state =
                                    AuthState::LoggedIn(profile.clone());
                            });
                            on_success.emit(profile);
                        }
                        Err(_) => {
                            error_message.set(Some(
                                "Login succeeded but failed to load profile"
                                    .to_string(),
                            ));
                        }
                    },
                    Err(e) => {
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedOut;
                        });
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let on_submit = {
        let email_ref = email_ref.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let mode = props.mode;
        let perform_login = perform_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(username_input) =
                username_ref.cast::<HtmlInputElement>()
            else {
                return;
            };
            let Some(password_input) =
                password_ref.cast::<HtmlInputElement>()
            else {
                return;
            };

            let username = username_input.value();
            let password = password_input.value();

            if username.is_empty() || password.is_empty() {
                error_message.set(Some(
                    "Please enter both username and password".to_string(),
                ));
                return;
            }

            match mode {
                AuthMode::Login => {
                    perform_login
                        .emit(requests::LoginCredentials { username, password });
                }
                AuthMode::CreateAccount => {
                    let Some(email_input) =
                        email_ref.cast::<HtmlInputElement>()
                    else {
                        return;
                    };
                    let email = email_input.value();

                    if email.is_empty() || !email.contains('@') {
                        error_message.set(Some(
                            "Please enter a valid email address".to_string(),
                        ));
                        return;
                    }
                    let validation = requests::validate_username(&username);
                    if let Some(message) = validation.error_message() {
                        error_message.set(Some(message.to_string()));
                        return;
                    }
                    if password.len() < requests::PASSWORD_MIN_LEN {
                        error_message.set(Some(format!(
                            "Password must be at least {} characters",
                            requests::PASSWORD_MIN_LEN
                        )));
                        return;
                    }

                    let details = requests::CreateAccount {
                        email,
                        username: username.clone(),
                        password: password.clone(),
                    };
                    let error_message = error_message.clone();
                    let is_loading = is_loading.clone();
                    let perform_login = perform_login.clone();

                    yew::platform::spawn_local(async move {
                        is_loading.set(true);
                        error_message.set(None);

                        let api_client = crate::get_api_client();
                        match api_client.create_account(&details).await {
                            Ok(_) => {
                                // Auto-login with the fresh credentials
                                perform_login.emit(
                                    requests::LoginCredentials {
                                        username,
                                        password,
                                    },
                                );
                            }
                            Err(e) => {
                                error_message.set(Some(e.to_string()));
                                is_loading.set(false);
                            }
                        }
                    });
                }
            }
        })
    };

    let input_classes = "w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-800 text-neutral-900 dark:text-neutral-100 focus:outline-none focus:ring-2 focus:ring-neutral-500";

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                { props.title.clone() }
            </h2>
            <p class="mt-1 mb-6 text-sm text-neutral-600 dark:text-neutral-400">
                { props.description.clone() }
            </p>

            <form onsubmit={on_submit} class="space-y-4">
                if props.mode == AuthMode::CreateAccount {
                    <input
                        ref={email_ref}
                        type="email"
                        placeholder="Email"
                        maxlength={requests::EMAIL_MAX_LEN.to_string()}
                        class={input_classes}
                    />
                }
                <input
                    ref={username_ref}
                    type="text"
                    placeholder="Username"
                    class={input_classes}
                />
                <input
                    ref={password_ref}
                    type="password"
                    placeholder="Password"
                    class={input_classes}
                />

                if let Some(error) = &*error_message {
                    <p class="text-sm text-red-600 dark:text-red-400">
                        { error.clone() }
                    </p>
                }

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50"
                >
                    { if *is_loading { "Please wait...".into() } else { props.submit_text.clone() } }
                </button>
            </form>
        </div>
    }
}
