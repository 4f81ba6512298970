use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use super::LandingPage;
use crate::components::ErrorDisplay;
use crate::{AuthState, Route, State, content};

/// What the home route should do for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeView {
    /// Session lookup hasn't resolved; show a spinner, no marketing
    /// content yet.
    CheckingSession,
    /// Signed-in visitors never see the landing page.
    RedirectToDashboard,
    Landing,
}

/// The controller decision, kept as a pure function of the session state
/// so it can be tested without a browser or a live identity backend.
pub fn resolve_home_view(auth_state: &AuthState) -> HomeView {
    match auth_state {
        AuthState::Unknown => HomeView::CheckingSession,
        AuthState::LoggedIn(_) => HomeView::RedirectToDashboard,
        AuthState::LoggedOut => HomeView::Landing,
    }
}

#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();

    // A broken content table means no marketing page at all, signed in
    // or not.
    if let Err(reason) = content::validate() {
        tracing::error!("landing content misconfigured: {reason}");
        return html! { <ErrorDisplay /> };
    }

    match resolve_home_view(&state.auth_state) {
        HomeView::CheckingSession => html! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="text-center space-y-4">
                    <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-neutral-900 dark:border-neutral-100"></div>
                    <p class="text-neutral-600 dark:text-neutral-400">{"Checking authentication..."}</p>
                </div>
            </div>
        },
        HomeView::RedirectToDashboard => html! {
            <Redirect<Route> to={Route::Dashboard} />
        },
        HomeView::Landing => html! {
            <LandingPage />
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{UserId, responses::UserProfile};
    use uuid::Uuid;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: UserId(Uuid::nil()),
            username: "alex".to_string(),
            email: "alex@example.com".to_string(),
            display_name: None,
            email_verified: true,
        }
    }

    #[test]
    fn unresolved_session_shows_only_the_spinner() {
        assert_eq!(
            resolve_home_view(&AuthState::Unknown),
            HomeView::CheckingSession
        );
    }

    #[test]
    fn signed_in_visitors_are_redirected() {
        assert_eq!(
            resolve_home_view(&AuthState::LoggedIn(profile())),
            HomeView::RedirectToDashboard
        );
    }

    #[test]
    fn signed_out_visitors_get_the_landing_page() {
        assert_eq!(resolve_home_view(&AuthState::LoggedOut), HomeView::Landing);
    }
}
