//! Route guard components.
//!
//! UX-only gating: each guard evaluates the session store synchronously
//! when its route mounts, so decisions are re-made on every navigation and
//! never cached. Real access control lives on the API.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{evaluate_access, use_session, GuardDecision, RouteAccess};

/// Spinner shown while a guard redirect is in flight (or, briefly, while
/// the session store resolves).
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p>"Loading Krishi Sahayak..."</p>
        </div>
    }
}

fn guarded(access: RouteAccess, children: Children) -> AnyView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();

    let decision = session.state.with_untracked(|state| evaluate_access(access, state));

    match decision {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Wait => view! { <LoadingScreen/> }.into_any(),
        GuardDecision::ToAuth => {
            // Remember the originally requested screen so login can resume it.
            let target = format!(
                "/auth?redirect={}",
                urlencoding::encode(&location.pathname.get_untracked())
            );
            Effect::new(move |_| {
                navigate(&target, Default::default());
            });
            view! { <LoadingScreen/> }.into_any()
        }
        GuardDecision::ToDashboard => {
            Effect::new(move |_| {
                navigate("/dashboard", Default::default());
            });
            view! { <LoadingScreen/> }.into_any()
        }
    }
}

/// Renders children only for authenticated users; otherwise redirects to
/// the auth screen.
#[component]
pub fn Protected(children: Children) -> impl IntoView {
    guarded(RouteAccess::Protected, children)
}

/// Renders children only for admins; signed-in non-admins go to the
/// dashboard, visitors to the auth screen.
#[component]
pub fn AdminOnly(children: Children) -> impl IntoView {
    guarded(RouteAccess::AdminOnly, children)
}

/// Renders children only for signed-out visitors (the auth screen);
/// authenticated users go to the dashboard.
#[component]
pub fn PublicOnly(children: Children) -> impl IntoView {
    guarded(RouteAccess::PublicOnly, children)
}
