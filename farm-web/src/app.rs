//! App root: global contexts, router, and the layout shell.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{AdminOnly, Footer, Header, NotificationOverlay, Protected, PublicOnly};
use crate::pages::{
    AdminPage, AuthPage, ChatbotPage, CropGuidePage, DashboardPage, DiseaseDetectionPage,
    HomePage, IotPage, MarketIntelligencePage, PriceTrackerPage, ProfilePage,
};
use crate::state::notifications::provide_notification_context;
use crate::state::session::{provide_session_context, use_session};

#[component]
pub fn App() -> impl IntoView {
    // Session first: the guards and every protected screen read it.
    provide_session_context();
    provide_notification_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <Layout><NotFound/></Layout> }>
                <Route path=path!("/") view=|| view! { <Layout><HomePage/></Layout> }/>
                // The auth screen draws its own chrome (no header/footer).
                <Route
                    path=path!("/auth")
                    view=|| view! { <PublicOnly><AuthPage/></PublicOnly> }
                />
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <Protected><Layout><DashboardPage/></Layout></Protected> }
                />
                <Route
                    path=path!("/profile")
                    view=|| view! { <Protected><Layout><ProfilePage/></Layout></Protected> }
                />
                <Route
                    path=path!("/prices")
                    view=|| view! { <Layout><PriceTrackerPage/></Layout> }
                />
                <Route
                    path=path!("/crop-guide")
                    view=|| view! { <Layout><CropGuidePage/></Layout> }
                />
                <Route
                    path=path!("/disease-detection")
                    view=|| view! { <Layout><DiseaseDetectionPage/></Layout> }
                />
                <Route
                    path=path!("/cost-calculator")
                    view=|| view! { <Layout><MarketIntelligencePage/></Layout> }
                />
                <Route
                    path=path!("/chatbot")
                    view=|| view! { <Layout><ChatbotPage/></Layout> }
                />
                <Route path=path!("/iot") view=|| view! { <Layout><IotPage/></Layout> }/>
                <Route
                    path=path!("/admin")
                    view=|| view! { <AdminOnly><Layout><AdminPage/></Layout></AdminOnly> }
                />
            </Routes>
        </Router>
    }
}

/// Header/footer chrome with the notification overlay on top.
#[component]
fn Layout(children: Children) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="app-shell" class:dark=move || session.theme() == "dark">
            <Header/>
            <main class="page-content">{children()}</main>
            <Footer/>
            <NotificationOverlay/>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="centered-screen">
            <div class="card not-found-card">
                <div class="not-found-icon">"🌾"</div>
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist in our fields."</p>
                <A href="/" attr:class="btn">
                    "Back to Home"
                </A>
            </div>
        </div>
    }
}
