use leptos::prelude::*;

/// AI assistant placeholder until the conversational backend ships.
#[component]
pub fn ChatbotPage() -> impl IntoView {
    view! {
        <div class="chatbot-page">
            <div class="card coming-soon-card">
                <span class="coming-soon-icon">"🤖"</span>
                <h1>"AI Farm Assistant"</h1>
                <p>
                    "Ask questions about crops, pests, and market timing in your own language. "
                    "We're training the assistant on Indian farming practices right now."
                </p>
                <span class="coming-soon-badge">"Coming Soon"</span>
            </div>
        </div>
    }
}
