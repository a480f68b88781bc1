//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p class="footer-brand">"🌾 Krishi Sahayak"</p>
                <p class="footer-tagline">
                    "Market prices, crop guidance, and farm planning for Indian farmers"
                </p>
                <nav class="footer-nav">
                    <A href="/prices">"Prices"</A>
                    <A href="/crop-guide">"Crop Guide"</A>
                    <A href="/disease-detection">"Disease Detection"</A>
                    <A href="/cost-calculator">"Market Intelligence"</A>
                </nav>
            </div>
        </footer>
    }
}
