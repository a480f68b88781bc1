//! Notification overlay rendered above all page content.

use leptos::prelude::*;

use crate::state::notifications::use_notifications;

#[component]
pub fn NotificationOverlay() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-container">
            {move || {
                notifications
                    .queue
                    .with(|queue| {
                        queue
                            .items()
                            .iter()
                            .map(|n| {
                                let id = n.id;
                                let message = n.message.clone();
                                view! {
                                    <div class=format!("toast {}", n.kind.css_class())>
                                        <span class="toast-icon">{n.kind.icon()}</span>
                                        <div class="toast-body">
                                            <p class="toast-title">{n.title.clone()}</p>
                                            {message
                                                .map(|m| view! { <p class="toast-message">{m}</p> })}
                                        </div>
                                        <button
                                            class="toast-close"
                                            on:click=move |_| notifications.dismiss(id)
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}
