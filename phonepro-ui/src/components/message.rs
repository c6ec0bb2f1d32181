//! Message Banner

use leptos::*;
use phonepro::{Message, MessageKind};

/// Success, error or info banner; renders nothing without a message
#[component]
pub fn MessageArea(#[prop(into)] message: Signal<Option<Message>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            let (icon, class) = match msg.kind {
                MessageKind::Success => ("✓", "bg-green-600/20 border-green-500 text-green-300"),
                MessageKind::Error => ("✕", "bg-red-600/20 border-red-500 text-red-300"),
                MessageKind::Info => ("ℹ", "bg-blue-600/20 border-blue-500 text-blue-300"),
            };
            view! {
                <div
                    role="alert"
                    class=format!("flex items-start space-x-3 border rounded-lg px-4 py-3 {}", class)
                >
                    <span>{icon}</span>
                    <span class="text-sm whitespace-pre-wrap">{msg.text}</span>
                </div>
            }
        })
    }
}
