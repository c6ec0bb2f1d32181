//! PhonePro Web Client
//!
//! Phone lookup and recommendation frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and sign up against the PhonePro API
//! - Phone model search with per-model specifications
//! - Recommendation form with sliders and option lists
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. View state and request handling come from the `phonepro`
//! crate; this crate supplies the `gloo-net` transport, `localStorage`
//! session store and the components.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
