//! Authentication Page
//!
//! Login and sign up forms.

use leptos::*;

use phonepro::auth::{self, AuthMode, AuthState, LoginForm, SignupForm};

use crate::api::BrowserBackend;
use crate::components::{MessageArea, OutlineButton, PrimaryButton, SectionCard, TextField};
use crate::state::LocalStorage;

/// Input values of both forms. Each mode keeps its own fields so nothing
/// typed into one form shows up in the other.
#[derive(Clone, Copy)]
struct AuthFields {
    login_username: RwSignal<String>,
    login_password: RwSignal<String>,
    signup_username: RwSignal<String>,
    signup_email: RwSignal<String>,
    signup_password: RwSignal<String>,
    signup_confirm: RwSignal<String>,
}

impl AuthFields {
    fn new() -> Self {
        Self {
            login_username: create_rw_signal(String::new()),
            login_password: create_rw_signal(String::new()),
            signup_username: create_rw_signal(String::new()),
            signup_email: create_rw_signal(String::new()),
            signup_password: create_rw_signal(String::new()),
            signup_confirm: create_rw_signal(String::new()),
        }
    }

    fn login_form(&self) -> LoginForm {
        LoginForm {
            username: self.login_username.get_untracked(),
            password: self.login_password.get_untracked(),
        }
    }

    fn signup_form(&self) -> SignupForm {
        SignupForm {
            username: self.signup_username.get_untracked(),
            email: self.signup_email.get_untracked(),
            password: self.signup_password.get_untracked(),
            confirm: self.signup_confirm.get_untracked(),
        }
    }
}

/// Signed-out view. Calls `on_authenticated` with the username after a
/// successful login.
#[component]
pub fn AuthView(on_authenticated: Callback<String>) -> impl IntoView {
    let state = create_rw_signal(AuthState::default());

    let fields = AuthFields::new();
    let AuthFields {
        login_username,
        login_password,
        signup_username,
        signup_email,
        signup_password,
        signup_confirm,
    } = fields;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.loading) {
            return;
        }

        let mode = state.with_untracked(|s| s.mode);
        state.update(AuthState::begin);

        spawn_local(async move {
            let backend = BrowserBackend::new();
            let outcome = match mode {
                AuthMode::Login => {
                    auth::login(&backend, &LocalStorage, &fields.login_form()).await
                }
                AuthMode::Signup => auth::signup(&backend, &fields.signup_form()).await,
            };

            let mut signed_in = None;
            state.update(|s| signed_in = s.finish(outcome));
            if let Some(name) = signed_in {
                on_authenticated.call(name);
            }
        });
    };

    let is_signup = move || state.with(|s| s.mode == AuthMode::Signup);

    view! {
        <div class="max-w-md mx-auto py-12 space-y-6">
            <div class="text-center">
                <h1 class="text-4xl font-bold">"PhonePro"</h1>
                <p class="text-gray-400 mt-2">"Find the phone that fits you"</p>
            </div>

            <SectionCard title="Welcome">
                <div class="grid grid-cols-2 gap-2">
                    <OutlineButton
                        label="Login"
                        active=Signal::derive(move || !is_signup())
                        on_click=Callback::new(move |_: web_sys::MouseEvent| state.update(|s| s.switch_mode(AuthMode::Login)))
                    />
                    <OutlineButton
                        label="Sign Up"
                        active=Signal::derive(is_signup)
                        on_click=Callback::new(move |_: web_sys::MouseEvent| state.update(|s| s.switch_mode(AuthMode::Signup)))
                    />
                </div>

                <form on:submit=on_submit class="space-y-4">
                    {move || {
                        if is_signup() {
                            view! {
                                <TextField id="signupUsername" label="Username" value=signup_username />
                                <TextField id="signupEmail" label="Email" value=signup_email input_type="email" />
                                <TextField
                                    id="signupPassword"
                                    label="Password"
                                    value=signup_password
                                    input_type="password"
                                />
                                <TextField
                                    id="signupConfirm"
                                    label="Confirm Password"
                                    value=signup_confirm
                                    input_type="password"
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <TextField id="loginUsername" label="Username" value=login_username />
                                <TextField
                                    id="loginPassword"
                                    label="Password"
                                    value=login_password
                                    input_type="password"
                                />
                            }
                            .into_view()
                        }
                    }}

                    <PrimaryButton
                        label=Signal::derive(move || state.with(|s| s.submit_label().to_string()))
                        busy=Signal::derive(move || state.with(|s| s.loading))
                        button_type="submit"
                    />
                </form>

                <MessageArea message=Signal::derive(move || state.with(|s| s.message.clone())) />
            </SectionCard>
        </div>
    }
}
