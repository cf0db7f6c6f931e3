use campusdesk::role::LOGIN_TITLE;
use campusdesk_shared::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{sign_up, use_auth};
use crate::components::forms::{AccountForm, AccountFields};
use crate::use_controller;
use crate::web::dom;
use crate::web::router::use_router;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let controller = use_controller();
    let router = use_router();

    controller.get().show_register();
    dom::set_title(LOGIN_TITLE);

    let form = AccountForm::new(Role::Student);
    let is_submitting = move || auth.state.get().is_loading;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = form.to_request();
        spawn_local(async move {
            sign_up(auth, controller, request).await;
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-4">"Create Account"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <AccountFields form=form roles=&Role::ALL />
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>"Register"</button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Already registered? "
                            <a class="link link-primary" on:click=move |_| router.navigate("/")>"Sign in"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
