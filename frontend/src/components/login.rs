use campusdesk::role::LOGIN_TITLE;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{sign_in, use_auth};
use crate::use_controller;
use crate::web::dom;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let controller = use_controller();
    let router = use_router();

    controller.get().show_login();
    dom::set_title(LOGIN_TITLE);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_submitting = move || auth.state.get().is_loading;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get(), password.get());
        spawn_local(async move {
            // 成功后由路由服务的认证监听跳转到仪表盘
            sign_in(auth, controller, email, password).await;
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Student Management System"</h1>
                    <p class="text-base-content/70">"Sign in to continue"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| email.set(event_target_value(&ev))
                                prop:value=move || email.get()
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=move || password.get()
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "No account? "
                            <a class="link link-primary" on:click=move |_| router.navigate("/register")>
                                "Create one"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
