use campusdesk::Action;
use campusdesk::modules::dashboard::ProfileCard;
use leptos::prelude::*;

use crate::auth::{refresh_user, use_auth};
use crate::components::dashboard::use_dashboard;
use crate::components::forms::TextField;

#[component]
pub fn ProfileView(card: Option<ProfileCard>) -> impl IntoView {
    let Some(card) = card else {
        return view! { <p class="text-center py-8">"Please log in to view your profile"</p> }
            .into_any();
    };

    let state = use_dashboard();
    let auth = use_auth();
    let full_name = RwSignal::new(card.full_name.clone());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let action = Action::UpdateProfile {
            full_name: full_name.get(),
        };
        // 顶栏显示的姓名随之更新
        state.run(action, move || refresh_user(auth, state.controller));
    };

    view! {
        <div class="grid md:grid-cols-3 gap-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body items-center text-center">
                    <div class="avatar">
                        <div class="w-28 rounded-full">
                            <img alt="avatar" src=card.avatar_url.clone() />
                        </div>
                    </div>
                    <h3 class="card-title">{card.full_name.clone()}</h3>
                    <span class="badge badge-primary">{card.role_label()}</span>
                    <p class="opacity-70">{card.email.clone()}</p>
                    <p class="font-mono text-sm">{format!("@{}", card.username)}</p>
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl md:col-span-2">
                <form class="card-body" on:submit=on_submit>
                    <h3 class="card-title">"Edit Profile"</h3>
                    <TextField id="p_name" label="Full Name" value=full_name />
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary">"Save Changes"</button>
                    </div>
                </form>
            </div>
        </div>
    }
    .into_any()
}
