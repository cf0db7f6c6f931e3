use campusdesk::NoticeKind;
use leptos::prelude::*;

use crate::shell::use_toasts;

fn alert_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "alert alert-success shadow-lg",
        NoticeKind::Error => "alert alert-error shadow-lg",
        NoticeKind::Info => "alert alert-info shadow-lg",
    }
}

/// 右上角提示框，点击关闭
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    move || {
        toasts.current.get().map(|notice| {
            view! {
                <div class="toast toast-top toast-end z-50" on:click=move |_| toasts.dismiss()>
                    <div class=alert_class(notice.kind)>
                        <span>{notice.message}</span>
                    </div>
                </div>
            }
        })
    }
}
