//! 核心库回调的浏览器实现

use std::time::Duration;

use campusdesk::{Notice, Shell};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::auth::{self, AuthContext};
use crate::web::dom;

// =========================================================
// 提示框
// =========================================================

/// 当前显示的提示
///
/// 每条新提示都会替换旧的；计时器只清除由自己显示的那一条。
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub current: RwSignal<Option<Notice>>,
    seq: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    pub fn show(&self, notice: Notice, timeout: Duration) {
        let id = self.seq.get_value().wrapping_add(1);
        self.seq.set_value(id);
        self.current.set(Some(notice));

        let current = self.current;
        let seq = self.seq;
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if seq.try_get_value() == Some(id) {
                let _ = current.try_set(None);
            }
        })
        .forget();
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

// =========================================================
// Shell
// =========================================================

pub struct UiShell {
    auth: AuthContext,
    toasts: ToastContext,
    timeout: Duration,
}

impl UiShell {
    pub fn new(auth: AuthContext, toasts: ToastContext, timeout: Duration) -> Self {
        Self {
            auth,
            toasts,
            timeout,
        }
    }
}

impl Shell for UiShell {
    fn notify(&self, notice: Notice) {
        log::debug!("[Shell] {} notice: {}", notice.kind.as_str(), notice.message);
        self.toasts.show(notice, self.timeout);
    }

    fn confirm(&self, prompt: &str) -> bool {
        dom::confirm(prompt)
    }

    fn show_login(&self) {
        auth::mark_signed_out(&self.auth);
    }
}
