//! 路由服务模块 - 核心引擎
//!
//! 所有对 window.history 的操作都集中在此模块。
//! 导航流程："监听 -> 守卫 -> 写入 History -> 更新路由信号"。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if result.is_err() {
        log::warn!("[Router] history update to {} failed", path);
    }
}

/// 路由器服务
///
/// 通过注入的认证信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // 初始路由同样经过守卫，避免受保护页面闪现
        let requested = AppRoute::from_path(&current_path());
        let initial = match requested.redirect_for(is_authenticated.get_untracked()) {
            Some(redirect) => {
                write_history(redirect.to_path(), false);
                redirect
            }
            None => requested,
        };
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target: AppRoute, push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let route = match target.redirect_for(is_auth) {
            Some(redirect) => {
                log::info!("[Router] {} not reachable, redirecting to {}", target, redirect);
                redirect
            }
            None => target,
        };
        write_history(route.to_path(), push);
        self.set_route.set(route);
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            router.navigate_to_route(target, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时自动重定向
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();
            if let Some(redirect) = route.redirect_for(is_auth) {
                log::info!("[Router] auth changed, redirecting to {}", redirect);
                write_history(redirect.to_path(), true);
                router.set_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}
