//! Campus Desk 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `shell`: 核心库回调（提示、确认框、回到登录页）的浏览器实现
//! - `components`: UI 组件层

use std::rc::Rc;

use campusdesk::{ClientConfig, Controller};
use leptos::prelude::*;

mod auth;
mod shell;
mod components {
    pub mod dashboard;
    pub mod forms;
    pub mod login;
    pub mod register;
    pub mod toast;
    pub mod views;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::toast::ToastHost;
use crate::shell::{ToastContext, UiShell};

// 浏览器 API 封装模块
pub(crate) mod web {
    pub mod dom;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchClient;
    pub use storage::BrowserStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};
use web::{BrowserStorage, FetchClient};

pub type AppController = Controller<FetchClient, BrowserStorage>;

/// 控制器句柄
///
/// 控制器内部使用 `Rc`，只能放在本地存储区；句柄本身是 `Copy`，可以被任意闭包捕获。
#[derive(Clone, Copy)]
pub struct ControllerHandle(StoredValue<Rc<AppController>, LocalStorage>);

impl ControllerHandle {
    fn new(controller: AppController) -> Self {
        Self(StoredValue::new_local(Rc::new(controller)))
    }

    pub fn get(&self) -> Rc<AppController> {
        self.0.get_value()
    }
}

pub fn use_controller() -> ControllerHandle {
    use_context::<ControllerHandle>().expect("ControllerHandle should be provided")
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();

    // 1. 认证与提示上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    let toasts = ToastContext::new();
    provide_context(toasts);

    // 2. 组装控制器：浏览器传输 + localStorage + 界面回调
    let shell = Rc::new(UiShell::new(auth_ctx, toasts, config.notice_timeout));
    let controller = ControllerHandle::new(Controller::new(
        FetchClient,
        BrowserStorage::detect(),
        shell,
        config,
    ));
    provide_context(controller);

    // 3. 恢复已保存的会话
    init_auth(&auth_ctx, controller);

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <ToastHost />
    }
}
