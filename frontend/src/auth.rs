//! 认证模块
//!
//! 把控制器的会话状态镜像为信号，供路由守卫和界面读取。
//! 会话本身由控制器持久化在 localStorage 中。

use campusdesk_shared::{RegisterRequest, UserProfile};
use leptos::prelude::*;

use crate::ControllerHandle;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（仅在认证成功后存在）
    pub user: Option<UserProfile>,
    /// 是否已认证
    pub is_authenticated: bool,
    /// 是否正在提交登录/注册
    pub is_loading: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 页面启动时恢复会话
pub fn init_auth(ctx: &AuthContext, controller: ControllerHandle) {
    let restored = controller.get().start().is_some();
    ctx.set_state.update(|state| {
        state.is_loading = false;
        state.is_authenticated = restored;
        state.user = if restored {
            controller.get().current_user()
        } else {
            None
        };
    });
}

/// 登录；失败提示由控制器发出
pub async fn sign_in(
    ctx: AuthContext,
    controller: ControllerHandle,
    email: String,
    password: String,
) -> bool {
    ctx.set_state.update(|s| s.is_loading = true);
    let ctl = controller.get();
    let signed_in = ctl.login(&email, &password).await.is_some();
    finish(ctx, controller, signed_in);
    signed_in
}

/// 注册并直接登录
pub async fn sign_up(ctx: AuthContext, controller: ControllerHandle, request: RegisterRequest) -> bool {
    ctx.set_state.update(|s| s.is_loading = true);
    let ctl = controller.get();
    let signed_in = ctl.register(&request).await.is_some();
    finish(ctx, controller, signed_in);
    signed_in
}

fn finish(ctx: AuthContext, controller: ControllerHandle, signed_in: bool) {
    ctx.set_state.update(|state| {
        state.is_loading = false;
        if signed_in {
            state.user = controller.get().current_user();
            state.is_authenticated = true;
        }
    });
}

/// 注销
///
/// 控制器清空会话后经由 Shell 回调 [`mark_signed_out`]，路由服务随之重定向。
pub fn sign_out(controller: ControllerHandle) {
    controller.get().logout();
}

pub fn mark_signed_out(ctx: &AuthContext) {
    // 提示计时器等回调可能晚于上下文销毁
    let _ = ctx.set_state.try_update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.is_loading = false;
    });
}

/// 资料修改后同步顶栏显示的用户
pub fn refresh_user(ctx: AuthContext, controller: ControllerHandle) {
    let user = controller.get().current_user();
    ctx.set_state.update(|state| state.user = user);
}
