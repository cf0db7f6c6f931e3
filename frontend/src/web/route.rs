//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 仪表盘 (需要认证)
    Dashboard,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// 已认证用户不应停留在登录/注册页
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 按认证状态得到实际应显示的路由；无需重定向时返回 None
    pub fn redirect_for(&self, is_authenticated: bool) -> Option<Self> {
        if self.requires_auth() && !is_authenticated {
            Some(Self::Login)
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Some(Self::Dashboard)
        } else {
            None
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_to_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn guard_redirects() {
        assert_eq!(AppRoute::Dashboard.redirect_for(false), Some(AppRoute::Login));
        assert_eq!(AppRoute::Dashboard.redirect_for(true), None);
        assert_eq!(AppRoute::Register.redirect_for(true), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::Register.redirect_for(false), None);
        assert_eq!(AppRoute::NotFound.redirect_for(true), None);
    }
}
