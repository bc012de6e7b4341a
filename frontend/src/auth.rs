//! 认证模块
//!
//! 把核心库的 `AuthContext` 接到响应式信号上。
//! 会话对象在 App 根部构造一次，随后显式传给路由与每个页面。

use careerguide::ClientConfig;
use careerguide::api::ApiClient;
use careerguide::auth::{AuthContext, AuthState, AuthStateCell};
use leptos::prelude::*;

use crate::web::{BrowserStorage, FetchClient};

/// 以信号承载的认证状态
///
/// 读取使用 `get_untracked`，需要响应式订阅时通过 `signal()` 取得信号。
#[derive(Clone, Copy)]
pub struct SignalAuthState(RwSignal<AuthState>);

impl SignalAuthState {
    pub fn new() -> Self {
        Self(RwSignal::new(AuthState::default()))
    }

    pub fn signal(&self) -> Signal<AuthState> {
        self.0.into()
    }
}

impl AuthStateCell for SignalAuthState {
    fn snapshot(&self) -> AuthState {
        self.0.try_get_untracked().unwrap_or_else(AuthState::signed_out)
    }

    fn replace(&self, state: AuthState) {
        // 所属组件已卸载时静默忽略
        let _ = self.0.try_set(state);
    }
}

/// 应用使用的会话类型
pub type AppSession = AuthContext<FetchClient, BrowserStorage, SignalAuthState>;

/// 构造会话对象
pub fn create_session(config: ClientConfig) -> AppSession {
    let api = ApiClient::new(config, FetchClient, BrowserStorage);
    AuthContext::new(api, SignalAuthState::new())
}

/// 响应式读取认证状态
pub fn auth_signal(session: &AppSession) -> Signal<AuthState> {
    session.state_cell().signal()
}
