//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航决定交给核心库的 `guard::resolve`，这里只负责执行：
//! 地址栏变化 -> 更新当前路由 -> 守卫 -> 重定向或渲染。

use careerguide::AppRoute;
use careerguide::auth::AuthState;
use careerguide::guard::{self, GuardDecision};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向，避免后退时再次触发）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 整页跳转，丢弃所有内存状态
pub fn hard_redirect(route: AppRoute) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(route.to_path()) {
            log::error!("[Router] hard redirect failed: {:?}", e);
        }
    }
}

/// 路由器服务
///
/// 通过注入的认证状态信号实现守卫，与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态（注入的信号）
    auth_state: Signal<AuthState>,
    /// 被守卫拦截的原始路径，登录后恢复
    return_to: RwSignal<Option<String>>,
}

impl RouterService {
    fn new(auth_state: Signal<AuthState>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            auth_state,
            return_to: RwSignal::new(None),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 当前路由的导航决定（响应式）
    pub fn decision(&self) -> GuardDecision {
        guard::resolve(&self.auth_state.get(), &self.current_route.get())
    }

    /// 导航到指定路由
    ///
    /// 守卫由 `setup_guard` 中的 Effect 统一执行。
    pub fn navigate_to_route(&self, target: AppRoute) {
        log::debug!("[Router] navigate to {}", target);
        push_history_state(target.to_path());
        self.set_route.set(target);
    }

    /// 被拦截的原始路径（不清空）
    pub fn return_to(&self) -> Option<String> {
        self.return_to.get_untracked()
    }

    /// 取出并清空被拦截的原始路径
    pub fn take_return_to(&self) -> Option<String> {
        let from = self.return_to.get_untracked();
        self.return_to.set(None);
        from
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 路由或认证状态变化时执行守卫
    fn setup_guard(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let auth_state = self.auth_state;
        let return_to = self.return_to;

        Effect::new(move |_| {
            let state = auth_state.get();
            let route = current_route.get();

            if let GuardDecision::Redirect { to, from } = guard::resolve(&state, &route) {
                if from.is_some() {
                    return_to.set(from);
                }
                log::info!("[Router] {} -> {}", route, to);
                replace_history_state(to.to_path());
                set_route.set(to);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(auth_state: Signal<AuthState>) -> RouterService {
    let router = RouterService::new(auth_state);

    router.init_popstate_listener();
    router.setup_guard();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
///
/// 只能在 `Router` 的子组件中调用。
pub fn use_router() -> RouterService {
    match use_context::<RouterService>() {
        Some(router) => router,
        None => {
            log::error!("[Router] RouterService not found in context, creating a detached one");
            RouterService::new(Signal::derive(AuthState::signed_out))
        }
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    auth_state: Signal<AuthState>,
    children: Children,
) -> impl IntoView {
    provide_router(auth_state);

    children()
}

/// 路由出口组件
///
/// 守卫放行时渲染匹配的页面，其余情况显示等待指示。
/// 已渲染的页面在刷新身份期间（加载标记短暂为真）保持挂载。
#[component]
pub fn RouterOutlet<F>(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: F,
) -> impl IntoView
where
    F: Fn(AppRoute) -> AnyView + Send + Sync + 'static,
{
    let router = use_router();

    let rendered = Memo::new(move |prev: Option<&Option<AppRoute>>| {
        let route = router.current_route().get();
        match router.decision() {
            GuardDecision::Allow => Some(route),
            GuardDecision::Pending if prev.and_then(Option::as_ref) == Some(&route) => Some(route),
            _ => None,
        }
    });

    move || match rendered.get() {
        Some(route) => matcher(route),
        None => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// 站内链接，不刷新页面
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to_route(to.clone());
    };

    view! {
        <a href=href class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
