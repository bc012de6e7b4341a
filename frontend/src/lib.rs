//! CareerGuide 前端应用
//!
//! - `web`: 浏览器 API 封装（fetch、LocalStorage、History、console）
//! - `auth`: 会话对象与响应式认证状态
//! - `components`: 页面组件，会话对象通过参数显式传入

mod auth;
mod components {
    pub mod assessment;
    pub mod career;
    pub mod dashboard;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod signup;
    pub mod skills;
}
pub mod web;

use careerguide::{AppRoute, ClientConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{AppSession, auth_signal, create_session};
use crate::components::assessment::AssessmentPage;
use crate::components::career::CareerPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::signup::SignUpPage;
use crate::components::skills::SkillsPage;
use crate::web::router::{Router, RouterOutlet, hard_redirect};

/// 根据路由返回对应的视图组件
fn route_view(session: &AppSession, route: AppRoute) -> AnyView {
    let session = session.clone();
    match route {
        AppRoute::Login => view! { <LoginPage session=session /> }.into_any(),
        AppRoute::SignUp => view! { <SignUpPage session=session /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage session=session /> }.into_any(),
        AppRoute::Assessment => view! { <AssessmentPage session=session /> }.into_any(),
        AppRoute::Skills => view! { <SkillsPage session=session /> }.into_any(),
        AppRoute::Career => view! { <CareerPage session=session /> }.into_any(),
        // 根路径总是被守卫重定向，不会渲染
        AppRoute::Root | AppRoute::NotFound => view! {
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
pub fn App(config: ClientConfig) -> impl IntoView {
    log::info!("[App] api base url: {}", config.api_base_url);

    // 1. 创建会话对象
    let session = create_session(config);

    // 2. 注册唯一的认证失败监听：状态重置后整页跳转登录
    if !session.on_auth_failure(|| hard_redirect(AppRoute::auth_failure_redirect())) {
        log::warn!("[App] auth failure listener not registered, 401 will not redirect");
    }

    // 3. 与后端同步身份
    {
        let session = session.clone();
        spawn_local(async move { session.initialize().await });
    }

    // 4. 路由器注入认证状态信号实现守卫
    let auth_state = auth_signal(&session);
    let matcher = move |route: AppRoute| route_view(&session, route);

    view! {
        <Router auth_state=auth_state>
            <RouterOutlet matcher=matcher />
        </Router>
    }
}
