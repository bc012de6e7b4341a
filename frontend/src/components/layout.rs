//! 受保护页面的外框：侧边导航 + 内容区

use careerguide::AppRoute;
use leptos::prelude::*;

use crate::auth::AppSession;
use crate::components::icons::{Compass, LogOut};
use crate::web::router::{Link, use_router};

const NAV_ITEMS: [(AppRoute, &str); 4] = [
    (AppRoute::Dashboard, "Dashboard"),
    (AppRoute::Assessment, "Assessment"),
    (AppRoute::Skills, "Skills"),
    (AppRoute::Career, "Career Path"),
];

#[component]
fn Sidebar(session: AppSession) -> impl IntoView {
    let router = use_router();

    let on_logout = move |_| {
        session.logout();
        router.navigate_to_route(AppRoute::Login);
    };

    view! {
        <aside class="w-64 min-h-screen bg-base-100 shadow-xl flex flex-col">
            <div class="flex items-center gap-2 p-6 text-primary">
                <Compass attr:class="h-6 w-6" />
                <span class="text-xl font-bold">"CareerGuide"</span>
            </div>
            <ul class="menu flex-1 gap-1 px-4">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(route, label)| {
                        let active = {
                            let route = route.clone();
                            move || router.current_route().get() == route
                        };
                        view! {
                            <li>
                                <Link to=route class=Signal::derive(move || if active() { "active".to_string() } else { String::new() })>
                                    {label}
                                </Link>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="p-4">
                <button on:click=on_logout class="btn btn-outline btn-error w-full gap-2">
                    <LogOut attr:class="h-4 w-4" />
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn Layout(session: AppSession, children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-base-200 font-sans">
            <Sidebar session=session />
            <main class="flex-1 p-4 md:p-8">
                <div class="max-w-5xl mx-auto space-y-6">{children()}</div>
            </main>
        </div>
    }
}
