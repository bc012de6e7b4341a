use careerguide::AppRoute;
use careerguide::career::{DASHBOARD_FAILURE_MESSAGE, DashboardData, load_dashboard};
use careerguide_shared::{CourseSuggestion, PersonalityProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{AppSession, auth_signal};
use crate::components::icons::{ErrorAlert, Spinner, TrendingUp};
use crate::components::layout::Layout;
use crate::web::router::use_router;

#[component]
fn TraitCard(label: &'static str, score: f64) -> impl IntoView {
    view! {
        <div class="stat bg-primary/5 rounded-box">
            <div class="stat-title">{label}</div>
            <div class="stat-value text-primary text-2xl">{format!("{:.0}%", score)}</div>
        </div>
    }
}

#[component]
fn ProfileCard(profile: PersonalityProfile) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-2xl">"Personality Profile"</h2>
                <p class="text-xl text-primary">{profile.name}</p>
                <p class="text-base-content/70">{profile.description}</p>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-4">
                    <TraitCard label="Dominance" score=profile.dominance />
                    <TraitCard label="Extraversion" score=profile.extraversion />
                    <TraitCard label="Patience" score=profile.patience />
                    <TraitCard label="Formality" score=profile.formality />
                </div>
            </div>
        </div>
    }
}

#[component]
fn CourseItem(item: CourseSuggestion) -> impl IntoView {
    let has_skills = !item.key_skills.is_empty();
    view! {
        <div class="p-4 border border-base-300 rounded-box hover:bg-base-200">
            <p class="font-medium">{item.course}</p>
            <p class="text-base-content/70">{item.school}</p>
            {item.duration.map(|years| view! { <p class="text-sm text-base-content/50">{format!("{} years", years)}</p> })}
            <Show when=move || has_skills>
                <p class="text-sm text-base-content/50 mt-2">"Key Skills:"</p>
            </Show>
            <div class="flex flex-wrap gap-2 mt-1">
                {item
                    .key_skills
                    .into_iter()
                    .map(|skill| view! { <span class="badge badge-primary badge-outline">{skill}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let router = use_router();
    let rating = data.rating_label();
    let DashboardData {
        profile,
        recommendation,
    } = data;

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-2xl">{format!("Welcome back, {}!", profile.first_name)}</h1>
                <p class="text-base-content/70">"Here's your career development summary"</p>
            </div>
        </div>

        {profile.profile.map(|p| view! { <ProfileCard profile=p /> })}

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-4">
                <h2 class="card-title text-2xl">
                    <TrendingUp attr:class="h-6 w-6 text-primary" />
                    "Your Career Match"
                </h2>
                <div>
                    <p class="text-xl text-primary">{recommendation.career_recommendation}</p>
                    <p class="text-base-content/70">"Match Rating: " {rating}</p>
                </div>
                {(!recommendation.related_courses_and_schools.is_empty()).then(|| view! {
                    <div class="space-y-3">
                        <h3 class="text-lg font-semibold">"Related Courses"</h3>
                        {recommendation
                            .related_courses_and_schools
                            .into_iter()
                            .map(|item| view! { <CourseItem item=item /> })
                            .collect_view()}
                    </div>
                })}
            </div>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-2xl">"Quick Actions"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <button
                        class="btn btn-outline h-auto py-4 flex-col items-start"
                        on:click=move |_| router.navigate_to_route(AppRoute::Assessment)
                    >
                        <span class="font-medium">"Retake Assessment"</span>
                        <span class="text-sm font-normal">"Update your personality profile"</span>
                    </button>
                    <button
                        class="btn btn-outline h-auto py-4 flex-col items-start"
                        on:click=move |_| router.navigate_to_route(AppRoute::Skills)
                    >
                        <span class="font-medium">"Update Skills"</span>
                        <span class="text-sm font-normal">"Manage your skill set"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage(session: AppSession) -> impl IntoView {
    let (data, set_data) = signal(Option::<DashboardData>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 认证状态里的名字先行展示，数据到达后以最新身份为准
    let auth_state = auth_signal(&session);
    let first_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.first_name)
            .unwrap_or_default()
    };

    {
        let session = session.clone();
        spawn_local(async move {
            match load_dashboard(session.api()).await {
                Ok(loaded) => {
                    let _ = set_data.try_set(Some(loaded));
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    log::error!("[Dashboard] load failed: {}", e);
                    let _ = set_error_msg.try_set(Some(e.message_or(DASHBOARD_FAILURE_MESSAGE)));
                }
            }
            let _ = set_loading.try_set(false);
        });
    }

    view! {
        <Layout session=session>
            {move || {
                if loading.get() {
                    return view! {
                        <p class="text-base-content/70">{format!("Loading your summary, {}...", first_name())}</p>
                        <Spinner />
                    }
                    .into_any();
                }
                if let Some(message) = error_msg.get() {
                    return view! {
                        <h3 class="font-medium text-error">"Error Loading Dashboard"</h3>
                        <ErrorAlert message=message />
                    }
                    .into_any();
                }
                match data.get() {
                    Some(data) => view! { <DashboardContent data=data /> }.into_any(),
                    None => view! {
                        <p class="text-center py-12 text-base-content/50">"No dashboard data available"</p>
                    }
                    .into_any(),
                }
            }}
        </Layout>
    }
}
