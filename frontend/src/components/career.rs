use careerguide::career::{CAREER_FAILURE_MESSAGE, CareerView, format_salary, load_career_path};
use careerguide_shared::{CareerPath, CareerStage};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AppSession;
use crate::components::icons::{ErrorAlert, Spinner};
use crate::components::layout::Layout;
use crate::web::router::use_router;

#[component]
fn StageItem(index: usize, stage: CareerStage, last: bool) -> impl IntoView {
    let salary = match &stage.currency {
        Some(currency) => format!("{} {}/year", currency, format_salary(stage.salary)),
        None => format!("${}/year", format_salary(stage.salary)),
    };

    view! {
        <div class="flex mb-8">
            <div class="flex flex-col items-center mr-4">
                <div class="w-10 h-10 bg-primary rounded-full flex items-center justify-center text-primary-content font-bold">
                    {index + 1}
                </div>
                <Show when=move || !last>
                    <div class="w-1 h-24 bg-primary/20"></div>
                </Show>
            </div>
            <div class="card bg-base-100 shadow flex-1">
                <div class="card-body">
                    <h3 class="text-xl font-bold text-primary">{stage.title}</h3>
                    <div class="grid grid-cols-2 gap-4 mt-2">
                        <span>{salary}</span>
                        <span>{format!("{}+ years experience", stage.years)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CareerContent(path: CareerPath) -> impl IntoView {
    let count = path.progression.len();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-2xl">{format!("Career Match: {}", path.current_career)}</h2>
                <p class="text-lg text-primary">{format!("Match Rating: {}%", path.match_rating)}</p>
            </div>
        </div>

        <h2 class="text-2xl font-bold">"Career Progression"</h2>
        <div>
            {path
                .progression
                .into_iter()
                .enumerate()
                .map(|(index, stage)| view! { <StageItem index=index stage=stage last=index + 1 == count /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CareerPage(session: AppSession) -> impl IntoView {
    let router = use_router();
    let (path, set_path) = signal(Option::<CareerPath>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    {
        let session = session.clone();
        spawn_local(async move {
            match load_career_path(session.api()).await {
                Ok(CareerView::Path(loaded)) => {
                    let _ = set_path.try_set(Some(loaded));
                }
                Ok(CareerView::Redirect(route)) => router.navigate_to_route(route),
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    let _ = set_error_msg.try_set(Some(e.message_or(CAREER_FAILURE_MESSAGE)));
                }
            }
            let _ = set_loading.try_set(false);
        });
    }

    view! {
        <Layout session=session>
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(message) = error_msg.get() {
                    return view! { <ErrorAlert message=message /> }.into_any();
                }
                path.get()
                    .map(|path| view! { <CareerContent path=path /> })
                    .into_any()
            }}
        </Layout>
    }
}
