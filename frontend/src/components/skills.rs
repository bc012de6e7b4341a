use std::time::Duration;

use careerguide::skills::{
    LOAD_FAILURE_MESSAGE, SAVE_FAILURE_MESSAGE, SAVE_SUCCESS_MESSAGE, SUCCESS_BANNER_MS,
    SkillSelection, load_skills, save_skills,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AppSession;
use crate::components::icons::{CheckCircle, ErrorAlert, Spinner};
use crate::components::layout::Layout;

#[component]
pub fn SkillsPage(session: AppSession) -> impl IntoView {
    let available = RwSignal::new(Vec::<String>::new());
    let selection = RwSignal::new(SkillSelection::default());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success, set_success) = signal(false);

    // 初始加载
    {
        let session = session.clone();
        spawn_local(async move {
            match load_skills(session.api()).await {
                Ok(catalog) => {
                    let _ = available.try_set(catalog.available);
                    let _ = selection.try_set(catalog.selection);
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    let _ = set_error_msg.try_set(Some(e.message_or(LOAD_FAILURE_MESSAGE)));
                }
            }
            let _ = set_loading.try_set(false);
        });
    }

    let on_save = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_saving.set(true);
            set_error_msg.set(None);
            set_success.set(false);

            let session = session.clone();
            let current = selection.get_untracked();
            spawn_local(async move {
                match save_skills(&session, &current).await {
                    Ok(_) => {
                        let _ = set_success.try_set(true);
                        set_timeout(
                            move || {
                                let _ = set_success.try_set(false);
                            },
                            Duration::from_millis(SUCCESS_BANNER_MS.into()),
                        );
                    }
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        let _ = set_error_msg.try_set(Some(e.message_or(SAVE_FAILURE_MESSAGE)));
                    }
                }
                let _ = set_saving.try_set(false);
            });
        }
    };

    view! {
        <Layout session=session>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <h1 class="card-title text-2xl">"Select Your Skills"</h1>

                    <Show when=move || success.get()>
                        <div role="status" class="alert alert-success text-sm">
                            <CheckCircle attr:class="h-5 w-5 shrink-0" />
                            <span>{SAVE_SUCCESS_MESSAGE}</span>
                        </div>
                    </Show>
                    <Show when=move || error_msg.get().is_some()>
                        <ErrorAlert message=Signal::derive(move || error_msg.get().unwrap_or_default()) />
                    </Show>

                    <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                        <form class="space-y-4" on:submit=on_save.clone()>
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                                <For
                                    each=move || available.get()
                                    key=|skill| skill.clone()
                                    children=move |skill| {
                                        let name = skill.clone();
                                        let label = skill.clone();
                                        let checked = move || selection.with(|s| s.contains(&name));
                                        view! {
                                            <label class="label cursor-pointer justify-start gap-2">
                                                <input
                                                    type="checkbox"
                                                    class="checkbox checkbox-primary"
                                                    prop:checked=checked
                                                    on:change=move |_| {
                                                        selection.update(|s| {
                                                            s.toggle(&skill);
                                                        });
                                                    }
                                                />
                                                <span class="label-text">{label}</span>
                                            </label>
                                        }
                                    }
                                />
                            </div>
                            <p class="text-sm text-base-content/70">
                                {move || format!("{} selected", selection.with(SkillSelection::len))}
                            </p>
                            <button class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Skills" }}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </Layout>
    }
}
