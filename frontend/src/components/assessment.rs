use careerguide::assessment::{AnswerOutcome, AssessmentProgress, submit_assessment};
use careerguide_shared::AssessmentAnswer;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AppSession;
use crate::components::icons::ErrorAlert;
use crate::components::layout::Layout;
use crate::web::router::use_router;

const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit assessment";

#[component]
pub fn AssessmentPage(session: AppSession) -> impl IntoView {
    let router = use_router();

    let progress = RwSignal::new(AssessmentProgress::new());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let submit = {
        let session = session.clone();
        move |answers: Vec<AssessmentAnswer>| {
            set_submitting.set(true);
            set_error_msg.set(None);

            let session = session.clone();
            spawn_local(async move {
                match submit_assessment(&session, answers).await {
                    Ok(next) => router.navigate_to_route(next),
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        let _ = set_error_msg.try_set(Some(e.message_or(SUBMIT_FAILURE_MESSAGE)));
                    }
                }
                let _ = set_submitting.try_set(false);
            });
        }
    };

    let on_answer = {
        let submit = submit.clone();
        move |option: &'static str| {
            let outcome = progress
                .try_update(|p| p.answer(option))
                .unwrap_or(AnswerOutcome::Next(0));
            if let AnswerOutcome::Complete(answers) = outcome {
                submit(answers);
            }
        }
    };

    // 提交失败后保留已作答的内容，可以直接重试
    let on_retry = move |_| submit(progress.with_untracked(|p| p.answers().to_vec()));
    let on_restart = move |_| {
        progress.update(AssessmentProgress::reset);
        set_error_msg.set(None);
    };

    view! {
        <Layout session=session>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <h1 class="card-title text-2xl">"Personality Assessment"</h1>

                    <Show when=move || error_msg.get().is_some()>
                        <ErrorAlert message=Signal::derive(move || error_msg.get().unwrap_or_default()) />
                        <div class="flex gap-2">
                            <button class="btn btn-primary btn-sm" on:click=on_retry.clone() disabled=move || submitting.get()>
                                "Retry"
                            </button>
                            <button class="btn btn-ghost btn-sm" on:click=on_restart>
                                "Start over"
                            </button>
                        </div>
                    </Show>

                    {move || {
                        let on_answer = on_answer.clone();
                        progress.with(|p| match p.current_question() {
                            Some(question) => view! {
                                <div class="space-y-4">
                                    <h2 class="text-xl font-semibold">{question.text}</h2>
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                                        {question
                                            .options
                                            .into_iter()
                                            .map(|option| {
                                                let on_answer = on_answer.clone();
                                                view! {
                                                    <button
                                                        class="btn btn-outline capitalize"
                                                        disabled=move || submitting.get()
                                                        on:click=move |_| on_answer(option)
                                                    >
                                                        {option}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                            .into_any(),
                            None if submitting.get() => view! {
                                <div class="flex items-center gap-2">
                                    <span class="loading loading-spinner"></span>
                                    "Submitting your answers..."
                                </div>
                            }
                            .into_any(),
                            None => view! {
                                <p class="text-base-content/70">"All questions answered."</p>
                            }
                            .into_any(),
                        })
                    }}

                    <div class="space-y-1">
                        <span class="text-sm text-base-content/70">
                            {move || progress.with(|p| format!("Question {} of {}", p.current_index() + 1, p.total()))}
                        </span>
                        <progress
                            class="progress progress-primary w-full"
                            value=move || progress.with(|p| p.percent())
                            max="100"
                        ></progress>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
