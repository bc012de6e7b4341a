use careerguide::AppRoute;
use careerguide::forms::{SIGNUP_FAILURE_MESSAGE, SignupForm, submit_signup};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AppSession;
use crate::components::icons::ErrorAlert;
use crate::web::router::{Link, use_router};

/// 一个受控输入框
#[component]
fn Field(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form-control">
            <span class="label-text mb-1">{label}</span>
            <input
                type=input_type
                class="input input-bordered"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                required
            />
        </label>
    }
}

#[component]
pub fn SignUpPage(session: AppSession) -> impl IntoView {
    let router = use_router();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let career_interests = RwSignal::new(String::new());

    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            age: age.get_untracked(),
            career_interests: career_interests.get_untracked(),
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let session = session.clone();
        spawn_local(async move {
            match submit_signup(&session, &form).await {
                Ok(next) => router.navigate_to_route(next),
                Err(e) => {
                    let _ = set_error_msg.try_set(Some(e.message_or(SIGNUP_FAILURE_MESSAGE)));
                }
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Create your account"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body gap-3" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <ErrorAlert message=Signal::derive(move || error_msg.get().unwrap_or_default()) />
                        </Show>

                        <Field label="First Name" input_type="text" value=first_name />
                        <Field label="Last Name" input_type="text" value=last_name />
                        <Field label="Email address" input_type="email" value=email />
                        <Field label="Password" input_type="password" value=password />
                        <Field label="Age" input_type="number" value=age />
                        <Field label="Career Interests" input_type="text" value=career_interests />

                        <button class="btn btn-primary mt-4" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() { "Creating account..." } else { "Sign up" }}
                        </button>
                        <p class="text-center text-sm">
                            "Already have an account? "
                            <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
