use careerguide::AppRoute;
use careerguide::forms::{LOGIN_FAILURE_MESSAGE, LoginForm, submit_login};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AppSession;
use crate::components::icons::{Compass, ErrorAlert};
use crate::web::router::{Link, use_router};

#[component]
pub fn LoginPage(session: AppSession) -> impl IntoView {
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let session = session.clone();
        spawn_local(async move {
            let from = router.return_to();
            match submit_login(&session, &form, from.as_deref()).await {
                Ok(next) => {
                    router.take_return_to();
                    router.navigate_to_route(next);
                }
                Err(e) => {
                    let _ = set_error_msg.try_set(Some(e.message_or(LOGIN_FAILURE_MESSAGE)));
                }
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Compass attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Sign in to your account"</h1>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <ErrorAlert message=Signal::derive(move || error_msg.get().unwrap_or_default()) />
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email address"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "Don't have an account? "
                            <Link to=AppRoute::SignUp class="link link-primary">"Sign up"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
