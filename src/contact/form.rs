use log::error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::controller::{ContactAction, ContactFormState};
use super::submit::{send_enquiry, SubmissionTask};
use super::validation::FormField;
use crate::config;

fn input_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    field: FormField,
    value: String,
    error: Option<String>,
    on_edit: Callback<(FormField, String)>,
}

#[function_component(ContactField)]
fn contact_field(props: &FieldProps) -> Html {
    let field = props.field;
    let oninput = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                on_edit.emit((field, value));
            }
        })
    };
    let class = classes!("contact-input", props.error.is_some().then(|| "has-error"));

    html! {
        <div class="contact-field">
            {
                match field {
                    FormField::Message => html! {
                        <textarea
                            name={field.name()}
                            value={props.value.clone()}
                            placeholder={field.placeholder()}
                            rows="4"
                            class={class}
                            oninput={oninput.clone()}
                        />
                    },
                    _ => html! {
                        <input
                            type={if field == FormField::Email { "email" } else { "text" }}
                            name={field.name()}
                            value={props.value.clone()}
                            placeholder={field.placeholder()}
                            class={class}
                            oninput={oninput.clone()}
                        />
                    },
                }
            }
            // Fixed height so the layout doesn't jump when an error appears
            <div class="contact-error-slot">
                if let Some(error) = &props.error {
                    <p class="contact-error">{error}</p>
                }
            </div>
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_reducer(ContactFormState::default);
    let task = use_mut_ref(|| None::<SubmissionTask>);

    // Abort any pending submission when the form goes away
    {
        let task = task.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(pending) = task.borrow_mut().take() {
                        pending.cancel();
                    }
                }
            },
            (),
        );
    }

    let on_edit = {
        let state = state.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            state.dispatch(ContactAction::Edit(field, value));
        })
    };

    let submit = {
        let state = state.clone();
        let task = task.clone();
        Callback::from(move |_: ()| {
            if state.is_submitting() {
                return;
            }
            match state.prepare_submission() {
                Err(errors) => state.dispatch(ContactAction::ValidationFailed(errors)),
                Ok(data) => {
                    state.dispatch(ContactAction::SubmitStarted);
                    let dispatcher = state.dispatcher();
                    let pending = SubmissionTask::spawn(send_enquiry(data), move |result| match result {
                        Ok(()) => dispatcher.dispatch(ContactAction::SubmitSucceeded),
                        Err(err) => {
                            error!("Submission error: {}", err);
                            dispatcher.dispatch(ContactAction::SubmitFailed(err.user_message()));
                        }
                    });
                    *task.borrow_mut() = Some(pending);
                }
            }
        })
    };

    let onsubmit = {
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let retry = submit.reform(|_: MouseEvent| ());

    let dismiss_success = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ContactAction::DismissSuccess))
    };

    let dismiss_error = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ContactAction::DismissError))
    };

    let submitting = state.is_submitting();

    html! {
        <>
            <style>
                {r#"
                    .contact-section {
                        min-height: 80vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 4rem 2rem;
                        background-color: #006ABC;
                        color: #fff;
                    }
                    .contact-grid {
                        max-width: 72rem;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    .contact-info h2 { font-size: 3rem; font-weight: 300; margin-bottom: 1rem; }
                    .contact-rule { width: 3rem; height: 2px; background: #fff; margin-bottom: 2rem; }
                    .contact-info dt { font-weight: 500; margin-top: 1.5rem; }
                    .contact-info dd { margin: 0.5rem 0 0; opacity: 0.9; }
                    .contact-input {
                        width: 100%;
                        background: transparent;
                        border: 0;
                        border-bottom: 2px solid rgba(255, 255, 255, 0.4);
                        color: #fff;
                        font-size: 1.125rem;
                        padding: 0.75rem 0;
                        resize: none;
                    }
                    .contact-input:focus { outline: none; border-bottom-color: #fff; }
                    .contact-input.has-error { border-bottom-color: #f87171; }
                    .contact-error-slot { height: 1.5rem; margin-top: 0.5rem; }
                    .contact-error { color: #fca5a5; font-size: 0.875rem; margin: 0; }
                    .contact-submit {
                        min-width: 120px;
                        border: 2px solid #fff;
                        border-radius: 9999px;
                        background: transparent;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        font-size: 1.125rem;
                        cursor: pointer;
                    }
                    .contact-submit:disabled { opacity: 0.5; cursor: not-allowed; }
                    .contact-spinner {
                        display: inline-block;
                        width: 20px;
                        height: 20px;
                        border: 2px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .contact-failure {
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                        margin-top: 1.5rem;
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        background: rgba(127, 29, 29, 0.6);
                    }
                    .contact-failure button { background: none; border: 1px solid #fff; color: #fff; border-radius: 6px; padding: 0.25rem 0.75rem; cursor: pointer; }
                    .success-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                    }
                    .success-card {
                        position: relative;
                        background: #fff;
                        color: #111827;
                        border-radius: 1rem;
                        padding: 2rem;
                        max-width: 28rem;
                        width: 100%;
                        text-align: center;
                    }
                    .success-close { position: absolute; top: 1rem; right: 1rem; background: none; border: 0; font-size: 1.5rem; color: #9ca3af; cursor: pointer; }
                    .success-icon { width: 4rem; height: 4rem; margin: 0 auto 1rem; border-radius: 50%; background: #dcfce7; color: #16a34a; font-size: 2rem; line-height: 4rem; }
                    .success-ok { background: #2563eb; color: #fff; border: 0; border-radius: 8px; padding: 0.5rem 1.5rem; cursor: pointer; }
                    @media (max-width: 1024px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <section class="contact-section" id="contact">
                <div class="contact-grid">
                    <div class="contact-info">
                        <h2>{"Get in touch"}</h2>
                        <div class="contact-rule"></div>
                        <h3>{"For general enquiries"}</h3>
                        <dl>
                            <dt>{"Address :"}</dt>
                            <dd>{config::COMPANY_ADDRESS}</dd>
                            <dt>{"Phone :"}</dt>
                            <dd>{config::COMPANY_PHONE}</dd>
                            <dt>{"Email :"}</dt>
                            <dd>{config::COMPANY_EMAIL}</dd>
                        </dl>
                    </div>

                    <form onsubmit={onsubmit} novalidate={true}>
                        {
                            for FormField::ALL.iter().map(|field| html! {
                                <ContactField
                                    field={*field}
                                    value={state.data.get(*field).to_string()}
                                    error={state.errors.get(*field).map(str::to_string)}
                                    on_edit={on_edit.clone()}
                                />
                            })
                        }
                        <button type="submit" class="contact-submit" disabled={submitting}>
                            if submitting {
                                <span class="contact-spinner"></span>
                            } else {
                                {"Send"}
                            }
                        </button>
                        if let Some(message) = state.failure() {
                            <div class="contact-failure" role="alert">
                                <span>{message}</span>
                                <button type="button" onclick={retry}>{"Try again"}</button>
                                <button type="button" onclick={dismiss_error}>{"Dismiss"}</button>
                            </div>
                        }
                    </form>
                </div>
            </section>

            if state.success_visible() {
                <div class="success-overlay">
                    <div class="success-card">
                        <button class="success-close" aria-label="Close" onclick={dismiss_success.clone()}>{"×"}</button>
                        <div class="success-icon">{"✓"}</div>
                        <h3>{"Message Sent Successfully!"}</h3>
                        <p>{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
                        <button class="success-ok" onclick={dismiss_success}>{"OK"}</button>
                    </div>
                </div>
            }
        </>
    }
}
