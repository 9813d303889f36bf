use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::application::{description_counter, ApplicationForm, IdeaType};
use crate::content::{DESCRIPTION_MAX_CHARS, DOMAINS, PHONE_PREFIX};
use crate::dom::NOMINATION_FORM_ID;
use crate::supabase;

const SUCCESS_MESSAGE: &str = "Application submitted successfully!";
const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Success,
    Failed(String),
}

impl SubmitStatus {
    fn class(&self) -> &'static str {
        match self {
            SubmitStatus::Success => "submit-message success",
            SubmitStatus::Failed(_) => "submit-message error",
        }
    }

    fn text(&self) -> &str {
        match self {
            SubmitStatus::Success => SUCCESS_MESSAGE,
            SubmitStatus::Failed(message) => message,
        }
    }
}

#[derive(Properties, PartialEq)]
struct ChoiceProps {
    label: AttrValue,
    selected: bool,
    onclick: Callback<()>,
}

#[function_component(Choice)]
fn choice(props: &ChoiceProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };
    html! {
        <button type="button" class={classes!("choice", props.selected.then(|| "selected"))} {onclick}>
            <span class="choice-dot"></span>
            {&props.label}
        </button>
    }
}

#[function_component(NominationForm)]
pub fn nomination_form() -> Html {
    let form = use_state(ApplicationForm::default);
    let is_submitting = use_state(|| false);
    let status = use_state(|| None::<SubmitStatus>);

    // Applies `edit` to a copy of the current form state.
    let update = {
        let form = form.clone();
        move |edit: fn(&mut ApplicationForm, String)| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                edit(&mut next, value);
                form.set(next);
            })
        }
    };
    let set_flag = {
        let form = form.clone();
        move |edit: fn(&mut ApplicationForm)| {
            let form = form.clone();
            Callback::from(move |_: ()| {
                let mut next = (*form).clone();
                edit(&mut next);
                form.set(next);
            })
        }
    };

    let on_name = update(|f, v| f.full_name = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_email = update(|f, v| f.email = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_mobile = update(|f, v| f.mobile_number = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_college = update(|f, v| f.college = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_domain = update(|f, v| f.domain = v)
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    let on_description = update(|f, v| f.idea_description = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let record = match form.validate() {
                Ok(record) => record,
                Err(err) => {
                    status.set(Some(SubmitStatus::Failed(err.to_string())));
                    return;
                }
            };

            is_submitting.set(true);
            status.set(None);

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let status = status.clone();
            spawn_local(async move {
                let result = supabase::insert_application(&record).await;
                is_submitting.set(false);
                match result {
                    Ok(()) => {
                        status.set(Some(SubmitStatus::Success));
                        form.set(ApplicationForm::default());
                    }
                    Err(err) => {
                        log!("Application insert failed:", err.to_string());
                        status.set(Some(SubmitStatus::Failed(FAILURE_MESSAGE.to_string())));
                    }
                }
            });
        })
    };

    let yes_no = |selected: bool, on_yes: Callback<()>, on_no: Callback<()>| {
        html! {
            <div class="choice-row">
                <Choice label="Yes" selected={selected} onclick={on_yes} />
                <Choice label="No" selected={!selected} onclick={on_no} />
            </div>
        }
    };

    html! {
        <section id={NOMINATION_FORM_ID} class="nomination-section">
            <div class="section-inner form-width">
                <h2 class="section-title">{"Nomination Form"}</h2>
                <p class="section-subtitle">{"Fill in your details to apply for FounderSmith 2026"}</p>

                <form class="nomination-form" {onsubmit}>
                    <div class="card">
                        <h3>{"Personal Details"}</h3>

                        <div class="field">
                            <label>{"Full Name "}<span class="required">{"*"}</span></label>
                            <input
                                type="text"
                                placeholder="Enter your full name"
                                value={form.full_name.clone()}
                                oninput={on_name}
                                required=true
                            />
                        </div>

                        <div class="field">
                            <label>{"Email Address "}<span class="required">{"*"}</span></label>
                            <input
                                type="email"
                                placeholder="you@example.com"
                                value={form.email.clone()}
                                oninput={on_email}
                                required=true
                            />
                        </div>

                        <div class="field">
                            <label>{"Mobile Number "}<span class="required">{"*"}</span></label>
                            <div class="phone-input">
                                <span class="phone-prefix">{PHONE_PREFIX}</span>
                                <input
                                    type="tel"
                                    placeholder="9876543210"
                                    value={form.mobile_number.clone()}
                                    oninput={on_mobile}
                                    required=true
                                />
                            </div>
                        </div>

                        <div class="field">
                            <label>{"College / Institution Name "}<span class="required">{"*"}</span></label>
                            <input
                                type="text"
                                placeholder="Enter your college or institution name"
                                value={form.college.clone()}
                                oninput={on_college}
                                required=true
                            />
                        </div>
                    </div>

                    <div class="card">
                        <h3>{"Founder Status"}</h3>

                        <div class="field">
                            <label>{"Are you a Solo Founder?"}</label>
                            { yes_no(
                                form.is_solo_founder,
                                set_flag(|f| f.is_solo_founder = true),
                                set_flag(|f| f.is_solo_founder = false),
                            ) }
                        </div>

                        <div class="field">
                            <label>{"Do you need a Co-Founder?"}</label>
                            { yes_no(
                                form.needs_cofounder,
                                set_flag(|f| f.needs_cofounder = true),
                                set_flag(|f| f.needs_cofounder = false),
                            ) }
                        </div>
                    </div>

                    <div class="card">
                        <h3>{"Idea Details"}</h3>

                        <div class="field">
                            <label>{"Your Idea is In"}</label>
                            <div class="choice-row">
                                { for IdeaType::ALL.iter().map(|&idea_type| {
                                    let onclick = {
                                        let form = form.clone();
                                        Callback::from(move |_: ()| {
                                            let mut next = (*form).clone();
                                            next.idea_type = idea_type;
                                            form.set(next);
                                        })
                                    };
                                    html! {
                                        <Choice
                                            key={idea_type.label()}
                                            label={idea_type.label()}
                                            selected={form.idea_type == idea_type}
                                            {onclick}
                                        />
                                    }
                                }) }
                            </div>
                        </div>

                        <div class="field">
                            <label>{"Domain of Your Idea "}<span class="required">{"*"}</span></label>
                            <select onchange={on_domain}>
                                <option value="" disabled=true selected={form.domain.is_empty()}>
                                    {"Select domains..."}
                                </option>
                                { for DOMAINS.iter().map(|&domain| html! {
                                    <option key={domain} value={domain} selected={form.domain == domain}>
                                        {domain}
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div class="field">
                            <label>{"Tell us briefly about your idea "}<span class="required">{"*"}</span></label>
                            <textarea
                                placeholder="Describe your idea and the problem you are solving..."
                                value={form.idea_description.clone()}
                                oninput={on_description}
                                maxlength={DESCRIPTION_MAX_CHARS.to_string()}
                                required=true
                            />
                            <p class="char-counter">{description_counter(&form.idea_description)}</p>
                        </div>
                    </div>

                    <div class="form-footer">
                        <button type="submit" class="primary-button full-width" disabled={*is_submitting}>
                            {if *is_submitting { "Submitting..." } else { "Submit Application" }}
                        </button>
                        if let Some(status) = (*status).as_ref() {
                            <p class={status.class()}>{status.text()}</p>
                        }
                        <p class="form-note">{"Shortlisted participants will be contacted via email"}</p>
                    </div>
                </form>
            </div>
            <style>
                {r#"
                .form-width {
                    max-width: 42rem;
                }

                .nomination-form {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .nomination-form h3 {
                    margin: 0 0 1.5rem;
                    font-size: 1.125rem;
                }

                .field {
                    margin-bottom: 1rem;
                }

                .field label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }

                .required {
                    color: var(--brand);
                }

                .phone-input {
                    display: flex;
                }

                .phone-prefix {
                    display: flex;
                    align-items: center;
                    padding: 0 0.75rem;
                    border: 1px solid var(--border);
                    border-right: none;
                    border-radius: 6px 0 0 6px;
                    color: var(--muted-foreground);
                }

                .phone-input input {
                    border-radius: 0 6px 6px 0;
                }

                .choice-row {
                    display: flex;
                    gap: 0.75rem;
                }

                .choice {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.625rem 1.25rem;
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    background: transparent;
                    color: var(--muted-foreground);
                    font-size: 0.875rem;
                    cursor: pointer;
                    transition: border-color 0.2s, background 0.2s;
                }

                .choice.selected {
                    border-color: var(--brand);
                    background: rgba(120, 3, 138, 0.1);
                    color: var(--foreground);
                }

                .choice-dot {
                    width: 16px;
                    height: 16px;
                    border-radius: 50%;
                    border: 2px solid var(--muted-foreground);
                }

                .choice.selected .choice-dot {
                    border-color: var(--brand);
                    background: var(--brand);
                }

                .nomination-form textarea {
                    min-height: 8rem;
                }

                .char-counter {
                    margin: 0.25rem 0 0;
                    text-align: right;
                    font-size: 0.75rem;
                    color: var(--muted-foreground);
                }

                .form-footer {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .submit-message {
                    margin: 0;
                    text-align: center;
                    font-size: 0.875rem;
                }

                .submit-message.success {
                    color: #16a34a;
                }

                .submit-message.error {
                    color: #dc2626;
                }

                .form-note {
                    margin: 0;
                    text-align: center;
                    font-size: 0.75rem;
                    color: var(--muted-foreground);
                }
                "#}
            </style>
        </section>
    }
}
