use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FAQS;
use crate::dom::{scroll_to_section, CONTACT_ID};

/// Single-open accordion: opening an item closes the previous one, clicking
/// the open item collapses it.
pub fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    let reach_out = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(CONTACT_ID);
    });

    html! {
        <section class="faq-section">
            <div class="section-inner narrow">
                <div class="faq-eyebrow">
                    <span class="eyebrow">{"Got Questions?"}</span>
                </div>
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <p class="section-subtitle">
                    {"Everything you need to know about FounderSmith and the application process"}
                </p>

                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, faq)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_| open.set(toggled(*open, index)))
                        };
                        html! {
                            <FaqItem
                                key={index}
                                question={faq.question}
                                answer={faq.answer}
                                is_open={*open == Some(index)}
                                {on_toggle}
                            />
                        }
                    }) }
                </div>

                <p class="faq-more">
                    {"Still have questions? "}
                    <button class="link-button" onclick={reach_out}>{"Reach out to us"}</button>
                </p>
            </div>
            <style>
                {r#"
                .faq-eyebrow {
                    text-align: center;
                    margin-bottom: 1rem;
                }

                .eyebrow {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 4px;
                    background: var(--secondary);
                    color: var(--muted-foreground);
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                }

                .faq-item {
                    border-bottom: 1px solid var(--border);
                }

                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    font-size: 1rem;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-question:hover {
                    color: var(--brand);
                }

                .toggle-icon {
                    margin-left: 1rem;
                    font-size: 1.25rem;
                    color: var(--muted-foreground);
                }

                .faq-answer {
                    padding-bottom: 1rem;
                    color: var(--muted-foreground);
                    font-size: 0.9rem;
                    line-height: 1.6;
                }

                .faq-answer p {
                    margin: 0;
                }

                .faq-more {
                    margin-top: 3rem;
                    text-align: center;
                    color: var(--muted-foreground);
                }

                .link-button {
                    background: none;
                    border: none;
                    padding: 0;
                    color: var(--brand);
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                }

                .link-button:hover {
                    text-decoration: underline;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::toggled;

    #[test]
    fn opening_replaces_previous_item() {
        assert_eq!(toggled(None, 2), Some(2));
        assert_eq!(toggled(Some(2), 4), Some(4));
    }

    #[test]
    fn clicking_open_item_collapses_it() {
        assert_eq!(toggled(Some(3), 3), None);
    }
}
