use yew::prelude::*;

use crate::content::{Icon, CONTACT};
use crate::dom::CONTACT_ID;

#[function_component(Contact)]
pub fn contact() -> Html {
    // The message form has no backend yet; keep it from reloading the page.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log::info!("Contact message form is not wired to a backend");
    });

    html! {
        <section id={CONTACT_ID} class="contact-section">
            <div class="section-inner form-width">
                <h2 class="section-title">{"Contact Us"}</h2>

                <div class="card contact-card">
                    <div class="contact-row">
                        <span class="contact-icon">{Icon::Mail.glyph()}</span>
                        <div>
                            <h3>{"Email"}</h3>
                            <a href={format!("mailto:{}", CONTACT.email)}>{CONTACT.email}</a>
                        </div>
                    </div>

                    <div class="contact-row">
                        <span class="contact-icon">{Icon::Phone.glyph()}</span>
                        <div>
                            <h3>{"Phone"}</h3>
                            <a href={CONTACT.phone_href}>{CONTACT.phone_display}</a>
                        </div>
                    </div>

                    <div class="contact-row">
                        <span class="contact-icon">{Icon::MapPin.glyph()}</span>
                        <div>
                            <h3>{"Location"}</h3>
                            <p>{CONTACT.location}</p>
                        </div>
                    </div>

                    <div class="contact-message">
                        <h3>{"Send us a Message"}</h3>
                        <form {onsubmit}>
                            <input placeholder="Your name" />
                            <input type="email" placeholder="Your email" />
                            <textarea placeholder="Your message" />
                            <button type="submit" class="primary-button full-width">{"Send Message"}</button>
                        </form>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact-card {
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-row {
                    display: flex;
                    gap: 1rem;
                }

                .contact-icon {
                    flex-shrink: 0;
                    width: 24px;
                    font-size: 1.25rem;
                    color: var(--brand);
                }

                .contact-row h3,
                .contact-message h3 {
                    margin: 0 0 0.25rem;
                    font-size: 1rem;
                }

                .contact-row a,
                .contact-row p {
                    margin: 0;
                    color: var(--muted-foreground);
                    text-decoration: none;
                }

                .contact-row a:hover {
                    color: var(--foreground);
                }

                .contact-message {
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                }

                .contact-message h3 {
                    margin-bottom: 1rem;
                }

                .contact-message form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .contact-message textarea {
                    min-height: 6rem;
                }
                "#}
            </style>
        </section>
    }
}
