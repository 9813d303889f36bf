use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::Icon;
use crate::dom::{scroll_to_section, NOMINATION_FORM_ID};
use crate::theme;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub dark: bool,
    pub on_toggle_theme: Callback<()>,
    pub applications_open: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps {
        dark,
        on_toggle_theme,
        applications_open,
    } = props;

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_theme.emit(());
        })
    };

    let apply = Callback::from(|_: MouseEvent| scroll_to_section(NOMINATION_FORM_ID));

    html! {
        <header class="top-header">
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img
                        src={theme::logo_src(*dark)}
                        alt="FounderSmith"
                        class={classes!("logo", dark.then(|| "logo-dark"))}
                    />
                </Link<Route>>
                <div class="header-actions">
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle dark mode">
                        {if *dark { Icon::Sun.glyph() } else { Icon::Moon.glyph() }}
                    </button>
                    if *applications_open {
                        <button class="primary-button pill" onclick={apply}>{"Apply Now"}</button>
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    border-bottom: 1px solid var(--border);
                    background: var(--background-translucent);
                    backdrop-filter: blur(8px);
                }

                .header-content {
                    display: flex;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    align-items: center;
                    justify-content: space-between;
                }

                .logo {
                    height: 2rem;
                    object-fit: contain;
                }

                .logo.logo-dark {
                    height: 2.5rem;
                }

                .header-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .theme-toggle {
                    display: flex;
                    width: 36px;
                    height: 36px;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    background: var(--background);
                    color: var(--foreground);
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: background 0.2s;
                }

                .theme-toggle:hover {
                    background: var(--secondary);
                }
                "#}
            </style>
        </header>
    }
}
