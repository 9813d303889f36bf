use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod application;
mod config;
mod content;
mod dom;
mod supabase;
mod theme;
mod timeline;
mod pages {
    pub mod home;
}
mod components {
    pub mod contact;
    pub mod faq;
    pub mod header;
    pub mod nomination_form;
    pub mod timeline;
}

use components::header::Header;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home applications_open={config::applications_open()} /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let dark = use_state(theme::read_preference);

    {
        let dark = *dark;
        use_effect_with_deps(
            move |dark| {
                theme::apply(*dark);
                || ()
            },
            dark,
        );
    }

    let on_toggle_theme = {
        let dark = dark.clone();
        Callback::from(move |_| dark.set(!*dark))
    };

    html! {
        <BrowserRouter>
            <Header
                dark={*dark}
                {on_toggle_theme}
                applications_open={config::applications_open()}
            />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
