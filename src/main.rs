use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod dom;
mod hooks;
mod scroll_sync;
mod pages {
    pub mod home;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod products;
    pub mod contact;
    pub mod footer;
}

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
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_section: String,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active_section, on_navigate } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">{content::BRAND}</div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for content::NAV_LINKS.iter().map(|link| {
                            let id = link.id;
                            let onclick = {
                                let menu_open = menu_open.clone();
                                let on_navigate = on_navigate.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    menu_open.set(false);
                                    on_navigate.emit(id);
                                })
                            };
                            html! {
                                <button
                                    key={id}
                                    class={classes!("nav-link", (active_section.as_str() == id).then(|| "active"))}
                                    onclick={onclick}
                                >
                                    {link.label}
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
