use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod hooks;
pub mod motion;
pub mod tracker;

pub mod components {
    pub mod contact;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod progress_bar;
    pub mod reveal;
}

pub mod pages {
    pub mod home;
}

use components::{navbar::Navbar, progress_bar::ScrollProgressBar};
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
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="app">
                <ScrollProgressBar />
                <Navbar />
                <Switch<Route> render={switch} />
            </div>
            <style>
                {r#"
                html { scroll-behavior: smooth; }

                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .app {
                    min-height: 100vh;
                    color: #fff;
                    background: linear-gradient(to bottom right, #312e81, #581c87, #831843);
                }

                .section-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-title {
                    font-size: 3rem;
                    font-weight: 700;
                    text-align: center;
                    margin: 0 0 4rem;
                }

                .gradient-text {
                    background: linear-gradient(to right, #c084fc, #f472b6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                @media (max-width: 768px) {
                    .section-container { padding: 0 1rem; }
                    .section-title { font-size: 2.25rem; margin-bottom: 2rem; }
                }

                @media (prefers-reduced-motion: reduce) {
                    *, *::before, *::after {
                        animation-duration: 1ms !important;
                        animation-iteration-count: 1 !important;
                        transition-duration: 1ms !important;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}
