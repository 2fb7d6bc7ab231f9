use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::SITE_NAME;

pub fn copyright_line(year: i32) -> String {
    format!("{} {}. All rights reserved.", year, SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <Reveal offset_y={0}>
                <p>{copyright_line(year)}</p>
            </Reveal>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem;
                    text-align: center;
                    background: rgba(0, 0, 0, 0.3);
                }

                .site-footer p { margin: 0; }
                "#}
            </style>
        </footer>
    }
}
