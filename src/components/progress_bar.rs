use yew::prelude::*;

use crate::hooks::use_scroll_progress;

/// Thin bar across the top of the viewport that fills as the page scrolls.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_scroll_progress();

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", progress * 100.0)}
            style={format!("transform: scaleX({:.4});", progress)}
        >
            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    z-index: 50;
                    transform-origin: 0 50%;
                    background: linear-gradient(to right, #3b82f6, #a855f7);
                }
                "#}
            </style>
        </div>
    }
}
