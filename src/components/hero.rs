use stylist::css;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::hooks::use_scroll_progress;
use crate::motion::{
    interpolate, FLOAT, FLOAT_STAGGER_MS, HERO_BUTTON, HERO_BUTTON_STAGGER_MS, HERO_PULSE,
    HERO_SUBTITLE, HOVER,
};

const HERO_BUTTONS: [&str; 3] = ["Explore", "Learn More", "Get Started"];
const BLOB_COUNT: usize = 5;

/// Content fades out over the first half of the page scroll.
const FADE_RANGE: (f64, f64) = (0.0, 0.5);

#[derive(Clone, Debug, PartialEq)]
struct Blob {
    size: f64,
    left: f64,
    top: f64,
}

impl Blob {
    fn random() -> Self {
        Self {
            size: Math::random() * 100.0 + 50.0,
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {size:.0}px; height: {size:.0}px; left: {left:.2}%; top: {top:.2}%;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingProps {
    pub index: usize,
    #[prop_or_default]
    pub style: String,
    #[prop_or_default]
    pub children: Children,
}

/// Bobs and sways its children forever, offset by `index`.
#[function_component(Floating)]
pub fn floating(props: &FloatingProps) -> Html {
    let motion = css!(
        "animation: ${a};",
        a = FLOAT.stagger(props.index, FLOAT_STAGGER_MS).animation_css("float")
    );

    html! {
        <div class={classes!("floating", motion)} style={props.style.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let progress = use_scroll_progress();
    // Fixed for the lifetime of the mount.
    let blobs = use_state(|| (0..BLOB_COUNT).map(|_| Blob::random()).collect::<Vec<_>>());

    let opacity = interpolate(progress, FADE_RANGE, (1.0, 0.0));
    let scale = interpolate(progress, FADE_RANGE, (1.0, 0.8));

    let pulse = css!("animation: ${a};", a = HERO_PULSE.animation_css("hero-pulse"));
    let subtitle = css!("animation: ${a};", a = HERO_SUBTITLE.animation_css("fade-in"));
    let hover = css!(
        "transition: ${t};",
        t = HOVER.transition_css(&["transform", "box-shadow"])
    );

    let buttons = HERO_BUTTONS.iter().enumerate().map(|(index, label)| {
        let enter = css!(
            "animation: ${a};",
            a = HERO_BUTTON.stagger(index, HERO_BUTTON_STAGGER_MS).animation_css("slide-in-left")
        );
        html! {
            <button key={*label} type="button" class={classes!("hero__button", hover.clone(), enter)}>
                {*label}
            </button>
        }
    });

    html! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <div
                    class="hero__content"
                    style={format!("opacity: {:.3}; transform: scale({:.3});", opacity, scale)}
                >
                    <h2 class={classes!("hero__title", "gradient-text", pulse)}>
                        {"Welcome to the Future"}
                    </h2>
                    <p class={classes!("hero__subtitle", subtitle)}>
                        {"Experience the power of modern web animations"}
                    </p>
                    <div class="hero__actions">
                        { for buttons }
                    </div>
                </div>
            </div>

            <div class="hero__background">
                { for blobs.iter().enumerate().map(|(index, blob)| html! {
                    <Floating {index} style={blob.style()}>
                        <div class="hero__blob"></div>
                    </Floating>
                }) }
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding-top: 6rem;
                    overflow: hidden;
                }

                .hero__inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }

                .hero__content {
                    text-align: center;
                    will-change: opacity, transform;
                }

                .hero__title {
                    font-size: 4.5rem;
                    font-weight: 700;
                    margin: 0 0 2rem;
                }

                .hero__subtitle {
                    font-size: 1.5rem;
                    color: #e9d5ff;
                    margin: 0 0 3rem;
                    padding: 0 1rem;
                }

                .hero__actions {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 0 1rem;
                }

                .hero__button {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(to right, #a855f7, #ec4899);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }

                .hero__button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 20px rgba(167, 139, 250, 0.5);
                }

                .hero__button:active { transform: scale(0.95); }

                .hero__background {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .floating {
                    position: absolute;
                }

                .hero__blob {
                    width: 100%;
                    height: 100%;
                    border-radius: 9999px;
                    opacity: 0.2;
                    background: linear-gradient(to right, #a855f7, #ec4899);
                }

                @keyframes hero-pulse {
                    0% { transform: scale(1) rotate(0deg); }
                    33% { transform: scale(1.05) rotate(5deg); }
                    66% { transform: scale(1.1) rotate(-5deg); }
                    100% { transform: scale(1) rotate(0deg); }
                }

                @keyframes float {
                    0% { transform: translateY(0) rotate(0deg); }
                    33% { transform: translateY(-13px) rotate(5deg); }
                    66% { transform: translateY(-7px) rotate(-5deg); }
                    100% { transform: translateY(0) rotate(0deg); }
                }

                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes slide-in-left {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @media (max-width: 768px) {
                    .hero { padding-top: 4rem; }
                    .hero__inner { padding: 3rem 1rem; }
                    .hero__title { font-size: 3rem; margin-bottom: 1rem; }
                    .hero__subtitle { font-size: 1.125rem; margin-bottom: 2rem; }
                }

                @media (max-width: 640px) {
                    .hero__title { font-size: 2.25rem; }
                    .hero__actions { flex-direction: column; gap: 1rem; }
                    .hero__button { width: 100%; }
                }
                "#}
            </style>
        </section>
    }
}
