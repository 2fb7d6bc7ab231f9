use stylist::css;
use yew::prelude::*;

use crate::config::{LOGO_MARK, NAV_ITEMS, SITE_NAME};
use crate::hooks::{use_presence, use_viewport_interaction, ViewportInteraction};
use crate::motion::{
    DRAWER, DRAWER_CONTENT, HOVER, LINK_ENTER, LINK_STAGGER_MS, LOGO_SPIN, MENU_ICON, NAVBAR_SLIDE,
};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let ViewportInteraction {
        navbar_visible,
        menu_open,
        toggle_menu,
        close_menu,
    } = use_viewport_interaction();
    let drawer = use_presence(menu_open, DRAWER.duration_ms);

    // Slides in once on mount, then follows `navbar_visible`.
    let slide = css!(
        "transition: ${t}; animation: ${a};",
        t = NAVBAR_SLIDE.transition_css(&["transform"]),
        a = NAVBAR_SLIDE.animation_css("nav-slide-in")
    );
    let icon = css!(
        "transition: ${t};",
        t = MENU_ICON.transition_css(&["transform", "opacity"])
    );
    let logo = css!(
        "transition: ${t};",
        t = LOGO_SPIN.transition_css(&["transform"])
    );
    let hover = css!(
        "transition: ${t};",
        t = HOVER.transition_css(&["transform", "background-color", "color", "box-shadow"])
    );
    let drawer_motion = css!(
        r#"
            animation: ${enter};
            &.mobile-drawer--leaving {
                animation: ${leave};
            }
        "#,
        enter = DRAWER.animation_css("drawer-in"),
        leave = DRAWER.exit_animation_css("drawer-out")
    );
    let drawer_content = css!(
        "animation: ${a};",
        a = DRAWER_CONTENT.animation_css("slide-down")
    );

    let desktop_links = NAV_ITEMS.iter().enumerate().map(|(index, item)| {
        let enter = css!(
            "animation: ${a};",
            a = LINK_ENTER.stagger(index, LINK_STAGGER_MS).animation_css("slide-down")
        );
        html! {
            <a key={item.anchor} href={item.href()} class={classes!("nav-link", hover.clone(), enter)}>
                {item.label}
                <span class="nav-link__underline"></span>
            </a>
        }
    });

    let drawer_links = NAV_ITEMS.iter().enumerate().map(|(index, item)| {
        let enter = css!(
            "animation: ${a};",
            a = LINK_ENTER.stagger(index, LINK_STAGGER_MS).animation_css("slide-right")
        );
        html! {
            <a
                key={item.anchor}
                href={item.href()}
                class={classes!("drawer-link", hover.clone(), enter)}
                onclick={close_menu.clone()}
            >
                <span class="drawer-link__label">{item.label}</span>
                <span class="drawer-link__sweep"></span>
            </a>
        }
    });

    html! {
        <nav class={classes!("top-nav", slide, (!navbar_visible).then_some("top-nav--hidden"))}>
            <div class="nav-content">
                <a href="#home" class={classes!("nav-logo", hover.clone())}>
                    <span class={classes!("nav-logo__mark", logo)}>{LOGO_MARK}</span>
                    <h1 class="nav-logo__title gradient-text">{SITE_NAME}</h1>
                </a>

                <div class="nav-links">
                    { for desktop_links }
                    <button type="button" class={classes!("nav-cta", hover.clone())}>
                        {"Get Started"}
                    </button>
                </div>

                <button
                    type="button"
                    class={classes!("burger-menu", menu_open.then_some("burger-menu--open"))}
                    aria-label="Toggle navigation"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span class={classes!("burger-line", "burger-line--top", icon.clone())}></span>
                    <span class={classes!("burger-line", "burger-line--middle", icon.clone())}></span>
                    <span class={classes!("burger-line", "burger-line--bottom", icon)}></span>
                </button>
            </div>

            if drawer.mounted {
                <div class={classes!(
                    "mobile-drawer",
                    drawer_motion,
                    drawer.leaving.then_some("mobile-drawer--leaving")
                )}>
                    <div class={classes!("mobile-drawer__content", drawer_content)}>
                        { for drawer_links }
                        <button type="button" class={classes!("drawer-cta", hover.clone())} onclick={close_menu.clone()}>
                            {"Get Started"}
                        </button>
                    </div>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 40;
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(16px);
                    transform: translateY(0);
                }

                .top-nav--hidden {
                    transform: translateY(-100px);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: inherit;
                    text-decoration: none;
                }

                .nav-logo:hover { transform: scale(1.05); }
                .nav-logo:active { transform: scale(0.95); }

                .nav-logo__mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(to right, #a855f7, #ec4899);
                }

                .nav-logo__mark:hover { transform: rotate(360deg); }

                .nav-logo__title {
                    font-size: 1.75rem;
                    font-weight: 700;
                    margin: 0;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .nav-link {
                    position: relative;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    color: rgba(255, 255, 255, 0.9);
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: #fff;
                    background-color: rgba(255, 255, 255, 0.1);
                    transform: scale(1.05);
                }

                .nav-link:active { transform: scale(0.95); }

                .nav-link__underline {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 2px;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #a855f7, #ec4899);
                    transform: scaleX(0);
                    transition: transform 0.2s ease-out;
                }

                .nav-link:hover .nav-link__underline { transform: scaleX(1); }

                .nav-cta, .drawer-cta {
                    border: none;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    border-radius: 0.5rem;
                    background: linear-gradient(to right, #a855f7, #ec4899);
                }

                .nav-cta {
                    margin-left: 0.5rem;
                    padding: 0.5rem 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }

                .nav-cta:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 20px rgba(167, 139, 250, 0.3);
                }

                .nav-cta:active { transform: scale(0.95); }

                .burger-menu {
                    display: none;
                    position: relative;
                    width: 2.5rem;
                    height: 2.5rem;
                    border: none;
                    background: transparent;
                    cursor: pointer;
                }

                .burger-menu:active { transform: scale(0.9); }

                .burger-line {
                    position: absolute;
                    left: 0.5rem;
                    width: 1.5rem;
                    height: 2px;
                    background: #fff;
                }

                .burger-line--top { transform: translateY(-4px); }
                .burger-line--bottom { transform: translateY(4px); }
                .burger-menu--open .burger-line--top { transform: rotate(45deg); }
                .burger-menu--open .burger-line--middle { opacity: 0; }
                .burger-menu--open .burger-line--bottom { transform: rotate(-45deg); }

                .mobile-drawer {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    overflow: hidden;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(16px);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }

                .mobile-drawer__content {
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }

                .drawer-link {
                    position: relative;
                    overflow: hidden;
                    display: block;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    font-size: 1.125rem;
                    color: #fff;
                    text-decoration: none;
                }

                .drawer-link:hover {
                    transform: translateX(10px);
                    background-color: rgba(255, 255, 255, 0.1);
                }

                .drawer-link__label {
                    position: relative;
                    z-index: 1;
                }

                .drawer-link__sweep {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
                    transform: translateX(-100%);
                    transition: transform 0.3s ease-out;
                }

                .drawer-link:hover .drawer-link__sweep { transform: translateX(0); }

                .drawer-cta {
                    width: 100%;
                    margin-top: 1rem;
                    padding: 0.75rem 1rem;
                    font-size: 1.125rem;
                }

                .drawer-cta:hover { transform: scale(1.02); }
                .drawer-cta:active { transform: scale(0.98); }

                @keyframes nav-slide-in {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }

                @keyframes slide-down {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes slide-right {
                    from { opacity: 0; transform: translateX(-20px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes drawer-in {
                    from { max-height: 0; opacity: 0; }
                    to { max-height: 100vh; opacity: 1; }
                }

                @keyframes drawer-out {
                    from { max-height: 100vh; opacity: 1; }
                    to { max-height: 0; opacity: 0; }
                }

                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                }

                @media (min-width: 769px) {
                    .mobile-drawer { display: none; }
                }

                @media (max-width: 640px) {
                    .nav-logo__title { display: none; }
                    .nav-logo__mark { width: 2rem; height: 2rem; font-size: 1.25rem; }
                }
                "#}
            </style>
        </nav>
    }
}
