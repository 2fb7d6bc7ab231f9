#![cfg(target_arch = "wasm32")]

use awesome_animations::components::navbar::Navbar;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};
use yew::AppHandle;

wasm_bindgen_test_configure!(run_in_browser);

fn mount() -> (AppHandle<Navbar>, Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let handle = yew::Renderer::<Navbar>::with_root(root.clone()).render();
    (handle, root)
}

fn unmount(handle: AppHandle<Navbar>, root: Element) {
    handle.destroy();
    root.remove();
}

async fn settle(ms: u32) {
    TimeoutFuture::new(ms).await;
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn has(root: &Element, selector: &str) -> bool {
    root.query_selector(selector).unwrap().is_some()
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Makes the page tall enough to scroll and returns the filler element.
fn tall_page() -> Element {
    let filler = document().create_element("div").unwrap();
    filler.set_attribute("style", "height: 5000px;").unwrap();
    document().body().unwrap().append_child(&filler).unwrap();
    filler
}

async fn scroll_to(offset: f64) {
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, offset);
    settle(100).await;
}

#[wasm_bindgen_test]
async fn starts_visible_with_drawer_closed() {
    let (handle, root) = mount();
    settle(10).await;

    assert!(has(&root, "nav.top-nav"));
    assert!(!has(&root, ".top-nav--hidden"));
    assert!(!has(&root, ".mobile-drawer"));
    assert_eq!(root.query_selector_all(".nav-link").unwrap().length(), 4);

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn burger_toggles_drawer() {
    let (handle, root) = mount();
    settle(10).await;

    click(&root, ".burger-menu");
    settle(10).await;
    assert!(has(&root, ".burger-menu--open"));
    assert!(has(&root, ".mobile-drawer"));

    click(&root, ".burger-menu");
    settle(10).await;
    assert!(!has(&root, ".burger-menu--open"));
    assert!(has(&root, ".mobile-drawer--leaving"));

    settle(400).await;
    assert!(!has(&root, ".mobile-drawer"));

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn click_inside_nav_keeps_drawer_open() {
    let (handle, root) = mount();
    settle(10).await;

    click(&root, ".burger-menu");
    settle(10).await;
    click(&root, ".nav-content");
    settle(10).await;

    assert!(has(&root, ".burger-menu--open"));

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn click_outside_nav_closes_drawer() {
    let (handle, root) = mount();
    settle(10).await;

    click(&root, ".burger-menu");
    settle(10).await;
    web_sys::window().unwrap().document().unwrap().body().unwrap().click();
    settle(10).await;

    assert!(!has(&root, ".burger-menu--open"));
    settle(400).await;
    assert!(!has(&root, ".mobile-drawer"));

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn drawer_actions_close_drawer() {
    let (handle, root) = mount();
    settle(10).await;

    click(&root, ".burger-menu");
    settle(10).await;
    click(&root, ".drawer-cta");
    settle(10).await;

    assert!(!has(&root, ".burger-menu--open"));

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn reopening_cancels_pending_exit() {
    let (handle, root) = mount();
    settle(10).await;

    click(&root, ".burger-menu");
    settle(10).await;
    click(&root, ".burger-menu");
    settle(50).await;
    click(&root, ".burger-menu");
    settle(400).await;

    assert!(has(&root, ".mobile-drawer"));
    assert!(!has(&root, ".mobile-drawer--leaving"));

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn slides_in_on_mount() {
    let (handle, root) = mount();
    settle(10).await;

    let nav = root.query_selector("nav.top-nav").unwrap().unwrap();
    let style = web_sys::window()
        .unwrap()
        .get_computed_style(&nav)
        .unwrap()
        .unwrap();
    assert_eq!(
        style.get_property_value("animation-name").unwrap(),
        "nav-slide-in"
    );

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn scrolling_down_hides_and_up_reveals() {
    let filler = tall_page();
    let (handle, root) = mount();
    settle(10).await;

    scroll_to(600.0).await;
    assert!(has(&root, ".top-nav--hidden"));

    scroll_to(900.0).await;
    assert!(has(&root, ".top-nav--hidden"));

    scroll_to(300.0).await;
    assert!(!has(&root, ".top-nav--hidden"));

    scroll_to(800.0).await;
    assert!(has(&root, ".top-nav--hidden"));

    scroll_to(0.0).await;
    assert!(!has(&root, ".top-nav--hidden"));

    unmount(handle, root);
    filler.remove();
}

#[wasm_bindgen_test]
async fn click_without_element_target_closes_drawer() {
    let (handle, root) = mount();
    settle(10).await;

    click(&root, ".burger-menu");
    settle(10).await;
    assert!(has(&root, ".burger-menu--open"));

    // Targets the document node itself, which is not an element.
    document()
        .dispatch_event(&Event::new("click").unwrap())
        .unwrap();
    settle(10).await;

    assert!(!has(&root, ".burger-menu--open"));

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn listeners_are_released_on_unmount() {
    let filler = tall_page();
    let (handle, root) = mount();
    settle(10).await;

    click(&root, ".burger-menu");
    settle(10).await;
    handle.destroy();
    settle(10).await;
    assert_eq!(root.child_element_count(), 0);

    // A listener left behind would invoke a dropped closure and throw here.
    document().body().unwrap().click();
    document()
        .dispatch_event(&Event::new("click").unwrap())
        .unwrap();
    scroll_to(700.0).await;
    scroll_to(0.0).await;
    assert_eq!(root.child_element_count(), 0);

    // A fresh mount starts from its own state.
    let (handle, fresh) = mount();
    settle(10).await;
    assert!(!has(&fresh, ".burger-menu--open"));
    assert!(!has(&fresh, ".top-nav--hidden"));

    unmount(handle, fresh);
    root.remove();
    filler.remove();
}
