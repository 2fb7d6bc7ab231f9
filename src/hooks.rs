use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;
use yew_hooks::prelude::{use_window_scroll, use_window_size};

use crate::motion::scroll_progress;
use crate::tracker::{scroll_offset_from, ViewportInteractionTracker};

/// A DOM listener that is removed again when dropped.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl EventSubscription {
    pub fn new(
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn Fn(Event)>,
    ) -> Option<Self> {
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self { target, event, callback }),
            Err(err) => {
                log::error!("Failed to listen for {}: {:?}", event, err);
                None
            }
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, err);
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ViewportInteraction {
    pub navbar_visible: bool,
    pub menu_open: bool,
    pub toggle_menu: Callback<MouseEvent>,
    pub close_menu: Callback<MouseEvent>,
}

/// Clicks with no element target count as outside the nav.
fn click_is_inside_nav(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("nav").ok().flatten())
        .is_some()
}

/// Wires a [`ViewportInteractionTracker`] to the window scroll and document
/// click events for as long as the calling component is mounted.
#[hook]
pub fn use_viewport_interaction() -> ViewportInteraction {
    let tracker = use_mut_ref(ViewportInteractionTracker::new);
    let navbar_visible = use_state_eq(|| true);
    let menu_open = use_state_eq(|| false);

    {
        let tracker = tracker.clone();
        let navbar_visible = navbar_visible.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    let source = window.clone();
                    EventSubscription::new(
                        window.into(),
                        "scroll",
                        Closure::new(move |_: Event| {
                            let offset = scroll_offset_from(source.scroll_y().unwrap_or(0.0));
                            let update = tracker.borrow_mut().on_scroll(offset);
                            navbar_visible.set(update.navbar_visible);
                        }),
                    )
                });
                log::debug!("Scroll listener attached: {}", subscription.is_some());
                move || drop(subscription)
            },
            (),
        );
    }

    {
        let tracker = tracker.clone();
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| {
                        EventSubscription::new(
                            document.into(),
                            "click",
                            Closure::new(move |event: Event| {
                                let inside = click_is_inside_nav(&event);
                                let open = tracker.borrow_mut().on_document_click(inside);
                                menu_open.set(open);
                            }),
                        )
                    });
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let tracker = tracker.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let open = tracker.borrow_mut().toggle_menu();
            log::debug!("Mobile menu open: {}", open);
            menu_open.set(open);
        })
    };

    // Leaves the default action alone so anchor links still navigate.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let open = tracker.borrow_mut().close_menu();
            menu_open.set(open);
        })
    };

    ViewportInteraction {
        navbar_visible: *navbar_visible,
        menu_open: *menu_open,
        toggle_menu,
        close_menu,
    }
}

/// Fraction of the page scrolled so far.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let document_height = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);

    scroll_progress(scroll_y, document_height, viewport_height)
}

/// True once `node` has entered the viewport. With `once` the observer is
/// disconnected after the first hit, otherwise the flag follows the element.
#[hook]
pub fn use_in_view(node: NodeRef, once: bool) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, once)| {
                let once = *once;
                let observer = node.cast::<Element>().and_then(|element| {
                    let callback = Closure::<dyn Fn(Array, IntersectionObserver)>::new({
                        let in_view = in_view.clone();
                        move |entries: Array, observer: IntersectionObserver| {
                            let hit = entries
                                .iter()
                                .filter_map(|entry| {
                                    entry.dyn_into::<IntersectionObserverEntry>().ok()
                                })
                                .any(|entry| entry.is_intersecting());
                            if hit {
                                in_view.set(true);
                                if once {
                                    observer.disconnect();
                                }
                            } else if !once {
                                in_view.set(false);
                            }
                        }
                    });

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(0.1));
                    init.set_root_margin("0px 0px -50px 0px");

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, callback))
                        }
                        Err(err) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", err);
                            None
                        }
                    }
                });

                // Without an observer, show the content rather than leave it hidden.
                if observer.is_none() {
                    in_view.set(true);
                }

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, once),
        );
    }

    *in_view
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presence {
    pub mounted: bool,
    /// Closed but still mounted while the exit transition plays.
    pub leaving: bool,
}

/// Keeps an element mounted for `exit_ms` after `open` goes false.
#[hook]
pub fn use_presence(open: bool, exit_ms: u32) -> Presence {
    let mounted = use_state_eq(|| open);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |open| {
                let timeout = if *open {
                    mounted.set(true);
                    None
                } else {
                    Some(Timeout::new(exit_ms, move || mounted.set(false)))
                };
                // Reopening or unmounting cancels a pending exit.
                move || drop(timeout)
            },
            open,
        );
    }

    Presence {
        mounted: *mounted,
        leaving: *mounted && !open,
    }
}
