use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom;
use crate::scroll_sync::{NavAction, NavigationState};

fn sync_active_section(dispatcher: &UseReducerDispatcher<NavigationState>, section_ids: &[&str]) {
    match dom::viewport() {
        Ok(viewport) => dispatcher.dispatch(NavAction::Scrolled {
            sections: dom::measure_sections(section_ids),
            scroll_top: viewport.scroll_top,
            viewport_height: viewport.height,
        }),
        Err(e) => warn!("Could not read viewport: {:?}", e),
    }
}

/// Tracks which of `section_ids` is in view. The scroll listener lives exactly
/// as long as the calling component.
#[hook]
pub fn use_scroll_sync(section_ids: &'static [&'static str]) -> UseReducerHandle<NavigationState> {
    let navigation = use_reducer_eq(NavigationState::default);

    {
        let dispatcher = navigation.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let dispatcher = dispatcher.clone();
                    move || sync_active_section(&dispatcher, section_ids)
                });

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to register scroll listener: {:?}", e);
                    }
                }

                // Initial check for pages restored mid-scroll
                sync_active_section(&dispatcher, section_ids);

                move || {
                    if let Some(window) = window {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Failed to remove scroll listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    navigation
}
