use log::debug;
use web_sys::Element;
use yew::prelude::*;

use super::web::{intersection_observer_available, WebHost};
use super::{RevealConfig, RevealController};

pub struct UseRevealHandle {
    pub node_ref: NodeRef,
    pub shown: bool,
}

impl UseRevealHandle {
    /// Tailwind classes for the fade-up transition.
    pub fn motion_classes(&self) -> &'static str {
        if self.shown {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-4"
        }
    }
}

/// Attach `node_ref` to the element that should fade in. `shown` flips to
/// true once, when the element scrolls into view or the fallback delay runs
/// out.
#[hook]
pub fn use_reveal_on_view(config: RevealConfig) -> UseRevealHandle {
    let node_ref = use_node_ref();
    // without IntersectionObserver there is nothing to wait for
    let shown = use_state(|| !intersection_observer_available());

    {
        let node_ref = node_ref.clone();
        let set_shown = shown.setter();
        use_effect_with_deps(
            move |config: &RevealConfig| {
                let controller = RevealController::new(WebHost::new());
                let target = node_ref.cast::<Element>();
                let subscription =
                    controller.subscribe(target.as_ref(), config.clone(), move || {
                        set_shown.set(true)
                    });
                move || {
                    debug!(
                        "reveal teardown in state {:?}",
                        controller.current_state(&subscription)
                    );
                    controller.unsubscribe(&subscription);
                }
            },
            config,
        );
    }

    UseRevealHandle {
        node_ref,
        shown: *shown,
    }
}
