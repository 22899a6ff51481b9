use log::warn;
use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config;
use crate::dom::ViewportObserver;
use crate::state::visibility::{RevealAction, VisibilitySet};

/// Tracks which `data-reveal` elements of `section` have been on screen.
///
/// The observer is (re)registered after each render where `deps` changed and
/// released when the section unmounts.
#[hook]
pub fn use_reveal<D>(section: Anchor, deps: D) -> UseReducerHandle<VisibilitySet>
where
    D: PartialEq + 'static,
{
    let visible = use_reducer(VisibilitySet::new);

    {
        let dispatcher = visible.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_enter = Callback::from(move |ids: Vec<String>| {
                    dispatcher.dispatch(RevealAction::Entered(ids));
                });
                let observer = match ViewportObserver::observe(
                    &section.reveal_selector(),
                    config::REVEAL_THRESHOLD,
                    on_enter,
                ) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        warn!("reveal disabled for #{}: {}", section.id(), err);
                        None
                    }
                };
                move || drop(observer)
            },
            deps,
        );
    }

    visible
}
