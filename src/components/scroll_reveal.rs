use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be on screen before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wraps a content block that starts transparent and slides into place the
/// first time it enters the viewport. The observation is one-shot: after
/// the first trigger the target is unobserved and the block stays visible.
/// The children are always rendered; hiding is class-based styling only,
/// so a missing observer can never leave content permanently hidden.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let visible = use_state(|| false);
    let node_ref = use_node_ref();

    {
        let visible = visible.clone();
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut observation: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(Array, IntersectionObserver)>,
                )> = None;

                if let Some(element) = node_ref.cast::<Element>() {
                    let on_intersect = {
                        let visible = visible.clone();
                        Closure::wrap(Box::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                                    {
                                        if entry.is_intersecting() {
                                            visible.set(true);
                                            observer.unobserve(&entry.target());
                                        }
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(Array, IntersectionObserver)>)
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                    match IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            // Elements already past the threshold get their
                            // entry on the observer's first pass.
                            observer.observe(&element);
                            observation = Some((observer, on_intersect));
                        }
                        Err(_) => {
                            log::warn!("intersection observer unavailable, revealing content");
                            visible.set(true);
                        }
                    }
                } else {
                    log::warn!("reveal wrapper missing its element, revealing content");
                    visible.set(true);
                }

                move || {
                    if let Some((observer, closure)) = observation {
                        observer.disconnect();
                        drop(closure);
                    }
                }
            },
            (),
        );
    }

    let style = format!("transition-delay: {}ms;", props.delay_ms);
    html! {
        <div
            ref={node_ref}
            class={classes!(
                "reveal",
                (*visible).then_some("revealed"),
                props.class.clone()
            )}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
