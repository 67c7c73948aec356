use web_sys::{Element, Event, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Offset margin that keeps the arrows from flickering right at the
/// scroll bounds.
const EDGE_MARGIN: f64 = 20.0;
/// Fraction of the visible width covered by one arrow press.
const SCROLL_FRACTION: f64 = 0.8;

/// Arrow visibility derived from the container's live measurements.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct EdgeState {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl EdgeState {
    pub fn measure(offset: f64, content_width: f64, viewport_width: f64) -> Self {
        Self {
            can_scroll_left: offset > EDGE_MARGIN,
            can_scroll_right: offset < content_width - viewport_width - EDGE_MARGIN,
        }
    }
}

/// Distance requested by one arrow press.
pub fn scroll_step(viewport_width: f64) -> f64 {
    viewport_width * SCROLL_FRACTION
}

fn measure_row(row: &Element) -> EdgeState {
    EdgeState::measure(
        row.scroll_left() as f64,
        row.scroll_width() as f64,
        row.client_width() as f64,
    )
}

fn scroll_row(row_ref: &NodeRef, direction: f64) {
    if let Some(row) = row_ref.cast::<Element>() {
        let options = ScrollToOptions::new();
        options.set_left(direction * scroll_step(row.client_width() as f64));
        options.set_behavior(ScrollBehavior::Smooth);
        row.scroll_by_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub children: Children,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let edges = use_state(EdgeState::default);
    let row_ref = use_node_ref();

    // The smooth scroll started by the arrows fires native scroll events,
    // so this handler alone keeps the arrows in sync.
    let onscroll = {
        let edges = edges.clone();
        let row_ref = row_ref.clone();
        Callback::from(move |_: Event| {
            if let Some(row) = row_ref.cast::<Element>() {
                let next = measure_row(&row);
                if next != *edges {
                    edges.set(next);
                }
            }
        })
    };

    // Initial measurement; content narrower than the viewport leaves both
    // arrows hidden from the start.
    {
        let edges = edges.clone();
        let row_ref = row_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(row) = row_ref.cast::<Element>() {
                    edges.set(measure_row(&row));
                }
                || ()
            },
            (),
        );
    }

    let scroll_left = {
        let row_ref = row_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_row(&row_ref, -1.0);
        })
    };

    let scroll_right = {
        let row_ref = row_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_row(&row_ref, 1.0);
        })
    };

    html! {
        <div class="carousel">
            <button
                class={classes!(
                    "carousel-arrow",
                    "carousel-arrow-left",
                    if edges.can_scroll_left { "" } else { "carousel-arrow-hidden" }
                )}
                onclick={scroll_left}
            >
                {"‹"}
            </button>
            <button
                class={classes!(
                    "carousel-arrow",
                    "carousel-arrow-right",
                    if edges.can_scroll_right { "" } else { "carousel-arrow-hidden" }
                )}
                onclick={scroll_right}
            >
                {"›"}
            </button>
            <div class="carousel-row" ref={row_ref} onscroll={onscroll}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_at_boundaries() {
        let at_start = EdgeState::measure(0.0, 1000.0, 400.0);
        assert!(!at_start.can_scroll_left);
        assert!(at_start.can_scroll_right);

        let at_end = EdgeState::measure(600.0, 1000.0, 400.0);
        assert!(at_end.can_scroll_left);
        assert!(!at_end.can_scroll_right);
    }

    #[test]
    fn left_arrow_respects_margin() {
        assert!(EdgeState::measure(30.0, 1000.0, 400.0).can_scroll_left);
        assert!(!EdgeState::measure(10.0, 1000.0, 400.0).can_scroll_left);
    }

    #[test]
    fn narrow_content_hides_both_arrows() {
        let edges = EdgeState::measure(0.0, 300.0, 400.0);
        assert!(!edges.can_scroll_left);
        assert!(!edges.can_scroll_right);
    }

    #[test]
    fn arrow_press_covers_most_of_the_viewport() {
        assert_eq!(scroll_step(500.0), 400.0);
    }
}
