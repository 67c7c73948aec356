use yew::prelude::*;

/// Repeats the items three times so the looping track can jump from its
/// halfway translation back to zero without a visible seam.
pub fn tripled<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().cloned().cycle().take(items.len() * 3).collect()
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub children: Children,
}

/// Continuously scrolling horizontal strip. Unlike the carousel this is a
/// purely declarative CSS loop with no scroll state and no arrows; the
/// track pauses while the pointer hovers it.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let items = tripled(&props.children.iter().collect::<Vec<_>>());

    html! {
        <div class="marquee">
            <div class="marquee-fade marquee-fade-left"></div>
            <div class="marquee-fade marquee-fade-right"></div>
            <div class="marquee-track">
                { for items }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triples_the_list() {
        let items = tripled(&["a", "b", "c"]);
        assert_eq!(items.len(), 9);
    }

    #[test]
    fn copies_line_up_one_list_apart() {
        let original = ["a", "b", "c"];
        let items = tripled(&original);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(*item, items[(i + original.len()) % items.len()]);
        }
    }

    #[test]
    fn empty_list_stays_empty() {
        let items: Vec<u8> = tripled(&[]);
        assert!(items.is_empty());
    }
}
