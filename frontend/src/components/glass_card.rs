use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Largest rotation, in degrees, a tilting card leans toward the pointer.
const MAX_TILT_DEG: f64 = 7.0;

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)` inside a card
/// of `width` × `height`, both measured from the card's top-left corner.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x_pct = (x / width - 0.5).clamp(-0.5, 0.5);
    let y_pct = (y / height - 0.5).clamp(-0.5, 0.5);
    // Top edge leans back, right edge leans away.
    (-y_pct * 2.0 * MAX_TILT_DEG, x_pct * 2.0 * MAX_TILT_DEG)
}

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub tilt: bool,
    #[prop_or(true)]
    pub hover_effect: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let card_ref = use_node_ref();
    let angles = use_state_eq(|| (0.0_f64, 0.0_f64));

    let onmousemove = {
        let card_ref = card_ref.clone();
        let angles = angles.clone();
        let tilt = props.tilt;
        Callback::from(move |e: MouseEvent| {
            if !tilt {
                return;
            }
            let Some(card) = card_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            angles.set(tilt_angles(
                f64::from(e.client_x()) - rect.left(),
                f64::from(e.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            ));
        })
    };

    let onmouseleave = {
        let angles = angles.clone();
        Callback::from(move |_: MouseEvent| angles.set((0.0, 0.0)))
    };

    let onclick = props.onclick.clone().unwrap_or_else(Callback::noop);
    let (rotate_x, rotate_y) = *angles;
    let style = props.tilt.then(|| {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d;",
            rotate_x, rotate_y
        )
    });

    html! {
        <div
            ref={card_ref}
            class={classes!("glass-card", props.hover_effect.then(|| "glass-card-hover"), props.class.clone())}
            {style}
            {onmousemove}
            {onmouseleave}
            {onclick}
        >
            if props.hover_effect {
                <div class="glass-shine" />
            }
            { props.children.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_means_no_tilt() {
        assert_eq!(tilt_angles(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_the_maximum_tilt() {
        assert_eq!(tilt_angles(0.0, 0.0, 200.0, 100.0), (7.0, -7.0));
        assert_eq!(tilt_angles(200.0, 100.0, 200.0, 100.0), (-7.0, 7.0));
    }

    #[test]
    fn outside_or_degenerate_cards_are_bounded() {
        assert_eq!(tilt_angles(-500.0, 900.0, 200.0, 100.0), (-7.0, -7.0));
        assert_eq!(tilt_angles(10.0, 10.0, 0.0, 100.0), (0.0, 0.0));
    }
}
