use stylist::css;
use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::motion::{Transition, REVEAL};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(REVEAL)]
    pub transition: Transition,
    #[prop_or_default]
    pub offset_x: i32,
    #[prop_or(50)]
    pub offset_y: i32,
    #[prop_or(1.0)]
    pub from_scale: f64,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), true);

    let motion = css!(
        r#"
            transition: ${transition};
            &.reveal--hidden {
                opacity: 0;
                transform: ${hidden};
            }
        "#,
        transition = props.transition.transition_css(&["opacity", "transform"]),
        hidden = format!(
            "translate({}px, {}px) scale({})",
            props.offset_x, props.offset_y, props.from_scale
        )
    );

    html! {
        <div
            ref={node}
            class={classes!(motion, props.class.clone(), (!visible).then_some("reveal--hidden"))}
        >
            { for props.children.iter() }
        </div>
    }
}
