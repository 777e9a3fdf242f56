use crate::model::WeightTotals;
use crate::util::format_kg;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WeightPanelProps {
    pub totals: WeightTotals,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn WeightPanel(props: &WeightPanelProps) -> Html {
    let side_style = "display:flex; flex-direction:column; align-items:center; min-width:90px;";
    let value_style = "font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;";
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="display:flex; align-items:center; justify-content:center; gap:24px; padding:10px 14px; font-size:14px;">
            <div style={side_style}>
                <span style="opacity:0.7;">{"Left"}</span>
                <span id="left-weight" style={value_style}>{ format_kg(props.totals.left) }</span>
            </div>
            <button id="reset-btn" onclick={reset_cb} style="padding:6px 14px;">{"Reset"}</button>
            <div style={side_style}>
                <span style="opacity:0.7;">{"Right"}</span>
                <span id="right-weight" style={value_style}>{ format_kg(props.totals.right) }</span>
            </div>
        </div>
    }
}
