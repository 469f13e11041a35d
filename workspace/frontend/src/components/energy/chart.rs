use ::common::{month_labels, BeforeAfterEnergyUsage};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn purge(div_id: &str);
}

#[derive(Properties, PartialEq)]
pub struct EnergyComparisonChartProps {
    pub data: BeforeAfterEnergyUsage,
}

#[function_component(EnergyComparisonChart)]
pub fn energy_comparison_chart(props: &EnergyComparisonChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.data.clone()),
        move |(chart_ref, data)| {
            let mut drawn_div_id = None;

            if let Some(element) = chart_ref.cast::<Element>() {
                let series = data.comparison_series();
                let labels = month_labels();

                let traces = serde_json::json!([
                    {
                        "x": labels,
                        "y": series.baseline,
                        "type": "scatter",
                        "mode": "lines",
                        "line": {"color": "#ef4444"},
                        "name": "baseline"
                    },
                    {
                        "x": labels,
                        "y": series.improved,
                        "type": "scatter",
                        "mode": "lines",
                        "line": {"color": "#22c55e"},
                        "name": "improved"
                    }
                ]);

                let layout = serde_json::json!({
                    "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"title": "Month", "dtick": 1, "showgrid": false},
                    "yaxis": {"title": "Energy (kWh)", "showgrid": true, "gridcolor": "#eee"},
                    "showlegend": true,
                    "legend": {"orientation": "h", "y": -0.2}
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                if !div_id.is_empty() {
                    newPlot(
                        &div_id,
                        serde_wasm_bindgen::to_value(&traces).unwrap(),
                        serde_wasm_bindgen::to_value(&layout).unwrap(),
                        serde_wasm_bindgen::to_value(&config).unwrap(),
                    );
                    drawn_div_id = Some(div_id);
                }
            }

            // Tear the plot down on unmount or redraw so remounting the
            // component never stacks chart instances on the same element.
            move || {
                if let Some(div_id) = drawn_div_id {
                    purge(&div_id);
                }
            }
        },
    );

    html! {
        <div ref={chart_ref} id="energy_comparison" class="chart-container" style="height: 300px;"></div>
    }
}
