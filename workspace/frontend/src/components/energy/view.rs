use ::common::BeforeAfterEnergyUsage;
use yew::prelude::*;

use super::chart::EnergyComparisonChart;
use crate::api_client::energy::get_before_after_energy_usage;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::settings;

/// Page component for the before/after energy comparison.
///
/// Fetches the comparison once on mount for the plan configured in settings
/// and renders the chart when the data arrives. Failures show an error panel
/// with a retry button instead of leaving the chart area blank.
#[function_component(EnergyComparison)]
pub fn energy_comparison() -> Html {
    let plan_uuid = settings::get_settings().plan_uuid;

    let (fetch_state, refetch) = use_fetch_with_refetch(move || {
        let plan_uuid = plan_uuid.clone();
        async move { get_before_after_energy_usage(&plan_uuid).await }
    });

    let render = Callback::from(|data: BeforeAfterEnergyUsage| {
        html! { <EnergyComparisonChart data={data} /> }
    });

    html! {
        <FetchRender<BeforeAfterEnergyUsage>
            state={(*fetch_state).clone()}
            render={render}
            on_retry={Some(refetch)}
            loading_text={Some("Loading energy comparison...".to_string())}
        />
    }
}
