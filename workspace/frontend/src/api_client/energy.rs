use ::common::BeforeAfterEnergyUsage;

use crate::api_client;

/// Fetch the before/after energy usage comparison for a retrofit plan.
pub async fn get_before_after_energy_usage(
    plan_uuid: &str,
) -> Result<BeforeAfterEnergyUsage, String> {
    log::trace!("Fetching before/after energy usage for plan {}", plan_uuid);
    let result = api_client::get::<BeforeAfterEnergyUsage>(&format!(
        "/before_after_energy_usage/{}",
        plan_uuid
    ))
    .await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch energy comparison: {}", e);
    } else {
        log::info!("Successfully fetched energy comparison for plan {}", plan_uuid);
    }

    result
}
