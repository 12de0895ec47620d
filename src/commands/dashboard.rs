//! Dashboard command - program totals at a glance.
//!
//! The three source collections are independent, so they are fetched
//! concurrently.

use crate::api::ContributionApi;
use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{
    parallel, AuthService, DistributionService, SchoolService, Services,
};
use crate::utils::format;

/// Execute the dashboard command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    services.auth().require_user()?;

    let contributions_api = services.contributions();
    let schools_service = services.schools();
    let distributions_service = services.distributions();

    let (contributions, schools, distributions) = parallel::join3(
        contributions_api.list(),
        schools_service.list(),
        distributions_service.list(),
    )
    .await?;

    let total_contributed: f64 = contributions.iter().map(|c| c.amount).sum();
    let total_distributed: f64 = distributions.iter().map(|d| d.amount).sum();
    let active_schools = schools
        .iter()
        .filter(|s| s.lifecycle.status().is_active())
        .count();

    println!("=== Dusangire Lunch Dashboard ===");
    println!("Total contributions: {}", format::money(total_contributed));
    println!("Schools served:      {}", active_schools);
    println!("Total distributed:   {}", format::money(total_distributed));
    println!("=================================");

    Ok(())
}
