//! Review command - records awaiting deletion approval.
//!
//! Pulls the pending records of all three soft-deletable kinds so a
//! super-admin can decide each one with the matching `recover` or
//! `confirm` subcommand.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::{
    parallel, DistributionService, SchoolService, Services, TransferService,
};
use crate::utils::format;

/// Execute the review command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    let role = services.session().role().ok_or(AppError::Unauthenticated)?;
    services.policy().authorize_review(role)?;

    let transfers_service = services.transfers();
    let schools_service = services.schools();
    let distributions_service = services.distributions();

    let (transfers, schools, distributions) = parallel::join3(
        transfers_service.list_pending(),
        schools_service.list_pending(),
        distributions_service.list_pending(),
    )
    .await?;

    if transfers.is_empty() && schools.is_empty() && distributions.is_empty() {
        println!("Nothing awaiting deletion approval.");
        return Ok(());
    }

    if !transfers.is_empty() {
        println!("=== Transfers pending deletion ===");
        let rows: Vec<Vec<String>> = transfers
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.donor.clone(),
                    format::money(t.amount),
                    t.lifecycle.reason().unwrap_or("-").to_string(),
                ]
            })
            .collect();
        print!("{}", format::table(&["ID", "Donor", "Amount", "Reason"], &rows));
    }

    if !schools.is_empty() {
        println!("=== Schools pending deletion ===");
        let rows: Vec<Vec<String>> = schools
            .iter()
            .map(|s| {
                vec![
                    s.id.to_string(),
                    s.name.clone(),
                    s.district.clone(),
                    s.lifecycle.reason().unwrap_or("-").to_string(),
                ]
            })
            .collect();
        print!("{}", format::table(&["ID", "Name", "District", "Reason"], &rows));
    }

    if !distributions.is_empty() {
        println!("=== Distributions pending deletion ===");
        let rows: Vec<Vec<String>> = distributions
            .iter()
            .map(|d| {
                vec![
                    d.id.to_string(),
                    d.school_name.clone(),
                    format::money(d.amount),
                    d.lifecycle.reason().unwrap_or("-").to_string(),
                ]
            })
            .collect();
        print!("{}", format::table(&["ID", "School", "Amount", "Reason"], &rows));
    }

    Ok(())
}
