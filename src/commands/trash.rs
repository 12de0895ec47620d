//! Trash command - records whose deletion was confirmed.
//!
//! Confirmed records only leave the trash through an external purge;
//! the console shows them with the reason they were removed.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::{
    parallel, DistributionService, SchoolService, Services, TransferService,
};
use crate::utils::format;

/// Execute the trash command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    let role = services.session().role().ok_or(AppError::Unauthenticated)?;
    services.policy().authorize_review(role)?;

    let transfers_service = services.transfers();
    let schools_service = services.schools();
    let distributions_service = services.distributions();

    let (transfers, schools, distributions) = parallel::join3(
        transfers_service.list_deleted(),
        schools_service.list_deleted(),
        distributions_service.list_deleted(),
    )
    .await?;

    if transfers.is_empty() && schools.is_empty() && distributions.is_empty() {
        println!("Trash is empty.");
        return Ok(());
    }

    if !transfers.is_empty() {
        println!("=== Deleted transfers ===");
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
        println!("=== Deleted schools ===");
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
        println!("=== Deleted distributions ===");
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
