//! Distributions command - list, allocate and lifecycle transitions.

use crate::cli::args::{DistributionsAction, DistributionsArgs, ListArgs};
use crate::commands::{build_query, forms::DistributionForm};
use crate::config::Config;
use crate::domain::Distribution;
use crate::errors::AppResult;
use crate::services::{DistributionService, Services};
use crate::utils::format;

/// Execute the distributions command
pub async fn execute(args: DistributionsArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    match args.action {
        DistributionsAction::List(list) => list_distributions(&services, list).await,
        DistributionsAction::New { school, amount } => {
            let payload = DistributionForm { school, amount }.into_payload()?;
            let distribution = services.distributions().distribute(payload).await?;
            println!(
                "Distributed {} to {} (id {}).",
                format::money(distribution.amount),
                distribution.school_name,
                distribution.id
            );
            Ok(())
        }
        DistributionsAction::Delete { id, reason } => {
            services
                .distributions()
                .mark_pending_delete(id, &reason)
                .await?;
            println!("Distribution {} marked for deletion.", id);
            Ok(())
        }
        DistributionsAction::Recover { id } => {
            services.distributions().recover(id).await?;
            println!("Distribution {} recovered.", id);
            Ok(())
        }
        DistributionsAction::Confirm { id } => {
            services.distributions().confirm_delete(id).await?;
            println!("Distribution {} deleted permanently.", id);
            Ok(())
        }
    }
}

async fn list_distributions(services: &Services, args: ListArgs) -> AppResult<()> {
    let query = build_query(args, Distribution::filter_fields())?;
    let distributions = services.distributions().list().await?;
    let page = Distribution::query_engine().page(&distributions, &query);

    if page.meta.total == 0 {
        println!("No distributions found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.school_name.clone(),
                format::money(d.amount),
                format::date(d.distributed_on),
                d.lifecycle.status().to_string(),
            ]
        })
        .collect();
    print!(
        "{}",
        format::table(&["ID", "School", "Amount", "Date", "Status"], &rows)
    );
    println!("{}", format::page_footer(&page.meta));
    Ok(())
}
