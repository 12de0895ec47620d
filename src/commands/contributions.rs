//! Contributions command - list, record and the payment sandbox.

use crate::api::ContributionApi;
use crate::cli::args::{ContributionAddArgs, ContributionsAction, ContributionsArgs, ListArgs};
use crate::commands::{build_query, forms::ContributionForm};
use crate::config::Config;
use crate::domain::Contribution;
use crate::errors::AppResult;
use crate::services::Services;
use crate::utils::format;

/// Execute the contributions command
pub async fn execute(args: ContributionsArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    match args.action {
        ContributionsAction::List(list) => list_contributions(&services, list).await,
        ContributionsAction::Add(add) => {
            let contributions = services.contributions();
            let contribution = contributions.create(payload(add)?).await?;
            println!(
                "Recorded contribution of {} from {}.",
                format::money(contribution.amount),
                contribution.display_name()
            );
            Ok(())
        }
        ContributionsAction::Simulate(add) => {
            let contributions = services.contributions();
            let contribution = contributions.simulate_payment(payload(add)?).await?;
            println!(
                "Simulated {} payment of {} from {}.",
                contribution.payment_method.label(),
                format::money(contribution.amount),
                contribution.display_name()
            );
            Ok(())
        }
    }
}

fn payload(args: ContributionAddArgs) -> AppResult<crate::domain::CreateContribution> {
    ContributionForm {
        contributor_name: args.name,
        amount: args.amount,
        payment_method: args.method,
    }
    .into_payload()
}

async fn list_contributions(services: &Services, args: ListArgs) -> AppResult<()> {
    let query = build_query(args, Contribution::filter_fields())?;
    let contributions_api = services.contributions();
    let contributions = contributions_api.list().await?;
    let page = Contribution::query_engine().page(&contributions, &query);

    if page.meta.total == 0 {
        println!("No contributions found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.display_name().to_string(),
                format::money(c.amount),
                c.payment_method.label().to_string(),
                format::date(c.timestamp),
            ]
        })
        .collect();
    print!(
        "{}",
        format::table(&["ID", "Contributor", "Amount", "Method", "Date"], &rows)
    );
    println!("{}", format::page_footer(&page.meta));
    Ok(())
}
