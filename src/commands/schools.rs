//! Schools command - list, register and lifecycle transitions.

use crate::cli::args::{ListArgs, SchoolsAction, SchoolsArgs};
use crate::commands::{build_query, forms::SchoolForm};
use crate::config::Config;
use crate::domain::School;
use crate::errors::AppResult;
use crate::services::{SchoolService, Services};
use crate::utils::format;

/// Execute the schools command
pub async fn execute(args: SchoolsArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    match args.action {
        SchoolsAction::List(list) => list_schools(&services, list).await,
        SchoolsAction::Create {
            name,
            district,
            sector,
        } => {
            let payload = SchoolForm {
                name,
                district,
                sector,
            }
            .into_payload()?;
            let school = services.schools().create(payload).await?;
            println!(
                "Registered school {} in {} / {} (id {}).",
                school.name, school.district, school.sector, school.id
            );
            Ok(())
        }
        SchoolsAction::Delete { id, reason } => {
            services.schools().mark_pending_delete(id, &reason).await?;
            println!("School {} marked for deletion.", id);
            Ok(())
        }
        SchoolsAction::Recover { id } => {
            services.schools().recover(id).await?;
            println!("School {} recovered.", id);
            Ok(())
        }
        SchoolsAction::Confirm { id } => {
            services.schools().confirm_delete(id).await?;
            println!("School {} deleted permanently.", id);
            Ok(())
        }
    }
}

async fn list_schools(services: &Services, args: ListArgs) -> AppResult<()> {
    let query = build_query(args, School::filter_fields())?;
    let schools = services.schools().list().await?;
    let page = School::query_engine().page(&schools, &query);

    if page.meta.total == 0 {
        println!("No schools found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.clone(),
                s.district.clone(),
                s.sector.clone(),
                format::money(s.total_received),
                s.lifecycle.status().to_string(),
            ]
        })
        .collect();
    print!(
        "{}",
        format::table(
            &["ID", "Name", "District", "Sector", "Received", "Status"],
            &rows,
        )
    );
    println!("{}", format::page_footer(&page.meta));
    Ok(())
}
