//! Reports command - listing, generation, download and the summary.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::cli::args::{ReportsAction, ReportsArgs};
use crate::commands::forms::ReportForm;
use crate::config::Config;
use crate::domain::SummaryQuery;
use crate::errors::{AppError, AppResult};
use crate::services::{ReportService, Services};
use crate::utils::format;

/// Execute the reports command
pub async fn execute(args: ReportsArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    match args.action {
        ReportsAction::List => list_reports(&services).await,
        ReportsAction::Generate {
            name,
            start_date,
            end_date,
            output,
        } => generate(&services, name, start_date, end_date, output).await,
        ReportsAction::Download { id, output } => {
            let bytes = services.reports().download(id).await?;
            let path = output.unwrap_or_else(|| PathBuf::from(format!("report-{}.xlsx", id)));
            save(&path, &bytes).await?;
            println!("Saved {} bytes to {}.", bytes.len(), path.display());
            Ok(())
        }
        ReportsAction::Summary {
            start_date,
            end_date,
        } => summary(&services, start_date, end_date).await,
    }
}

async fn list_reports(services: &Services) -> AppResult<()> {
    let reports = services.reports().list().await?;
    if reports.is_empty() {
        println!("No reports generated yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                format::date(r.date_generated),
                r.file_url.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    print!(
        "{}",
        format::table(&["ID", "Name", "Generated", "File"], &rows)
    );
    Ok(())
}

async fn generate(
    services: &Services,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    output: Option<PathBuf>,
) -> AppResult<()> {
    let request = ReportForm {
        name,
        start_date,
        end_date,
    }
    .into_payload()?;

    let file_name = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}.xlsx",
            request.report_name.to_lowercase().replace(' ', "-")
        ))
    });
    let bytes = services.reports().generate(request).await?;
    save(&file_name, &bytes).await?;
    println!("Saved {} bytes to {}.", bytes.len(), file_name.display());
    Ok(())
}

async fn summary(
    services: &Services,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> AppResult<()> {
    let rows = services
        .reports()
        .transaction_summary(SummaryQuery {
            start_date,
            end_date,
        })
        .await?;

    if rows.is_empty() {
        println!("No transactions in the requested range.");
        return Ok(());
    }

    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.school_name.clone(),
                format::money(r.total_contributions),
                format::money(r.total_distributed),
                format::money(r.balance),
            ]
        })
        .collect();
    print!(
        "{}",
        format::table(
            &["School", "Contributions", "Distributed", "Balance"],
            &table_rows,
        )
    );
    Ok(())
}

async fn save(path: &Path, bytes: &[u8]) -> AppResult<()> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| AppError::internal(format!("Writing {}: {}", path.display(), e)))
}
