//! Transfers command - list, record, upload and lifecycle transitions.

use std::path::PathBuf;

use crate::cli::args::{ListArgs, TransferCreateArgs, TransfersAction, TransfersArgs};
use crate::commands::{build_query, forms::TransferForm};
use crate::config::Config;
use crate::domain::Transfer;
use crate::errors::{AppError, AppResult};
use crate::services::{Services, TransferService};
use crate::utils::format;

/// Execute the transfers command
pub async fn execute(args: TransfersArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    match args.action {
        TransfersAction::List(list) => list_transfers(&services, list).await,
        TransfersAction::Create(create) => create_transfer(&services, create).await,
        TransfersAction::Upload { file } => upload_batch(&services, file).await,
        TransfersAction::Delete { id, reason } => {
            services.transfers().mark_pending_delete(id, &reason).await?;
            println!("Transfer {} marked for deletion.", id);
            Ok(())
        }
        TransfersAction::Recover { id } => {
            services.transfers().recover(id).await?;
            println!("Transfer {} recovered.", id);
            Ok(())
        }
        TransfersAction::Confirm { id } => {
            services.transfers().confirm_delete(id).await?;
            println!("Transfer {} deleted permanently.", id);
            Ok(())
        }
    }
}

async fn list_transfers(services: &Services, args: ListArgs) -> AppResult<()> {
    let query = build_query(args, Transfer::filter_fields())?;
    let transfers = services.transfers().list().await?;
    let page = Transfer::query_engine().page(&transfers, &query);

    if page.meta.total == 0 {
        println!("No transfers found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.school_code.clone(),
                t.donor.clone(),
                format::money(t.amount),
                t.school_names(),
                t.number_of_transactions.to_string(),
                format::date(t.timestamp),
                t.lifecycle.status().to_string(),
            ]
        })
        .collect();
    print!(
        "{}",
        format::table(
            &["ID", "Code", "Donor", "Amount", "Schools", "Txns", "Date", "Status"],
            &rows,
        )
    );
    println!("{}", format::page_footer(&page.meta));
    Ok(())
}

async fn create_transfer(services: &Services, args: TransferCreateArgs) -> AppResult<()> {
    let payload = TransferForm {
        school_code: args.school_code,
        donor: args.donor,
        amount: args.amount,
        contribution_type: args.contribution_type,
        account_number: args.account_number,
        transactions: args.transactions,
        school_ids: args.school_ids,
    }
    .into_payload()?;

    let transfer = services.transfers().create(payload).await?;
    println!(
        "Recorded transfer {} from {} ({}).",
        transfer.id,
        transfer.donor,
        format::money(transfer.amount)
    );
    Ok(())
}

async fn upload_batch(services: &Services, file: PathBuf) -> AppResult<()> {
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::validation("The upload path has no file name."))?;
    let contents = tokio::fs::read(&file)
        .await
        .map_err(|e| AppError::validation(format!("Could not read {}: {}", file.display(), e)))?;

    let receipt = services.transfers().upload_batch(file_name, contents).await?;
    match receipt.message {
        Some(message) => println!("{}", message),
        None => println!("Upload accepted."),
    }
    Ok(())
}
