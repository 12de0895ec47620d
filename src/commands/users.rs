//! Users command - administrator account listing.
//!
//! Restricted to super-admins by the role policy; account creation and
//! editing stay in the backend.

use crate::api::AdminApi;
use crate::cli::args::{ListArgs, UsersAction, UsersArgs};
use crate::commands::build_query;
use crate::config::Config;
use crate::domain::AdminUser;
use crate::errors::{AppError, AppResult};
use crate::services::Services;
use crate::utils::format;

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    match args.action {
        UsersAction::List(list) => list_users(&services, list).await,
    }
}

async fn list_users(services: &Services, args: ListArgs) -> AppResult<()> {
    let role = services.session().role().ok_or(AppError::Unauthenticated)?;
    services.policy().authorize_view_users(role)?;

    // Account listing has no exact-match filters, only search.
    let query = build_query(args, Vec::new())?;
    let admins_api = services.admins();
    let admins = admins_api.list().await?;
    let page = AdminUser::query_engine().page(&admins, &query);

    if page.meta.total == 0 {
        println!("No accounts found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.username.clone(),
                u.email.clone().unwrap_or_else(|| "-".to_string()),
                u.role_label().to_string(),
            ]
        })
        .collect();
    print!(
        "{}",
        format::table(&["ID", "Username", "Email", "Role"], &rows)
    );
    println!("{}", format::page_footer(&page.meta));
    Ok(())
}
