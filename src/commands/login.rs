//! Login command - authenticate against the backend.

use crate::cli::args::LoginArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::{AuthService, Services};

/// Execute the login command
pub async fn execute(args: LoginArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;

    if args.refresh {
        services.auth().refresh().await?;
        println!("Access token refreshed.");
        return Ok(());
    }

    let username = args
        .username
        .ok_or_else(|| AppError::validation("A username is required (--username)."))?;
    let password = args
        .password
        .ok_or_else(|| AppError::validation("A password is required (--password)."))?;

    let user = services.auth().login(username, password).await?;
    println!("Logged in as {} ({}).", user.username, user.role);
    Ok(())
}
