//! Logout command - drop the persisted session.

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{AuthService, Services};

/// Execute the logout command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config)?;
    if !services.session().is_authenticated() {
        println!("No active session.");
        return Ok(());
    }
    services.auth().logout()?;
    println!("Logged out.");
    Ok(())
}
