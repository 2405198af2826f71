use anyhow::Result;

use regenera_core::auth::SupabaseAuth;
use regenera_core::{AppConfig, IdentityProvider};

pub async fn run(config: &AppConfig) -> Result<()> {
    let auth = SupabaseAuth::new(&config.auth, config.session_path())?;

    if auth.get_session().await?.is_none() {
        println!("Not signed in.");
        return Ok(());
    }

    auth.sign_out().await?;
    println!("Signed out.");
    Ok(())
}
