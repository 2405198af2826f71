use anyhow::Result;

use regenera_core::auth::SupabaseAuth;
use regenera_core::{AppConfig, IdentityProvider};

pub async fn run(config: &AppConfig) -> Result<()> {
    if !config.auth.is_configured() {
        println!("not signed in (no identity backend configured)");
        println!("\nSet auth.url and auth.anon_key in {}", AppConfig::config_path().display());
        return Ok(());
    }

    let auth = SupabaseAuth::new(&config.auth, config.session_path())?;
    match auth.get_session().await? {
        Some(session) => {
            println!("{}", session.email());
            match auth.current_user().await {
                Ok(user) => println!("  User id: {}", user.id),
                Err(e) => println!("  (could not reach the identity backend: {})", e),
            }
        }
        None => println!("not signed in"),
    }
    Ok(())
}
