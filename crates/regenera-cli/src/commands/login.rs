use anyhow::Result;

use regenera_core::auth::SupabaseAuth;
use regenera_core::AppConfig;

pub async fn run(config: &AppConfig, email: &str, password: &str) -> Result<()> {
    let auth = SupabaseAuth::new(&config.auth, config.session_path())?;
    let session = auth.sign_in_with_password(email, password).await?;

    println!("Signed in as {}", session.email());
    if let Some(expires_at) = session.expires_at {
        println!("  Session valid until {}", expires_at.format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(())
}
