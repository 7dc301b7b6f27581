//! Authentication commands - login, signup, logout, whoami, forgot-password

use anyhow::Result;
use colored::Colorize;
use dialoguer::Password;

use super::get_context;
use crate::output;

fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => Ok(Password::new().with_prompt("Password").interact()?),
    }
}

pub async fn login(email: &str, password: Option<String>) -> Result<()> {
    let password = password_or_prompt(password)?;
    let ctx = get_context()?;

    let pb = output::spinner("Signing in...");
    let result = ctx.session_service.login(email, &password).await;
    pb.finish_and_clear();

    let identity = result?;
    output::success(&format!("Welcome back, {}!", identity.name));
    Ok(())
}

pub async fn signup(name: &str, email: &str, password: Option<String>) -> Result<()> {
    let password = password_or_prompt(password)?;
    let ctx = get_context()?;

    let pb = output::spinner("Creating account...");
    let result = ctx.session_service.signup(name, email, &password).await;
    pb.finish_and_clear();

    let identity = result?;
    output::success(&format!("Account created for {}", identity.email));
    println!("You can now sign in with `wafr login {}`.", identity.email);
    Ok(())
}

pub async fn logout() -> Result<()> {
    let ctx = get_context()?;

    let pb = output::spinner("Signing out...");
    ctx.session_service.logout().await;
    pb.finish_and_clear();

    output::success("You have been logged out");
    Ok(())
}

pub fn whoami(json: bool) -> Result<()> {
    let ctx = get_context()?;

    match ctx.session_service.current() {
        Some(identity) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&identity)?);
                return Ok(());
            }
            println!("{}", "Current Session".bold());
            let mut table = output::create_table();
            table.add_row(vec!["Id", &identity.id]);
            table.add_row(vec!["Name", &identity.name]);
            table.add_row(vec!["Email", &identity.email]);
            table.add_row(vec!["Role", &identity.role]);
            println!("{}", table);
        }
        None => output::warning("Not signed in"),
    }
    Ok(())
}

pub async fn forgot_password(email: &str) -> Result<()> {
    let ctx = get_context()?;

    let pb = output::spinner("Requesting password reset...");
    ctx.session_service.reset_password(email).await?;
    pb.finish_and_clear();

    output::success(&format!("Password reset instructions sent to {}", email));
    Ok(())
}
