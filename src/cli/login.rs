use crate::auth;
use crate::error::{LedgerpadError, Result};
use crate::registry::Registry;
use crate::settings::db_path;

pub fn login(username: &str, password: Option<String>) -> Result<()> {
    // Check the username before prompting so typos fail fast.
    if !auth::known_user(username) {
        return Err(LedgerpadError::InvalidInput(format!(
            "unknown username '{username}' — this account is not allowed"
        )));
    }
    let mut password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password: ")?,
    };
    auth::verify(username, &mut password)?;

    let registry = Registry::open(&db_path())?;
    registry.set_current_user(username)?;
    println!("Logged in as {username}");
    Ok(())
}

pub fn logout() -> Result<()> {
    let registry = Registry::open(&db_path())?;
    match registry.current_user() {
        Some(user) => {
            registry.clear_session()?;
            println!("Logged out {user}");
        }
        None => println!("Nobody is logged in."),
    }
    Ok(())
}
