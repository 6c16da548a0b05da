//! Account commands.
//!
//! Passwords are read from `MB_PASSWORD` when not given on the command line.

use clap::{Args, Subcommand};
use secrecy::SecretString;
use tracing::info;

use maison_bonheur_storefront::models::{NewAccount, ProfileUpdate};
use maison_bonheur_storefront::{AppError, Storefront};

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create an account
    Register {
        #[command(flatten)]
        profile: ProfileArgs,
        #[arg(long, env = "MB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Start a session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(long, env = "MB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session
    Logout,
    /// Show the logged-in customer
    Whoami,
    /// Edit the logged-in customer's profile
    Update {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(short, long)]
    email: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    phone: Option<String>,
}

pub fn run(shop: &mut Storefront, action: AccountAction) -> Result<(), AppError> {
    let accounts = shop.accounts_mut();
    match action {
        AccountAction::Register { profile, password } => {
            let created = accounts.register(NewAccount {
                first_name: profile.first_name,
                last_name: profile.last_name,
                email: profile.email,
                address: profile.address,
                phone: profile.phone,
                password: SecretString::from(password),
            })?;
            info!(email = %created.email, name = %created.full_name(), "Account created");
        }
        AccountAction::Login { email, password } => {
            let profile = accounts.login(&email, &SecretString::from(password))?;
            info!(name = %profile.full_name(), "Welcome back");
        }
        AccountAction::Logout => {
            accounts.logout();
            info!("Logged out");
        }
        AccountAction::Whoami => match accounts.current_user() {
            Some(user) => info!(
                name = %user.full_name(),
                email = %user.email,
                address = %user.address,
                phone = user.phone.as_deref().unwrap_or("-"),
                "Logged in"
            ),
            None => info!("Not logged in"),
        },
        AccountAction::Update { profile } => {
            let updated = accounts.update_profile(ProfileUpdate {
                first_name: profile.first_name,
                last_name: profile.last_name,
                email: profile.email,
                address: profile.address,
                phone: profile.phone,
            })?;
            info!(email = %updated.email, "Profile updated");
        }
    }
    Ok(())
}
