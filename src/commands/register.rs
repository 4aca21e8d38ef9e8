//! `statreg register` command.

use std::env;
use std::time::Duration;

use crate::cli::AppArgs;
use crate::config::{RegistrarConfig, WriteOrder};
use crate::context::ServiceContext;
use crate::registrar::{RegisterOutcome, Registrar};

/// Environment variable used when `--endpoint` is not given.
pub const ENDPOINT_ENV: &str = "STATREG_ENDPOINT";

/// Execute the `register` command.
///
/// # Errors
///
/// Returns an error string if no endpoint is configured or registration fails.
pub fn run(
    ctx: ServiceContext,
    app: &AppArgs,
    endpoint: Option<&str>,
    lenient: bool,
    send_first: bool,
    timeout: Duration,
) -> Result<(), String> {
    let endpoint = match endpoint {
        Some(endpoint) => endpoint.to_string(),
        None => env::var(ENDPOINT_ENV)
            .map_err(|_| format!("No endpoint given: pass --endpoint or set {ENDPOINT_ENV}"))?,
    };
    let order = if send_first { WriteOrder::SendThenSave } else { WriteOrder::SaveThenSend };

    let config = RegistrarConfig::new(&app.app_name, endpoint, super::config_root(app)?)
        .strict_response_validation(!lenient)
        .write_order(order)
        .timeout(timeout);
    let registrar = Registrar::with_context(config, ctx).map_err(|e| e.to_string())?;

    match registrar.register_blocking().map_err(|e| e.to_string())? {
        RegisterOutcome::AlreadyRegistered { path } => {
            println!("Already registered ({})", path.display());
        }
        RegisterOutcome::Registered(registration) => {
            println!(
                "Registered {} as {} ({})",
                registration.app_name,
                registration.identifier,
                registration.target_path.display()
            );
        }
    }
    Ok(())
}
