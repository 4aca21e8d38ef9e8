//! `statreg show` command.

use crate::cli::AppArgs;
use crate::config::identifier_path;
use crate::context::ServiceContext;

/// Execute the `show` command.
///
/// Prints the identifier file path and the stored identifier, or
/// "not registered" when the file is absent.
///
/// # Errors
///
/// Returns an error string if the config root is unknown or the file
/// cannot be read.
pub fn run(ctx: &ServiceContext, app: &AppArgs) -> Result<(), String> {
    let path = identifier_path(&super::config_root(app)?, &app.app_name);
    println!("Identifier file: {}", path.display());

    if ctx.fs.exists(&path) {
        let identifier = ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        println!("Identifier: {identifier}");
    } else {
        println!("Identifier: not registered");
    }
    Ok(())
}
