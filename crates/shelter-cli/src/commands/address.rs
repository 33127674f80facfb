//! `shelter address`: postal-code helpers.

use crate::{cli::AddressCommands, context::Registry, error::CliResult, output::OutputManager};

pub fn execute(cmd: AddressCommands, registry: &Registry, output: &OutputManager) -> CliResult<()> {
    match cmd {
        AddressCommands::Lookup { zip } => {
            let found = registry.addresses.lookup(&zip)?;
            if output.is_json() {
                output.json(&found)?;
                return Ok(());
            }
            output.header(&found.zip)?;
            output.field("street", &found.street)?;
            output.field("neighborhood", &found.neighborhood)?;
            output.field("city", &found.city)?;
            output.field("state", &found.state)?;
        }
    }
    Ok(())
}
