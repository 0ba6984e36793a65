mod status;
mod token;

use spark_config::SparkConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `spark auth <subcommand>`.
pub fn handle(action: &AuthCommands, flags: &GlobalFlags, config: &SparkConfig) -> anyhow::Result<()> {
    match action {
        AuthCommands::Token(args) => token::handle(args, flags, config),
        AuthCommands::Status => status::handle(flags, config),
    }
}
