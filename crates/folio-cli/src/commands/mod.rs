pub mod migrate;
pub mod projects;
pub mod schema;
pub mod shared;
pub mod site;
pub mod validate;
pub mod vocabulary;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Projects(args) => projects::handle(args, flags),
        Commands::Migrate => migrate::handle(flags),
        Commands::Site => site::handle(flags),
        Commands::Validate => validate::handle(flags),
        Commands::Vocabulary(args) => vocabulary::handle(args, flags),
        Commands::Schema => schema::handle(flags),
    }
}
