//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use shelter_core::domain::UserProfile;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shelter",
    bin_name = "shelter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Shelter, donor and donation registry",
    long_about = "Registers donors and beneficiaries, the shelters beneficiaries \
                  run, and the donations those shelters receive.",
    after_help = "EXAMPLES:\n\
        \x20 shelter user create Bia --email bia@example.org --profile beneficiary --password pw\n\
        \x20 shelter shelter create \"Casa de Apoio\" --responsible bia@example.org --zip 01001-000 ...\n\
        \x20 shelter shelter donate --responsible bia@example.org --item Rice:10 --item Soap:2\n\
        \x20 shelter completions bash > /usr/share/bash-completion/completions/shelter",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Donors and beneficiaries.
    #[command(
        subcommand,
        visible_alias = "u",
        about = "Manage users",
        after_help = "EXAMPLES:\n\
            \x20 shelter user create Ana --email ana@example.org --profile donor --password secret\n\
            \x20 shelter user find ana@example.org\n\
            \x20 shelter user rename <ID> \"Ana Maria\""
    )]
    User(UserCommands),

    /// Shelters and the donations they receive.
    #[command(
        subcommand,
        visible_alias = "s",
        about = "Manage shelters",
        after_help = "EXAMPLES:\n\
            \x20 shelter shelter find bia@example.org\n\
            \x20 shelter shelter donate --responsible bia@example.org --item Blankets:3\n\
            \x20 shelter shelter list --output-format json"
    )]
    Shelter(ShelterCommands),

    /// Postal-code lookups.
    #[command(subcommand, about = "Address helpers")]
    Address(AddressCommands),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 shelter init                        # default location\n\
            \x20 shelter init --config ./shelter.toml\n\
            \x20 shelter init --force                # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shelter completions bash > ~/.local/share/bash-completion/completions/shelter\n\
            \x20 shelter completions zsh  > ~/.zfunc/_shelter\n\
            \x20 shelter completions fish > ~/.config/fish/completions/shelter.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shelter config get storage.backend\n\
            \x20 shelter config list\n\
            \x20 shelter config path"
    )]
    Config(ConfigCommands),
}

// ── user ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum UserCommands {
    /// Register a new user.
    Create(UserCreateArgs),
    /// Show a user by id.
    Show { id: String },
    /// Find a user by email.
    Find { email: String },
    /// List every user.
    #[command(visible_alias = "ls")]
    List,
    /// Change a user's name.
    Rename { id: String, name: String },
    /// Change a user's password.
    Password { id: String, password: String },
    /// Delete a user. Deleting an unknown id succeeds.
    #[command(visible_alias = "rm")]
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct UserCreateArgs {
    #[arg(value_name = "NAME", help = "Display name")]
    pub name: String,

    #[arg(short = 'e', long = "email", value_name = "EMAIL")]
    pub email: String,

    /// Donor or beneficiary. Required; omitting it is reported as a
    /// registration failure.
    #[arg(short = 'p', long = "profile", value_enum)]
    pub profile: Option<ProfileArg>,

    #[arg(long = "password", value_name = "PASSWORD")]
    pub password: String,
}

/// User profile as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProfileArg {
    Donor,
    Beneficiary,
}

impl From<ProfileArg> for UserProfile {
    fn from(profile: ProfileArg) -> Self {
        match profile {
            ProfileArg::Donor => Self::Donor,
            ProfileArg::Beneficiary => Self::Beneficiary,
        }
    }
}

// ── shelter ───────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ShelterCommands {
    /// Register a shelter run by an existing beneficiary.
    Create(ShelterCreateArgs),
    /// Show a shelter by id.
    Show { id: String },
    /// Find the shelter run by a responsible email.
    Find { email: String },
    /// List every shelter.
    #[command(visible_alias = "ls")]
    List,
    /// Change a shelter's name.
    Rename { id: String, name: String },
    /// Record donations received by a shelter.
    Donate(DonateArgs),
    /// Delete a shelter. Deleting an unknown id succeeds.
    #[command(visible_alias = "rm")]
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct ShelterCreateArgs {
    #[arg(value_name = "NAME", help = "Shelter name")]
    pub name: String,

    /// Email of the beneficiary responsible for the shelter.
    #[arg(short = 'r', long = "responsible", value_name = "EMAIL")]
    pub responsible: String,

    #[command(flatten)]
    pub address: AddressArgs,

    /// Fill blank address fields from the postal-code table.
    #[arg(long = "lookup", requires = "zip")]
    pub lookup: bool,
}

/// Address fields. Leaving all of them out registers the shelter without an
/// address, which is rejected.
#[derive(Debug, Default, Args)]
pub struct AddressArgs {
    #[arg(long = "street")]
    pub street: Option<String>,
    #[arg(long = "number")]
    pub number: Option<String>,
    #[arg(long = "neighborhood")]
    pub neighborhood: Option<String>,
    #[arg(long = "city")]
    pub city: Option<String>,
    #[arg(long = "state")]
    pub state: Option<String>,
    #[arg(long = "zip")]
    pub zip: Option<String>,
}

impl AddressArgs {
    pub fn is_empty(&self) -> bool {
        [
            &self.street,
            &self.number,
            &self.neighborhood,
            &self.city,
            &self.state,
            &self.zip,
        ]
        .iter()
        .all(|field| field.is_none())
    }
}

#[derive(Debug, Args)]
pub struct DonateArgs {
    /// Email of the beneficiary responsible for the receiving shelter.
    #[arg(short = 'r', long = "responsible", value_name = "EMAIL")]
    pub responsible: String,

    /// A donation as `DESCRIPTION:AMOUNT`. Repeat for several.
    #[arg(short = 'i', long = "item", value_name = "DESCRIPTION:AMOUNT")]
    pub items: Vec<String>,
}

// ── address ───────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum AddressCommands {
    /// Resolve a postal code from the configured table.
    Lookup { zip: String },
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shelter init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shelter completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shelter config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.backend`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
