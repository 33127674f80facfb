//! `shelter user`: register and maintain donors and beneficiaries.

use tracing::instrument;

use shelter_adapters::{dto::UserSummary, mapping::map_to};
use shelter_core::{application::UserRegistration, domain::User};

use crate::{
    cli::{UserCommands, UserCreateArgs},
    context::Registry,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(cmd: UserCommands, registry: &Registry, output: &OutputManager) -> CliResult<()> {
    match cmd {
        UserCommands::Create(args) => {
            let user = registry.registration.register_user(&registration(args))?;
            if output.is_json() {
                return show(&user, output);
            }
            output.success(&format!(
                "Registered {} {} ({})",
                user.profile(),
                user.user_name(),
                user.id()
            ))?;
        }

        UserCommands::Show { id } => {
            let user = registry.users.get_user(&id)?.ok_or_else(|| not_found(id))?;
            show(&user, output)?;
        }

        UserCommands::Find { email } => {
            let user = registry
                .users
                .get_user_by_email(&email)?
                .ok_or_else(|| not_found(email))?;
            show(&user, output)?;
        }

        UserCommands::List => {
            let users = registry.users.list_users()?;
            if output.is_json() {
                let summaries = users
                    .iter()
                    .map(map_to::<UserSummary, _>)
                    .collect::<Result<Vec<_>, _>>()?;
                output.json(&summaries)?;
            } else if users.is_empty() {
                output.info("No users registered")?;
            } else {
                for user in &users {
                    output.print(&format!(
                        "{}  {:<11}  {}  <{}>",
                        user.id(),
                        user.profile(),
                        user.user_name(),
                        user.email()
                    ))?;
                }
            }
        }

        UserCommands::Rename { id, name } => {
            let user = registry.users.change_user_name(&id, &name)?;
            output.success(&format!("User {} is now {}", user.id(), user.user_name()))?;
        }

        UserCommands::Password { id, password } => {
            let user = registry.users.change_password(&id, &password)?;
            output.success(&format!("Password changed for {}", user.email()))?;
        }

        UserCommands::Delete { id } => {
            registry.users.delete_user(&id)?;
            output.success(&format!("User {id} deleted"))?;
        }
    }

    Ok(())
}

fn registration(args: UserCreateArgs) -> UserRegistration {
    UserRegistration {
        user_name: args.name,
        email: args.email,
        profile: args.profile.map(Into::into),
        password: args.password,
    }
}

fn not_found(key: String) -> CliError {
    CliError::NotFound { entity: "user", key }
}

fn show(user: &User, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let summary: UserSummary = map_to(user)?;
        output.json(&summary)?;
        return Ok(());
    }
    output.header(user.user_name())?;
    output.field("id", user.id())?;
    output.field("email", user.email())?;
    output.field("profile", user.profile())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProfileArg;
    use shelter_core::domain::UserProfile;

    #[test]
    fn registration_carries_every_argument() {
        let request = registration(UserCreateArgs {
            name: "Ana".into(),
            email: "ana@example.org".into(),
            profile: Some(ProfileArg::Beneficiary),
            password: "pw".into(),
        });
        assert_eq!(request.user_name, "Ana");
        assert_eq!(request.profile, Some(UserProfile::Beneficiary));
    }

    #[test]
    fn missing_user_maps_to_not_found() {
        assert_eq!(not_found("x".into()).exit_code(), 3);
    }
}
