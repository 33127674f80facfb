//! `shelter shelter`: shelters and the donations they receive.

use tracing::{debug, instrument};

use shelter_adapters::{
    dto::{AddressLookupResult, ShelterInformation},
    mapping::{ShelterInformationMapper, map_with},
};
use shelter_core::{
    application::{AddressDetails, DonationDetails, DonationReceipt, ShelterRegistration},
    domain::Shelter,
};

use crate::{
    cli::{AddressArgs, DonateArgs, ShelterCommands, ShelterCreateArgs},
    context::Registry,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(cmd: ShelterCommands, registry: &Registry, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ShelterCommands::Create(args) => {
            let request = registration(args, registry)?;
            let shelter = registry.registration.register_shelter(&request)?;
            if output.is_json() {
                return show(&shelter, output);
            }
            output.success(&format!(
                "Registered shelter {} ({})",
                shelter.shelter_name(),
                shelter.id()
            ))?;
        }

        ShelterCommands::Show { id } => {
            let shelter = registry
                .shelters
                .get_shelter(&id)?
                .ok_or(CliError::NotFound { entity: "shelter", key: id })?;
            show(&shelter, output)?;
        }

        ShelterCommands::Find { email } => {
            let shelter = registry.registration.find_shelter_by_responsible_email(&email)?;
            show(&shelter, output)?;
        }

        ShelterCommands::List => {
            let shelters = registry.shelters.list_shelters()?;
            if output.is_json() {
                let information = shelters
                    .iter()
                    .map(information)
                    .collect::<CliResult<Vec<_>>>()?;
                output.json(&information)?;
            } else if shelters.is_empty() {
                output.info("No shelters registered")?;
            } else {
                for shelter in &shelters {
                    output.print(&format!(
                        "{}  {}  <{}>  {} donation(s)",
                        shelter.id(),
                        shelter.shelter_name(),
                        shelter.responsible_user().email(),
                        shelter.donations().len()
                    ))?;
                }
            }
        }

        ShelterCommands::Rename { id, name } => {
            let shelter = registry.shelters.change_shelter_name(&id, &name)?;
            output.success(&format!(
                "Shelter {} is now {}",
                shelter.id(),
                shelter.shelter_name()
            ))?;
        }

        ShelterCommands::Donate(args) => {
            let receipt = receipt(args)?;
            let shelter = registry.registration.receive_donations(&receipt)?;
            if output.is_json() {
                return show(&shelter, output);
            }
            output.success(&format!(
                "{} now holds {} donation(s)",
                shelter.shelter_name(),
                shelter.donations().len()
            ))?;
        }

        ShelterCommands::Delete { id } => {
            registry.shelters.delete_shelter(&id)?;
            output.success(&format!("Shelter {id} deleted"))?;
        }
    }

    Ok(())
}

fn registration(args: ShelterCreateArgs, registry: &Registry) -> CliResult<ShelterRegistration> {
    let address = if args.address.is_empty() {
        None
    } else {
        let mut details = address_details(args.address);
        if args.lookup {
            let found = registry.addresses.lookup(&details.zip)?;
            fill_blanks(&mut details, found);
        }
        Some(details)
    };

    Ok(ShelterRegistration {
        shelter_name: args.name,
        address,
        responsible_email: args.responsible,
    })
}

fn address_details(args: AddressArgs) -> AddressDetails {
    AddressDetails {
        street: args.street.unwrap_or_default(),
        number: args.number.unwrap_or_default(),
        neighborhood: args.neighborhood.unwrap_or_default(),
        city: args.city.unwrap_or_default(),
        state: args.state.unwrap_or_default(),
        zip: args.zip.unwrap_or_default(),
    }
}

/// Fields typed on the command line win over the postal-code table.
fn fill_blanks(details: &mut AddressDetails, found: AddressLookupResult) {
    let pairs = [
        (&mut details.street, found.street),
        (&mut details.neighborhood, found.neighborhood),
        (&mut details.city, found.city),
        (&mut details.state, found.state),
    ];
    for (field, value) in pairs {
        if field.trim().is_empty() {
            *field = value;
        }
    }
    debug!(zip = %details.zip, "Address completed from lookup");
}

fn receipt(args: DonateArgs) -> CliResult<DonationReceipt> {
    let donations = if args.items.is_empty() {
        None
    } else {
        Some(
            args.items
                .iter()
                .map(|item| parse_item(item))
                .collect::<CliResult<Vec<_>>>()?,
        )
    };

    Ok(DonationReceipt {
        responsible_email: args.responsible,
        donations,
    })
}

/// `DESCRIPTION:AMOUNT`; the amount may be left out.
fn parse_item(item: &str) -> CliResult<DonationDetails> {
    let (description, amount) = match item.rsplit_once(':') {
        Some((description, amount)) => (description, amount.trim()),
        None => (item, ""),
    };

    let amount = if amount.is_empty() {
        None
    } else {
        let parsed = amount.parse::<i32>().map_err(|e| CliError::InvalidInput {
            message: format!("'{amount}' in '{item}' is not a whole number"),
            source: Some(Box::new(e)),
        })?;
        Some(parsed)
    };

    Ok(DonationDetails {
        description: description.to_string(),
        amount,
    })
}

fn information(shelter: &Shelter) -> CliResult<ShelterInformation> {
    Ok(map_with(&ShelterInformationMapper, Some(shelter))?)
}

fn show(shelter: &Shelter, output: &OutputManager) -> CliResult<()> {
    let info = information(shelter)?;
    if output.is_json() {
        output.json(&info)?;
        return Ok(());
    }

    let address = &info.address;
    output.header(&info.shelter_name)?;
    output.field("id", &info.id)?;
    output.field(
        "address",
        format!(
            "{}, {} - {}, {}/{} {}",
            address.street,
            address.number,
            address.neighborhood,
            address.city,
            address.state,
            address.zip
        ),
    )?;
    output.field(
        "responsible",
        format!("{} <{}>", info.responsible_name, info.responsible_email),
    )?;
    output.field("donations", info.donations.len())?;
    for donation in &info.donations {
        let amount = donation.amount.map(|a| a.to_string()).unwrap_or_default();
        output.print(&format!("    - {} x{}", donation.description, amount))?;
    }
    Ok(())
}
