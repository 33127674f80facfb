//! Registration workflow: onboarding users and shelters and receiving
//! donations, with the cross-entity rules no single entity can check.
//!
//! Rules enforced here:
//! 1. An email belongs to at most one user.
//! 2. Only a beneficiary may be responsible for a shelter.
//! 3. A user is responsible for at most one shelter.
//! 4. Donations are all validated and stored before any is appended.

use tracing::{error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, FailureDetail,
        requests::{DonationReceipt, ShelterRegistration, UserRegistration},
        services::{AddressService, DonationService, ShelterService, UserService, tagged},
    },
    domain::{
        Shelter, User, UserProfile,
        validation::{require_non_blank, require_non_empty, require_present},
    },
    error::{RegistryError, RegistryResult},
};

#[derive(Clone)]
pub struct RegistrationService {
    users: UserService,
    shelters: ShelterService,
    addresses: AddressService,
    donations: DonationService,
}

impl RegistrationService {
    pub fn new(
        users: UserService,
        shelters: ShelterService,
        addresses: AddressService,
        donations: DonationService,
    ) -> Self {
        Self {
            users,
            shelters,
            addresses,
            donations,
        }
    }

    #[instrument(skip_all, fields(email = %request.email))]
    pub fn register_user(&self, request: &UserRegistration) -> RegistryResult<User> {
        require_non_blank(
            &request.email,
            &request.email,
            tagged(ApplicationError::user_service_term, FailureDetail::InvalidEmail),
        )?;

        if self.users.get_user_by_email(&request.email)?.is_some() {
            warn!("Email already associated with an account");
            return Err(ApplicationError::user_service_term(
                FailureDetail::EmailAlreadyInUse,
                &request.email,
            )
            .into());
        }

        let profile = require_present(
            request.profile,
            "",
            tagged(ApplicationError::user_service_term, FailureDetail::UserProfileValidation),
        )?;

        self.users
            .create_user(&request.user_name, &request.email, Some(profile), &request.password)
            .map_err(|e| -> RegistryError {
                error!(error = %e, "User registration failed");
                ApplicationError::user_service_term(FailureDetail::UserCreationFailure, "")
                    .with_source(e)
                    .into()
            })
    }

    #[instrument(skip_all, fields(responsible = %request.responsible_email))]
    pub fn register_shelter(&self, request: &ShelterRegistration) -> RegistryResult<Shelter> {
        let responsible = self.responsible_user(&request.responsible_email)?;

        if responsible.profile() == UserProfile::Donor {
            warn!("Responsible user has the donor profile");
            return Err(shelter_failure(FailureDetail::ResponsibleUserProfileInvalid));
        }
        if self
            .shelters
            .find_by_responsible_email(&request.responsible_email)?
            .is_some()
        {
            warn!("Responsible user already runs a shelter");
            return Err(shelter_failure(FailureDetail::ResponsibleUserAlreadyInUse));
        }

        let shelter = self
            .create_shelter(request, responsible)
            .map_err(|e| -> RegistryError {
                error!(error = %e, "Shelter registration failed");
                ApplicationError::shelter_service_term(FailureDetail::ShelterCreation, "")
                    .with_source(e)
                    .into()
            })?;
        info!(shelter_id = %shelter.id(), "Shelter registered");
        Ok(shelter)
    }

    /// Store every donation in the receipt and append them, in order, to the
    /// shelter run by the receipt's responsible email.
    #[instrument(skip_all, fields(responsible = %receipt.responsible_email))]
    pub fn receive_donations(&self, receipt: &DonationReceipt) -> RegistryResult<Shelter> {
        let shelter = self.find_shelter_by_responsible_email(&receipt.responsible_email)?;

        let details = require_non_empty(
            receipt.donations.as_deref(),
            "",
            tagged(ApplicationError::shelter_service_term, FailureDetail::EmptyDonationList),
        )?;

        let donations = details
            .iter()
            .map(|detail| self.donations.register_donation(detail))
            .collect::<RegistryResult<Vec<_>>>()?;

        for donation in donations {
            self.shelters.add_donation(shelter.id(), Some(donation))?;
        }

        let updated = self
            .shelters
            .get_shelter(shelter.id())?
            .ok_or_else(|| shelter_failure(FailureDetail::ResponsibleEmailNotAssociated))?;
        info!(
            shelter_id = %updated.id(),
            received = details.len(),
            total = updated.donations().len(),
            "Donations received"
        );
        Ok(updated)
    }

    pub fn find_shelter_by_responsible_email(&self, email: &str) -> RegistryResult<Shelter> {
        self.shelters
            .find_by_responsible_email(email)?
            .ok_or_else(|| shelter_failure(FailureDetail::ResponsibleEmailNotAssociated))
    }

    fn responsible_user(&self, email: &str) -> RegistryResult<User> {
        let not_found =
            || ApplicationError::shelter_service_term(FailureDetail::ResponsibleEmailNotFound, "");

        match self.users.get_user_by_email(email) {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                warn!("No user with the responsible email");
                Err(not_found().into())
            }
            Err(e) => {
                error!(error = %e, "Responsible user lookup failed");
                Err(not_found().with_source(e).into())
            }
        }
    }

    fn create_shelter(
        &self,
        request: &ShelterRegistration,
        responsible: User,
    ) -> RegistryResult<Shelter> {
        let details = require_present(
            request.address.as_ref(),
            "",
            tagged(ApplicationError::address_record_term, FailureDetail::AddressCreation),
        )?;
        let address = self.addresses.register_address(details)?;
        self.shelters
            .create_shelter(&request.shelter_name, Some(address), Some(responsible))
    }
}

fn shelter_failure(detail: FailureDetail) -> RegistryError {
    ApplicationError::shelter_service_term(detail, "").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ports::{
            MockAddressLookup, MockAddressRepository, MockDonationRepository,
            MockShelterRepository, MockUserRepository,
        },
        requests::{AddressDetails, DonationDetails},
    };
    use crate::domain::{Address, Donation};
    use std::sync::{Arc, Mutex};

    const EMAIL: &str = "bia@example.org";

    fn beneficiary() -> User {
        User::create("Bia", EMAIL, Some(UserProfile::Beneficiary), "pw").unwrap()
    }

    fn shelter_for(user: User) -> Shelter {
        let address = Address::create("Main St", "1", "Centro", "Town", "ST", "00000").unwrap();
        Shelter::create("Casa", Some(address), Some(user)).unwrap()
    }

    fn address_details() -> AddressDetails {
        AddressDetails {
            street: "Main St".into(),
            number: "1".into(),
            neighborhood: "Centro".into(),
            city: "Town".into(),
            state: "ST".into(),
            zip: "00000".into(),
        }
    }

    struct Mocks {
        users: MockUserRepository,
        shelters: MockShelterRepository,
        addresses: MockAddressRepository,
        donations: MockDonationRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                users: MockUserRepository::new(),
                shelters: MockShelterRepository::new(),
                addresses: MockAddressRepository::new(),
                donations: MockDonationRepository::new(),
            }
        }

        fn build(self) -> RegistrationService {
            RegistrationService::new(
                UserService::new(Arc::new(self.users)),
                ShelterService::new(Arc::new(self.shelters)),
                AddressService::new(Arc::new(self.addresses), Arc::new(MockAddressLookup::new())),
                DonationService::new(Arc::new(self.donations)),
            )
        }
    }

    #[test]
    fn register_user_rejects_email_in_use() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(beneficiary())));
        mocks.users.expect_persist().never();

        let err = mocks
            .build()
            .register_user(&UserRegistration {
                user_name: "Bia".into(),
                email: EMAIL.into(),
                profile: Some(UserProfile::Beneficiary),
                password: "pw".into(),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::EmailAlreadyInUse));
        assert!(err.to_string().contains(EMAIL));
    }

    #[test]
    fn register_user_requires_profile() {
        let mut mocks = Mocks::new();
        mocks.users.expect_find_by_email().returning(|_| Ok(None));

        let err = mocks
            .build()
            .register_user(&UserRegistration {
                user_name: "Bia".into(),
                email: EMAIL.into(),
                profile: None,
                password: "pw".into(),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::UserProfileValidation));
    }

    #[test]
    fn register_user_wraps_domain_failure() {
        let mut mocks = Mocks::new();
        mocks.users.expect_find_by_email().returning(|_| Ok(None));

        let err = mocks
            .build()
            .register_user(&UserRegistration {
                user_name: "".into(),
                email: EMAIL.into(),
                profile: Some(UserProfile::Donor),
                password: "pw".into(),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::UserCreationFailure));
        assert_eq!(
            err.domain_cause().map(|d| d.reason().to_string()),
            Some("The name of the Donor must not be null or empty".to_string())
        );
    }

    #[test]
    fn donor_cannot_be_responsible() {
        let mut mocks = Mocks::new();
        mocks.users.expect_find_by_email().returning(|_| {
            Ok(Some(
                User::create("Ana", EMAIL, Some(UserProfile::Donor), "pw").unwrap(),
            ))
        });

        let err = mocks
            .build()
            .register_shelter(&ShelterRegistration {
                shelter_name: "Casa".into(),
                address: Some(address_details()),
                responsible_email: EMAIL.into(),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::ResponsibleUserProfileInvalid));
    }

    #[test]
    fn unknown_responsible_email_is_reported() {
        let mut mocks = Mocks::new();
        mocks.users.expect_find_by_email().returning(|_| Ok(None));

        let err = mocks
            .build()
            .register_shelter(&ShelterRegistration {
                shelter_name: "Casa".into(),
                address: Some(address_details()),
                responsible_email: EMAIL.into(),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::ResponsibleEmailNotFound));
    }

    #[test]
    fn responsible_user_limited_to_one_shelter() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(beneficiary())));
        mocks
            .shelters
            .expect_find_by_responsible_email()
            .returning(|_| Ok(Some(shelter_for(beneficiary()))));
        mocks.addresses.expect_persist().never();

        let err = mocks
            .build()
            .register_shelter(&ShelterRegistration {
                shelter_name: "Casa 2".into(),
                address: Some(address_details()),
                responsible_email: EMAIL.into(),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::ResponsibleUserAlreadyInUse));
    }

    #[test]
    fn register_shelter_persists_address_then_shelter() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(beneficiary())));
        mocks
            .shelters
            .expect_find_by_responsible_email()
            .returning(|_| Ok(None));
        mocks
            .addresses
            .expect_persist()
            .times(1)
            .returning(|address| Ok(address.clone()));
        mocks
            .shelters
            .expect_persist()
            .times(1)
            .returning(|shelter| Ok(shelter.clone()));

        let shelter = mocks
            .build()
            .register_shelter(&ShelterRegistration {
                shelter_name: "Casa".into(),
                address: Some(address_details()),
                responsible_email: EMAIL.into(),
            })
            .unwrap();
        assert_eq!(shelter.shelter_name(), "Casa");
        assert_eq!(shelter.responsible_user().email(), EMAIL);
    }

    #[test]
    fn missing_address_is_a_shelter_creation_failure() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_email()
            .returning(|_| Ok(Some(beneficiary())));
        mocks
            .shelters
            .expect_find_by_responsible_email()
            .returning(|_| Ok(None));

        let err = mocks
            .build()
            .register_shelter(&ShelterRegistration {
                shelter_name: "Casa".into(),
                address: None,
                responsible_email: EMAIL.into(),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::ShelterCreation));
        assert!(
            err.chain()
                .skip(1)
                .any(|e| e.detail() == Some(FailureDetail::AddressCreation))
        );
    }

    #[test]
    fn receive_donations_requires_a_shelter() {
        let mut mocks = Mocks::new();
        mocks
            .shelters
            .expect_find_by_responsible_email()
            .returning(|_| Ok(None));

        let err = mocks
            .build()
            .receive_donations(&DonationReceipt {
                responsible_email: EMAIL.into(),
                donations: Some(vec![DonationDetails {
                    description: "Rice".into(),
                    amount: Some(1),
                }]),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::ResponsibleEmailNotAssociated));
    }

    #[test]
    fn receive_donations_rejects_empty_batch() {
        let mut mocks = Mocks::new();
        mocks
            .shelters
            .expect_find_by_responsible_email()
            .returning(|_| Ok(Some(shelter_for(beneficiary()))));
        mocks.donations.expect_persist().never();

        let err = mocks
            .build()
            .receive_donations(&DonationReceipt {
                responsible_email: EMAIL.into(),
                donations: Some(Vec::new()),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::EmptyDonationList));
    }

    #[test]
    fn invalid_donation_stops_the_batch_before_appending() {
        let mut mocks = Mocks::new();
        mocks
            .shelters
            .expect_find_by_responsible_email()
            .returning(|_| Ok(Some(shelter_for(beneficiary()))));
        mocks
            .donations
            .expect_persist()
            .times(1)
            .returning(|donation| Ok(donation.clone()));
        mocks.shelters.expect_persist().never();

        let err = mocks
            .build()
            .receive_donations(&DonationReceipt {
                responsible_email: EMAIL.into(),
                donations: Some(vec![
                    DonationDetails {
                        description: "Rice".into(),
                        amount: Some(2),
                    },
                    DonationDetails {
                        description: " ".into(),
                        amount: Some(2),
                    },
                ]),
            })
            .unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::DonationValidation));
    }

    #[test]
    fn receive_donations_appends_each_in_order() {
        let stored = Arc::new(Mutex::new(shelter_for(beneficiary())));

        let mut mocks = Mocks::new();
        let found = Arc::clone(&stored);
        mocks
            .shelters
            .expect_find_by_responsible_email()
            .returning(move |_| Ok(Some(found.lock().unwrap().clone())));
        let loaded = Arc::clone(&stored);
        mocks
            .shelters
            .expect_find_by_id()
            .returning(move |_| Ok(Some(loaded.lock().unwrap().clone())));
        let saved = Arc::clone(&stored);
        mocks.shelters.expect_persist().times(2).returning(move |shelter| {
            *saved.lock().unwrap() = shelter.clone();
            Ok(shelter.clone())
        });
        mocks
            .donations
            .expect_persist()
            .times(2)
            .returning(|donation| Ok(donation.clone()));

        let updated = mocks
            .build()
            .receive_donations(&DonationReceipt {
                responsible_email: EMAIL.into(),
                donations: Some(vec![
                    DonationDetails {
                        description: "Rice".into(),
                        amount: Some(3),
                    },
                    DonationDetails {
                        description: "Beans".into(),
                        amount: Some(0),
                    },
                ]),
            })
            .unwrap();

        let received: Vec<(&str, i32)> = updated
            .donations()
            .iter()
            .map(|d: &Donation| (d.description(), d.amount()))
            .collect();
        assert_eq!(received, vec![("Rice", 3), ("Beans", 1)]);
    }
}
