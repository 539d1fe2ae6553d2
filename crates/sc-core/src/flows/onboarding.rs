//! Investor account creation.

use crate::form::FieldSchema;
use crate::wizard::{DefinitionError, StepDefinition, WizardDefinition};

pub const FLOW: &str = "onboarding";

pub const EMAIL: &str = "email";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const PARTNER_CODE: &str = "partnerCode";
pub const PREFIX: &str = "prefix";
pub const FIRST_NAME: &str = "firstName";
pub const MIDDLE_NAME: &str = "middleName";
pub const LAST_NAME: &str = "lastName";
pub const SUFFIX: &str = "suffix";
pub const DATE_OF_BIRTH: &str = "dateOfBirth";
pub const SSN: &str = "ssn";
pub const STREET_ADDRESS: &str = "streetAddress";
pub const UNIT_NUMBER: &str = "unitNumber";
pub const CITY: &str = "city";
pub const STATE: &str = "state";
pub const ZIP_CODE: &str = "zipCode";
pub const COUNTRY: &str = "country";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const INVESTMENT_EXPERIENCE: &str = "investmentExperience";
pub const ANNUAL_INCOME: &str = "annualIncome";
pub const NET_WORTH: &str = "netWorth";
pub const ACCREDITED: &str = "accredited";
pub const NDA_ACCEPTED: &str = "ndaAccepted";
pub const PLATFORM_AGREEMENT_ACCEPTED: &str = "platformAgreementAccepted";
pub const MARKETING_CONSENT: &str = "marketingConsent";

pub const MIN_PASSWORD_LENGTH: usize = 8;

const US_STATES: [&str; 50] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
    "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah",
    "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

const COUNTRIES: [&str; 3] = ["US", "CA", "Other"];

const EXPERIENCE: [&str; 4] = ["none", "limited", "moderate", "extensive"];
const INCOME_BANDS: [&str; 4] = ["under_200k", "200k_300k", "300k_1m", "over_1m"];
const NET_WORTH_BANDS: [&str; 4] = ["under_1m", "1m_5m", "5m_10m", "over_10m"];

/// Six-step sign-up: account, identity, address, password, accreditation,
/// agreements.
pub fn onboarding_flow() -> Result<WizardDefinition, DefinitionError> {
    WizardDefinition::new(
        FLOW,
        vec![
            StepDefinition::new(
                1,
                "Create Account",
                vec![
                    FieldSchema::email(EMAIL, "Email").required(),
                    FieldSchema::tel(PHONE_NUMBER, "Phone number").required(),
                    FieldSchema::text(PARTNER_CODE, "Partner code"),
                ],
            ),
            StepDefinition::new(
                2,
                "Personal Information",
                vec![
                    FieldSchema::text(PREFIX, "Prefix"),
                    FieldSchema::text(FIRST_NAME, "First name").required(),
                    FieldSchema::text(MIDDLE_NAME, "Middle name"),
                    FieldSchema::text(LAST_NAME, "Last name").required(),
                    FieldSchema::text(SUFFIX, "Suffix"),
                    FieldSchema::date(DATE_OF_BIRTH, "Date of birth").required(),
                    // Format is checked by the KYC provider.
                    FieldSchema::text(SSN, "Social Security number")
                        .required()
                        .sensitive(),
                ],
            ),
            StepDefinition::new(
                3,
                "Address",
                vec![
                    FieldSchema::text(STREET_ADDRESS, "Street address").required(),
                    FieldSchema::text(UNIT_NUMBER, "Unit number"),
                    FieldSchema::text(CITY, "City").required(),
                    FieldSchema::select(STATE, "State", US_STATES).required(),
                    FieldSchema::text(ZIP_CODE, "ZIP code").required(),
                    FieldSchema::select(COUNTRY, "Country", COUNTRIES)
                        .required()
                        .default_value("US"),
                ],
            ),
            StepDefinition::new(
                4,
                "Create A Password",
                vec![
                    FieldSchema::password(PASSWORD, "Password")
                        .required()
                        .min_length(MIN_PASSWORD_LENGTH),
                    FieldSchema::password(CONFIRM_PASSWORD, "Confirm password")
                        .required()
                        .matches(PASSWORD, "Password"),
                ],
            ),
            StepDefinition::new(
                5,
                "Accredited Investor Certification",
                vec![
                    FieldSchema::select(INVESTMENT_EXPERIENCE, "Investment experience", EXPERIENCE)
                        .required(),
                    FieldSchema::select(ANNUAL_INCOME, "Annual income", INCOME_BANDS).required(),
                    FieldSchema::select(NET_WORTH, "Net worth", NET_WORTH_BANDS).required(),
                    FieldSchema::checkbox(ACCREDITED, "Accredited investor certification")
                        .required(),
                ],
            ),
            StepDefinition::new(
                6,
                "Online Access Agreement",
                vec![
                    FieldSchema::checkbox(NDA_ACCEPTED, "Non-disclosure agreement").required(),
                    FieldSchema::checkbox(PLATFORM_AGREEMENT_ACCEPTED, "Platform agreement")
                        .required(),
                    FieldSchema::checkbox(MARKETING_CONSENT, "Marketing consent"),
                ],
            ),
        ],
    )
}
