//! Commitment of funds to an investment package.

use crate::form::FieldSchema;
use crate::portal::InvestmentPackage;
use crate::wizard::{DefinitionError, StepDefinition, WizardDefinition};

pub const FLOW: &str = "investment";

pub const AMOUNT: &str = "amount";
pub const ACCOUNT_TYPE: &str = "accountType";
pub const EIN: &str = "ein";
pub const CUSTODIAN_NAME: &str = "custodianName";
pub const FUNDING_METHOD: &str = "fundingMethod";
pub const BANK_NAME: &str = "bankName";
pub const ACCOUNT_NUMBER: &str = "accountNumber";
pub const ROUTING_NUMBER: &str = "routingNumber";
pub const WIRE_INSTRUCTIONS: &str = "wireInstructions";
pub const AGREEMENT_ACCEPTED: &str = "agreementAccepted";

pub const INDIVIDUAL: &str = "individual";
pub const BUSINESS: &str = "business";
pub const CUSTODIAN: &str = "custodian";
pub const BANK_TRANSFER: &str = "bank_transfer";
pub const WIRE_TRANSFER: &str = "wire_transfer";

/// Four-step commitment: amount, account type, funding, review.
///
/// The amount is bounded by the package's minimum (when positive) and
/// maximum (when published).
pub fn investment_flow(package: &InvestmentPackage) -> Result<WizardDefinition, DefinitionError> {
    let min = (package.min_investment > 0.0).then_some(package.min_investment);

    WizardDefinition::new(
        FLOW,
        vec![
            StepDefinition::new(
                1,
                "Investment Amount",
                vec![FieldSchema::number(AMOUNT, "Investment amount")
                    .required()
                    .range(min, package.max_investment)],
            ),
            StepDefinition::new(
                2,
                "Account Type",
                vec![
                    FieldSchema::select(ACCOUNT_TYPE, "Account type", [INDIVIDUAL, BUSINESS, CUSTODIAN])
                        .required(),
                    FieldSchema::text(EIN, "Employer Identification Number")
                        .required_when(ACCOUNT_TYPE, BUSINESS)
                        .sensitive(),
                    FieldSchema::text(CUSTODIAN_NAME, "Custodian name")
                        .required_when(ACCOUNT_TYPE, CUSTODIAN),
                ],
            ),
            StepDefinition::new(
                3,
                "Funding Information",
                vec![
                    FieldSchema::select(FUNDING_METHOD, "Funding method", [BANK_TRANSFER, WIRE_TRANSFER])
                        .required(),
                    FieldSchema::text(BANK_NAME, "Bank name").required_when(FUNDING_METHOD, BANK_TRANSFER),
                    FieldSchema::text(ACCOUNT_NUMBER, "Account number")
                        .required_when(FUNDING_METHOD, BANK_TRANSFER)
                        .sensitive(),
                    FieldSchema::text(ROUTING_NUMBER, "Routing number")
                        .required_when(FUNDING_METHOD, BANK_TRANSFER)
                        .sensitive(),
                    FieldSchema::checkbox(WIRE_INSTRUCTIONS, "Wire transfer instructions")
                        .required_when(FUNDING_METHOD, WIRE_TRANSFER),
                ],
            ),
            StepDefinition::new(
                4,
                "Review & Confirm",
                vec![FieldSchema::checkbox(AGREEMENT_ACCEPTED, "Investment agreement").required()],
            ),
        ],
    )
}
