//! Form structs bridging raw console input and API payloads.
//!
//! Mirrors what the browser forms did: declarative shape validation on
//! required fields, numeric parsing that treats a blank amount or count
//! as zero, and a payload conversion that only succeeds on valid
//! input. The first violated rule is reported; the backend re-validates
//! everything anyway.

use chrono::{NaiveDate, Utc};
use validator::{Validate, ValidationErrors};

use crate::domain::{
    CreateContribution, CreateSchool, CreateTransfer, DistributeFunds, PaymentMethod,
    ReportRequest,
};
use crate::errors::{AppError, AppResult};

/// Input collected for recording a transfer
#[derive(Debug, Validate)]
pub struct TransferForm {
    #[validate(length(min = 1, message = "A school code is required."))]
    pub school_code: String,

    #[validate(length(min = 1, message = "A donor is required."))]
    pub donor: String,

    pub amount: String,
    pub contribution_type: Option<String>,
    pub account_number: Option<String>,
    pub transactions: String,
    pub school_ids: Vec<i64>,
}

impl TransferForm {
    pub fn into_payload(self) -> AppResult<CreateTransfer> {
        checked(&self)?;
        Ok(CreateTransfer {
            school_code: self.school_code,
            donor: self.donor,
            amount: parse_amount(&self.amount)?,
            contribution_type: self.contribution_type.unwrap_or_default(),
            account_number: self.account_number.unwrap_or_default(),
            number_of_transactions: parse_count(&self.transactions)?,
            timestamp: Utc::now(),
            school_ids: self.school_ids,
        })
    }
}

/// Input collected for registering a school
#[derive(Debug, Validate)]
pub struct SchoolForm {
    #[validate(length(min = 1, message = "A school name is required."))]
    pub name: String,

    pub district: Option<String>,
    pub sector: Option<String>,
}

impl SchoolForm {
    pub fn into_payload(self) -> AppResult<CreateSchool> {
        checked(&self)?;
        Ok(CreateSchool::new(self.name, self.district, self.sector))
    }
}

/// Input collected for allocating funds to a school
#[derive(Debug, Validate)]
pub struct DistributionForm {
    #[validate(range(min = 1, message = "A receiving school is required."))]
    pub school: i64,

    pub amount: String,
}

impl DistributionForm {
    pub fn into_payload(self) -> AppResult<DistributeFunds> {
        checked(&self)?;
        let amount = parse_amount(&self.amount)?;
        if amount <= 0.0 {
            return Err(AppError::validation("Amount must be greater than zero."));
        }
        Ok(DistributeFunds {
            school: self.school,
            amount,
        })
    }
}

/// Input collected for recording or simulating a contribution
#[derive(Debug, Validate)]
pub struct ContributionForm {
    pub contributor_name: String,
    pub amount: String,
    pub payment_method: PaymentMethod,
}

impl ContributionForm {
    pub fn into_payload(self) -> AppResult<CreateContribution> {
        Ok(CreateContribution {
            contributor_name: self.contributor_name,
            amount: parse_amount(&self.amount)?,
            payment_method: self.payment_method,
        })
    }
}

/// Input collected for generating a report
#[derive(Debug, Validate)]
pub struct ReportForm {
    #[validate(length(min = 1, message = "A report name is required."))]
    pub name: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ReportForm {
    pub fn into_payload(self) -> AppResult<ReportRequest> {
        checked(&self)?;
        Ok(ReportRequest {
            report_name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

/// Run the declarative rules, surfacing the first message.
fn checked(form: &impl Validate) -> AppResult<()> {
    form.validate().map_err(first_message)
}

fn first_message(errors: ValidationErrors) -> AppError {
    for field_errors in errors.field_errors().values() {
        if let Some(error) = field_errors.first() {
            if let Some(message) = &error.message {
                return AppError::validation(message.to_string());
            }
        }
    }
    AppError::validation("Invalid input.")
}

/// Parse a monetary amount; a blank field counts as zero.
fn parse_amount(raw: &str) -> AppResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse()
        .map_err(|_| AppError::validation(format!("'{}' is not a valid amount.", trimmed)))
}

/// Parse a transaction count; a blank field counts as zero.
fn parse_count(raw: &str) -> AppResult<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| AppError::validation(format!("'{}' is not a valid count.", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_amount_and_count_parse_to_zero() {
        let payload = TransferForm {
            school_code: "GS-001".to_string(),
            donor: "ACME".to_string(),
            amount: "".to_string(),
            contribution_type: None,
            account_number: None,
            transactions: "  ".to_string(),
            school_ids: vec![],
        }
        .into_payload()
        .unwrap();

        assert_eq!(payload.amount, 0.0);
        assert_eq!(payload.number_of_transactions, 0);
    }

    #[test]
    fn missing_required_field_reports_its_message() {
        let result = TransferForm {
            school_code: "".to_string(),
            donor: "ACME".to_string(),
            amount: "100".to_string(),
            contribution_type: None,
            account_number: None,
            transactions: "1".to_string(),
            school_ids: vec![],
        }
        .into_payload();

        match result {
            Err(AppError::Validation(message)) => {
                assert_eq!(message, "A school code is required.")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn garbled_amount_is_rejected() {
        let result = ContributionForm {
            contributor_name: "Aline".to_string(),
            amount: "12x".to_string(),
            payment_method: PaymentMethod::Momo,
        }
        .into_payload();
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn distribution_requires_positive_amount() {
        let blank = DistributionForm {
            school: 3,
            amount: "".to_string(),
        }
        .into_payload();
        assert!(matches!(blank, Err(AppError::Validation(_))));

        let funds = DistributionForm {
            school: 3,
            amount: "25000".to_string(),
        }
        .into_payload()
        .unwrap();
        assert_eq!(funds.amount, 25000.0);
    }

    #[test]
    fn report_form_requires_a_name() {
        let result = ReportForm {
            name: " ".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        }
        .into_payload();
        // length(min = 1) passes on whitespace; the backend rejects it.
        assert!(result.is_ok());

        let result = ReportForm {
            name: String::new(),
            start_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        }
        .into_payload();
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
