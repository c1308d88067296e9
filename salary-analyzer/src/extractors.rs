use serde::Deserialize;
use serde_json::Value;
use vacancy_scraper::Posting;

use crate::api::{Result, SalaryExtractor};
use crate::estimator::estimate;

/// hh.ru nests the range under `salary`, currency codes are upper case.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadHunterSalary;

impl HeadHunterSalary {
    pub const CURRENCY: &'static str = "RUR";
}

/// Read ahead of the bounds, a posting in another currency is skipped
/// whatever its bounds look like.
#[derive(Debug, Deserialize)]
struct CurrencyTag {
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HeadHunterRange {
    from: Option<f64>,
    to: Option<f64>,
}

impl SalaryExtractor for HeadHunterSalary {
    fn extract(&self, posting: &Posting) -> Result<Option<f64>> {
        let salary = match posting.field("salary") {
            None | Some(Value::Null) => return Ok(None),
            Some(salary) => salary,
        };
        let tag = CurrencyTag::deserialize(salary)?;
        if tag.currency.as_deref() != Some(Self::CURRENCY) {
            return Ok(None);
        }
        let range = HeadHunterRange::deserialize(salary)?;
        Ok(estimate(range.from, range.to))
    }
}

/// superjob.ru keeps the range on the posting itself, currency codes are lower case.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperJobSalary;

impl SuperJobSalary {
    pub const CURRENCY: &'static str = "rub";
}

#[derive(Debug, Deserialize)]
struct SuperJobPayment {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
}

impl SalaryExtractor for SuperJobSalary {
    fn extract(&self, posting: &Posting) -> Result<Option<f64>> {
        let tag: CurrencyTag = posting.decode()?;
        if tag.currency.as_deref() != Some(Self::CURRENCY) {
            return Ok(None);
        }
        let payment: SuperJobPayment = posting.decode()?;
        Ok(estimate(payment.payment_from, payment.payment_to))
    }
}
