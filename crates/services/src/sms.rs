//! SMS service: units beyond a free allowance.

use packforge_core::{DomainError, DomainResult, Tariff, ValueObject};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::service::net_price;
use crate::{BillableService, ServiceKind};

const FIRST_FACTOR: Decimal = dec!(2.0);
const SECOND_FACTOR: Decimal = dec!(0.7);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsService {
    price: Decimal,
    units: Decimal,
}

impl ValueObject for SmsService {}

impl SmsService {
    /// `units` are reduced by `free_units`; the free allowance may not exceed `units`.
    pub fn new(
        base_price: Decimal,
        discount: Decimal,
        units: u32,
        free_units: u32,
    ) -> DomainResult<Self> {
        let billable = units.checked_sub(free_units).ok_or_else(|| {
            DomainError::validation(format!("free units {free_units} exceed units {units}"))
        })?;
        Ok(Self {
            price: net_price(base_price, discount)?,
            units: Decimal::from(billable),
        })
    }
}

impl BillableService for SmsService {
    fn kind(&self) -> ServiceKind {
        ServiceKind::Sms
    }

    fn price(&self) -> Decimal {
        self.price
    }

    fn units(&self) -> Decimal {
        self.units
    }

    fn calculate_price(&self, tariff: Tariff) -> Decimal {
        let factor = match tariff {
            Tariff::First => FIRST_FACTOR,
            Tariff::Second => SECOND_FACTOR,
            Tariff::Standard => Decimal::ONE,
        };
        self.price * self.units * factor
    }
}
