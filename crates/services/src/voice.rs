//! Voice service: net price plus per-minute charges.

use packforge_core::{DomainResult, Tariff, ValueObject};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::service::{ensure_amount, net_price};
use crate::{BillableService, ServiceKind};

const FIRST_FACTOR: Decimal = dec!(0.85);
const SECOND_FACTOR: Decimal = dec!(0.70);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceService {
    price: Decimal,
    units: Decimal,
    price_per_minute: Decimal,
}

impl ValueObject for VoiceService {}

impl VoiceService {
    pub fn new(
        base_price: Decimal,
        discount: Decimal,
        units: u32,
        price_per_minute: Decimal,
    ) -> DomainResult<Self> {
        ensure_amount("price per minute", price_per_minute)?;
        Ok(Self {
            price: net_price(base_price, discount)?,
            units: Decimal::from(units),
            price_per_minute,
        })
    }

    pub fn price_per_minute(&self) -> Decimal {
        self.price_per_minute
    }

    pub fn set_price_per_minute(&mut self, price_per_minute: Decimal) -> DomainResult<()> {
        ensure_amount("price per minute", price_per_minute)?;
        self.price_per_minute = price_per_minute;
        Ok(())
    }
}

impl BillableService for VoiceService {
    fn kind(&self) -> ServiceKind {
        ServiceKind::Voice
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
        self.price + self.units * self.price_per_minute * factor
    }
}
