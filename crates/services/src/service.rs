//! The service capability set and the sum type stored in packages.

use packforge_core::{DomainError, DomainResult, Tariff, ValueObject};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{DataService, ServiceKind, SmsService, VoiceService};

/// Capability set shared by every billable service.
///
/// `price` and `units` are fixed at construction; only variant-specific pricing inputs
/// may change afterwards. Services are value objects, so `clone` is the prototype copy.
pub trait BillableService: ValueObject {
    /// Variant tag.
    fn kind(&self) -> ServiceKind;

    /// Net unit price (base price minus discount).
    fn price(&self) -> Decimal;

    /// Billable units.
    fn units(&self) -> Decimal;

    /// Amount due under `tariff`.
    fn calculate_price(&self, tariff: Tariff) -> Decimal;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}

/// A billable service of any variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Service {
    Data(DataService),
    Voice(VoiceService),
    Sms(SmsService),
}

impl Service {
    pub fn as_data(&self) -> Option<&DataService> {
        match self {
            Service::Data(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_data_mut(&mut self) -> Option<&mut DataService> {
        match self {
            Service::Data(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_voice(&self) -> Option<&VoiceService> {
        match self {
            Service::Voice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_voice_mut(&mut self) -> Option<&mut VoiceService> {
        match self {
            Service::Voice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sms(&self) -> Option<&SmsService> {
        match self {
            Service::Sms(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! delegate {
    ($self:ident, $s:ident => $body:expr) => {
        match $self {
            Service::Data($s) => $body,
            Service::Voice($s) => $body,
            Service::Sms($s) => $body,
        }
    };
}

impl ValueObject for Service {}

impl BillableService for Service {
    fn kind(&self) -> ServiceKind {
        delegate!(self, s => s.kind())
    }

    fn price(&self) -> Decimal {
        delegate!(self, s => s.price())
    }

    fn units(&self) -> Decimal {
        delegate!(self, s => s.units())
    }

    fn calculate_price(&self, tariff: Tariff) -> Decimal {
        delegate!(self, s => s.calculate_price(tariff))
    }
}

impl From<DataService> for Service {
    fn from(value: DataService) -> Self {
        Service::Data(value)
    }
}

impl From<VoiceService> for Service {
    fn from(value: VoiceService) -> Self {
        Service::Voice(value)
    }
}

impl From<SmsService> for Service {
    fn from(value: SmsService) -> Self {
        Service::Sms(value)
    }
}

/// Upper bound for every monetary input (base price, discount, price per minute).
///
/// With units capped at `u32::MAX` and the largest tariff factor of 2, no price or
/// package total built from bounded inputs can overflow `Decimal`.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Net price after discount. Both inputs must be within `0..=MAX_AMOUNT` and the
/// discount may not exceed the base price.
pub(crate) fn net_price(base_price: Decimal, discount: Decimal) -> DomainResult<Decimal> {
    ensure_amount("base price", base_price)?;
    ensure_amount("discount", discount)?;
    if discount > base_price {
        return Err(DomainError::validation(format!(
            "discount {discount} exceeds base price {base_price}"
        )));
    }
    Ok(base_price - discount)
}

pub(crate) fn ensure_amount(field: &str, value: Decimal) -> DomainResult<()> {
    if value < Decimal::ZERO {
        return Err(DomainError::validation(format!("{field} must not be negative")));
    }
    if value > MAX_AMOUNT {
        return Err(DomainError::validation(format!(
            "{field} {value} exceeds the maximum of {MAX_AMOUNT}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn services() -> Vec<Service> {
        vec![
            DataService::new(dec!(100), dec!(20), 5, 2000, 2000).unwrap().into(),
            VoiceService::new(dec!(100), dec!(20), 100, dec!(2)).unwrap().into(),
            SmsService::new(dec!(20), dec!(15), 100, 90).unwrap().into(),
        ]
    }

    #[test]
    fn enum_delegates_to_variant() {
        let prices: Vec<Decimal> = services()
            .iter()
            .map(|s| s.calculate_price(Tariff::First))
            .collect();
        assert_eq!(prices, vec![dec!(480), dec!(250), dec!(100)]);
    }

    #[test]
    fn display_names_follow_variant() {
        let names: Vec<&str> = services().iter().map(|s| s.display_name()).collect();
        assert_eq!(names, vec!["DataService", "VoiceService", "SmsService"]);
    }

    #[test]
    fn accessors_match_variant_only() {
        let mut all = services();
        assert!(all[0].as_data().is_some());
        assert!(all[0].as_voice().is_none());
        assert!(all[1].as_voice_mut().is_some());
        assert!(all[1].as_data_mut().is_none());
        assert!(all[2].as_sms().is_some());
    }

    #[test]
    fn clone_is_independent() {
        let original: Service = DataService::new(dec!(100), dec!(20), 5, 2000, 2000)
            .unwrap()
            .into();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        let data = copy.as_data_mut().unwrap();
        data.set_max_download(5);
        data.set_max_upload(2);

        assert_eq!(original.as_data().unwrap().max_download(), 2000);
        assert_eq!(original.calculate_price(Tariff::First), dec!(480));
        assert_eq!(copy.calculate_price(Tariff::First), dec!(400));
    }

    fn prototype<S: BillableService>(service: &S) -> S {
        service.clone()
    }

    #[test]
    fn every_billable_service_copies_as_a_value() {
        let voice = VoiceService::new(dec!(100), dec!(20), 100, dec!(2)).unwrap();
        let mut copy = prototype(&voice);
        copy.set_price_per_minute(dec!(3)).unwrap();

        assert_eq!(voice.calculate_price(Tariff::First), dec!(250));
        assert_eq!(copy.calculate_price(Tariff::First), dec!(335));
        assert_eq!(prototype(&services()[2]), services()[2]);
    }

    #[test]
    fn net_price_rejects_bad_input() {
        assert_eq!(net_price(dec!(100), dec!(20)).unwrap(), dec!(80));
        assert!(matches!(
            net_price(dec!(-1), dec!(0)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            net_price(dec!(10), dec!(-1)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            net_price(dec!(10), dec!(11)),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn amounts_above_maximum_are_rejected() {
        let err = DataService::new(Decimal::MAX, Decimal::ZERO, 2, 2000, 2000).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(VoiceService::new(dec!(1), dec!(0), 1, Decimal::MAX).is_err());
        assert!(SmsService::new(MAX_AMOUNT + dec!(0.01), dec!(0), 2, 1).is_err());
        assert!(net_price(MAX_AMOUNT, MAX_AMOUNT).is_ok());
    }

    #[test]
    fn largest_accepted_inputs_price_without_overflow() {
        let largest: Vec<Service> = vec![
            DataService::new(MAX_AMOUNT, dec!(0), u32::MAX, 2000, 2000).unwrap().into(),
            VoiceService::new(MAX_AMOUNT, dec!(0), u32::MAX, MAX_AMOUNT).unwrap().into(),
            SmsService::new(MAX_AMOUNT, dec!(0), u32::MAX, 0).unwrap().into(),
        ];
        for code in -1..=3 {
            let tariff = Tariff::from_code(code);
            let total: Decimal = largest.iter().map(|s| s.calculate_price(tariff)).sum();
            assert!(total > Decimal::ZERO);
        }
        assert_eq!(
            largest[2].calculate_price(Tariff::First),
            MAX_AMOUNT * Decimal::from(u32::MAX) * dec!(2)
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let service: Service = SmsService::new(dec!(20), dec!(15), 100, 90).unwrap().into();
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["kind"], "sms");
    }
}
