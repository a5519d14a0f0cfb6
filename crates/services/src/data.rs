//! Data service: priced by bandwidth band.

use packforge_core::{DomainResult, Tariff, ValueObject};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::service::net_price;
use crate::{BillableService, ServiceKind};

/// Download threshold separating the high and low bands (inclusive on both sides).
pub const DOWNLOAD_THRESHOLD: u32 = 1024;
/// Upload threshold separating the high and low bands (inclusive on both sides).
pub const UPLOAD_THRESHOLD: u32 = 512;

const HIGH_BAND_FIRST: Decimal = dec!(1.2);
const HIGH_BAND_SECOND: Decimal = dec!(1.1);
const LOW_BAND_FIRST: Decimal = dec!(1.0);
const LOW_BAND_SECOND: Decimal = dec!(0.9);

/// Bandwidth classification of a data service.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Band {
    /// Download and upload both at or above their thresholds.
    High,
    /// Download and upload both at or below their thresholds.
    Low,
    /// One figure above its threshold and the other below.
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataService {
    price: Decimal,
    units: Decimal,
    max_download: u32,
    max_upload: u32,
}

impl ValueObject for DataService {}

impl DataService {
    pub fn new(
        base_price: Decimal,
        discount: Decimal,
        units: u32,
        max_download: u32,
        max_upload: u32,
    ) -> DomainResult<Self> {
        Ok(Self {
            price: net_price(base_price, discount)?,
            units: Decimal::from(units),
            max_download,
            max_upload,
        })
    }

    pub fn max_download(&self) -> u32 {
        self.max_download
    }

    pub fn max_upload(&self) -> u32 {
        self.max_upload
    }

    pub fn set_max_download(&mut self, max_download: u32) {
        self.max_download = max_download;
    }

    pub fn set_max_upload(&mut self, max_upload: u32) {
        self.max_upload = max_upload;
    }

    /// Exactly-at-threshold figures satisfy both bands; `High` is checked first and wins.
    pub fn band(&self) -> Band {
        let (down, up) = (self.max_download, self.max_upload);
        if down >= DOWNLOAD_THRESHOLD && up >= UPLOAD_THRESHOLD {
            Band::High
        } else if down <= DOWNLOAD_THRESHOLD && up <= UPLOAD_THRESHOLD {
            Band::Low
        } else {
            Band::Mixed
        }
    }
}

impl BillableService for DataService {
    fn kind(&self) -> ServiceKind {
        ServiceKind::Data
    }

    fn price(&self) -> Decimal {
        self.price
    }

    fn units(&self) -> Decimal {
        self.units
    }

    fn calculate_price(&self, tariff: Tariff) -> Decimal {
        let factor = match (self.band(), tariff) {
            (Band::High, Tariff::First) => HIGH_BAND_FIRST,
            (Band::High, Tariff::Second) => HIGH_BAND_SECOND,
            (Band::Low, Tariff::First) => LOW_BAND_FIRST,
            (Band::Low, Tariff::Second) => LOW_BAND_SECOND,
            _ => Decimal::ONE,
        };
        self.price * self.units * factor
    }
}
