//! Priced listing of a package's services.

use packforge_core::Tariff;
use packforge_services::ServiceKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced service in a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// 1-based position in insertion order.
    pub position: usize,
    pub kind: ServiceKind,
    pub display_name: String,
    pub price: Decimal,
}

/// Services of a package priced under one tariff, plus their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceStatement {
    pub package: String,
    pub tariff: Tariff,
    pub lines: Vec<StatementLine>,
    pub total: Decimal,
}

impl PriceStatement {
    pub(crate) fn new(package: impl Into<String>, tariff: Tariff) -> Self {
        Self {
            package: package.into(),
            tariff,
            lines: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    pub(crate) fn push(&mut self, kind: ServiceKind, price: Decimal) {
        self.lines.push(StatementLine {
            position: self.lines.len() + 1,
            kind,
            display_name: kind.display_name().to_string(),
            price,
        });
        self.total += price;
    }

    pub fn price_of(&self, kind: ServiceKind) -> Option<Decimal> {
        self.lines.iter().find(|l| l.kind == kind).map(|l| l.price)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Console listing: a header, one numbered line per service, then the total.
impl core::fmt::Display for PriceStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Service package: {}", self.package)?;
        for line in &self.lines {
            writeln!(f, "{}. {}, {}", line.position, line.display_name, line.price)?;
        }
        writeln!(f, "Total: {}", self.total)
    }
}
