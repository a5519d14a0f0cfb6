//! The sample run.

use anyhow::Context;
use packforge_packages::{PackageCatalog, PriceStatement, ServicePackage};
use packforge_services::{DataService, Service, ServiceKind, SmsService, VoiceService};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::config::DemoConfig;

pub const POST_PAID: &str = "post-paid";
pub const PRE_PAID: &str = "pre-paid";

/// A captioned listing produced during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub caption: String,
    pub statement: PriceStatement,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub sections: Vec<ReportSection>,
    /// Adds refused because the package already held that kind of service.
    pub rejected_adds: usize,
    /// Services removed by kind.
    pub removed: usize,
}

impl DemoReport {
    fn record(&mut self, caption: impl Into<String>, statement: PriceStatement) {
        self.sections.push(ReportSection {
            caption: caption.into(),
            statement,
        });
    }
}

impl core::fmt::Display for DemoReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section.caption)?;
            writeln!(f, "{}", section.statement)?;
        }
        Ok(())
    }
}

/// Build the two sample packages.
pub fn sample_packages() -> anyhow::Result<(ServicePackage, ServicePackage)> {
    let mut post_paid = ServicePackage::new(POST_PAID);
    post_paid.add(DataService::new(dec!(100), dec!(20), 5, 2000, 2000)?)?;
    post_paid.add(VoiceService::new(dec!(100), dec!(20), 100, dec!(2))?)?;
    post_paid.add(SmsService::new(dec!(20), dec!(15), 100, 90)?)?;

    let mut pre_paid = ServicePackage::new(PRE_PAID);
    pre_paid.add(DataService::new(dec!(20), dec!(15), 5, 90, 40)?)?;
    pre_paid.add(VoiceService::new(dec!(15), dec!(5), 200, dec!(4))?)?;

    Ok((post_paid, pre_paid))
}

pub fn run(config: &DemoConfig) -> anyhow::Result<DemoReport> {
    let tariff = config.tariff;
    let mut report = DemoReport::default();
    let mut catalog = PackageCatalog::new();

    let (post_paid, pre_paid) = sample_packages()?;
    catalog.add(post_paid);
    catalog.add(pre_paid);

    report.record("Service package 1", find(&catalog, POST_PAID)?.list_services(tariff));
    report.record("Service package 2", find(&catalog, PRE_PAID)?.list_services(tariff));

    let clone = catalog
        .find_and_clone(POST_PAID, "")
        .with_context(|| format!("package {POST_PAID} is not in the catalog"))?;
    let clone_name = clone.name().to_string();

    let data = find_mut(&mut catalog, POST_PAID)?
        .get_mut(ServiceKind::Data)
        .and_then(Service::as_data_mut)
        .context("post-paid package has no data service")?;
    data.set_max_download(5);
    data.set_max_upload(2);
    let changed_data: Service = data.clone().into();

    catalog.add(clone);

    report.record(
        "Service package 1 has changed pricing due to changes to max download and max upload",
        find(&catalog, POST_PAID)?.list_services(tariff),
    );
    report.record(
        "Service package 3 is the same as the package it was cloned from",
        find(&catalog, &clone_name)?.list_services(tariff),
    );

    let pre_paid = find_mut(&mut catalog, PRE_PAID)?;
    for _ in 0..2 {
        match pre_paid.add(changed_data.clone()) {
            Ok(()) => {}
            Err(err) if err.is_conflict() => report.rejected_adds += 1,
            Err(err) => return Err(err.into()),
        }
    }
    report.record("Service package 2 is unchanged", pre_paid.list_services(tariff));

    report.removed = pre_paid.remove(ServiceKind::Data);
    report.record("Service package 2", pre_paid.list_services(tariff));

    Ok(report)
}

fn find<'a>(catalog: &'a PackageCatalog, name: &str) -> anyhow::Result<&'a ServicePackage> {
    catalog
        .find(name)
        .with_context(|| format!("package {name} is not in the catalog"))
}

fn find_mut<'a>(
    catalog: &'a mut PackageCatalog,
    name: &str,
) -> anyhow::Result<&'a mut ServicePackage> {
    catalog
        .find_mut(name)
        .with_context(|| format!("package {name} is not in the catalog"))
}
