//! Package catalog: a registry of packages handing out clones by name.

use packforge_core::Entity;

use crate::package::ServicePackage;

/// Ordered collection of packages.
///
/// Package names are not required to be unique; lookups resolve to the first package
/// registered under a name.
#[derive(Debug, Clone, Default)]
pub struct PackageCatalog {
    packages: Vec<ServicePackage>,
}

impl PackageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package. No validation is performed.
    pub fn add(&mut self, package: ServicePackage) {
        tracing::debug!(package = %package.name(), "registered package");
        self.packages.push(package);
    }

    /// First package whose id (its name) equals `name` exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&ServicePackage> {
        self.packages.iter().find(|p| p.id() == name)
    }

    /// Mutable access to the first package named `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ServicePackage> {
        self.packages.iter_mut().find(|p| p.id() == name)
    }

    /// Clone the first package named `name`.
    ///
    /// The clone is not registered; see [`PackageCatalog::clone_and_register`].
    /// A blank `new_name` derives the clone's name from the source.
    pub fn find_and_clone(&self, name: &str, new_name: &str) -> Option<ServicePackage> {
        let Some(package) = self.find(name) else {
            tracing::debug!(package = %name, "no package with this name");
            return None;
        };
        Some(package.clone_as(new_name))
    }

    /// Clone the first package named `name`, register the clone and return it.
    pub fn clone_and_register(&mut self, name: &str, new_name: &str) -> Option<&ServicePackage> {
        let clone = self.find_and_clone(name, new_name)?;
        self.add(clone);
        self.packages.last()
    }

    pub fn packages(&self) -> &[ServicePackage] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packforge_core::Tariff;
    use packforge_services::{DataService, ServiceKind, VoiceService};
    use rust_decimal_macros::dec;

    fn catalog() -> PackageCatalog {
        let mut post_paid = ServicePackage::new("post-paid");
        post_paid
            .add(DataService::new(dec!(100), dec!(20), 5, 2000, 2000).unwrap())
            .unwrap();

        let mut pre_paid = ServicePackage::new("pre-paid");
        pre_paid
            .add(VoiceService::new(dec!(15), dec!(5), 200, dec!(4)).unwrap())
            .unwrap();

        let mut catalog = PackageCatalog::new();
        catalog.add(post_paid);
        catalog.add(pre_paid);
        catalog
    }

    #[test]
    fn find_and_clone_copies_named_package() {
        let catalog = catalog();
        let clone = catalog.find_and_clone("post-paid", "").unwrap();

        assert_eq!(clone.name(), "post-paid-clone");
        assert!(clone.contains(ServiceKind::Data));
        assert_eq!(clone.list_services(Tariff::First).total, dec!(480));
    }

    #[test]
    fn find_and_clone_does_not_register() {
        let catalog = catalog();
        let _ = catalog.find_and_clone("post-paid", "copy");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("copy").is_none());
    }

    #[test]
    fn lookup_miss_is_none() {
        let catalog = catalog();
        assert!(catalog.find_and_clone("nonexistent", "").is_none());
        // Names are case-sensitive.
        assert!(catalog.find_and_clone("Post-Paid", "").is_none());
        assert!(PackageCatalog::new().find_and_clone("post-paid", "").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let mut catalog = catalog();
        catalog.add(ServicePackage::new("post-paid"));
        assert_eq!(catalog.len(), 3);

        let clone = catalog.find_and_clone("post-paid", "").unwrap();
        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn find_mut_changes_registered_package() {
        let mut catalog = catalog();
        let clone = catalog.find_and_clone("post-paid", "").unwrap();

        catalog
            .find_mut("post-paid")
            .and_then(|p| p.get_mut(ServiceKind::Data))
            .and_then(|s| s.as_data_mut())
            .unwrap()
            .set_max_upload(10);

        assert_eq!(catalog.find("post-paid").unwrap().list_services(Tariff::First).total, dec!(400));
        assert_eq!(clone.list_services(Tariff::First).total, dec!(480));
        assert!(catalog.find_mut("nonexistent").is_none());
    }

    #[test]
    fn clone_and_register_appends_clone() {
        let mut catalog = catalog();
        let registered = catalog.clone_and_register("pre-paid", "pre-paid-2").unwrap();
        assert_eq!(registered.name(), "pre-paid-2");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.packages()[2].name(), "pre-paid-2");

        assert!(catalog.clone_and_register("missing", "").is_none());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn registered_clone_is_independent_of_source() {
        let mut catalog = catalog();
        let mut source = catalog.find_and_clone("post-paid", "source").unwrap();
        catalog.add(source.clone());
        let copy = catalog.clone_and_register("source", "").unwrap().clone();

        source
            .get_mut(ServiceKind::Data)
            .and_then(|s| s.as_data_mut())
            .unwrap()
            .set_max_download(1);

        assert_eq!(copy.name(), "source-clone");
        assert_eq!(copy.list_services(Tariff::First).total, dec!(480));
        assert_eq!(source.list_services(Tariff::First).total, dec!(400));
    }
}
