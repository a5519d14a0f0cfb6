use packforge_core::{DomainError, DomainResult, Entity, Tariff};
use packforge_services::{BillableService, Service, ServiceKind};

use crate::statement::PriceStatement;

/// Appended to a package name when a clone is requested without a name.
pub const CLONE_SUFFIX: &str = "-clone";

/// A named bundle holding at most one service per [`ServiceKind`].
///
/// Services are kept in insertion order, which is also the listing order.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicePackage {
    name: String,
    services: Vec<Service>,
}

impl ServicePackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            services: Vec::new(),
        }
    }

    /// Create a package with an initial set of services.
    ///
    /// The uniqueness rule applies: a service whose kind is already present is dropped.
    pub fn with_services(
        name: impl Into<String>,
        services: impl IntoIterator<Item = Service>,
    ) -> Self {
        let mut package = Self::new(name);
        for service in services {
            if let Err(err) = package.add(service) {
                tracing::debug!(package = %package.name, %err, "initial service dropped");
            }
        }
        package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn contains(&self, kind: ServiceKind) -> bool {
        self.position(kind).is_some()
    }

    pub fn get(&self, kind: ServiceKind) -> Option<&Service> {
        self.position(kind).map(|i| &self.services[i])
    }

    pub fn get_mut(&mut self, kind: ServiceKind) -> Option<&mut Service> {
        self.position(kind).map(move |i| &mut self.services[i])
    }

    /// Add a service unless one of the same kind is already present.
    ///
    /// A rejected add leaves the package unchanged and returns `DomainError::Conflict`.
    pub fn add(&mut self, service: impl Into<Service>) -> DomainResult<()> {
        let service = service.into();
        let kind = service.kind();
        if self.contains(kind) {
            tracing::warn!(package = %self.name, service = %kind, "service of this type already exists");
            return Err(DomainError::conflict(format!(
                "service of type {kind} already exists in package {}",
                self.name
            )));
        }

        self.services.push(service);
        tracing::info!(package = %self.name, service = %kind, "added service");
        Ok(())
    }

    /// Remove the service of `kind`. Returns how many services were removed (0 or 1).
    pub fn remove(&mut self, kind: ServiceKind) -> usize {
        let before = self.services.len();
        self.services.retain(|s| s.kind() != kind);
        let removed = before - self.services.len();

        if removed > 0 {
            tracing::info!(package = %self.name, service = %kind, "removed service");
        } else {
            tracing::info!(package = %self.name, service = %kind, "no service of this type found");
        }
        removed
    }

    /// Clone every service into a new package.
    ///
    /// A blank `new_name` (empty or whitespace only) yields `"<name>-clone"`.
    pub fn clone_as(&self, new_name: &str) -> ServicePackage {
        let name = if new_name.trim().is_empty() {
            format!("{}{CLONE_SUFFIX}", self.name)
        } else {
            new_name.to_string()
        };

        tracing::debug!(source = %self.name, clone = %name, services = self.services.len(), "cloning package");
        ServicePackage {
            name,
            services: self.services.iter().map(Service::clone).collect(),
        }
    }

    /// Price every service under `tariff`, in insertion order.
    pub fn list_services(&self, tariff: Tariff) -> PriceStatement {
        let mut statement = PriceStatement::new(self.name.as_str(), tariff);
        for service in &self.services {
            statement.push(service.kind(), service.calculate_price(tariff));
        }
        tracing::debug!(package = %self.name, %tariff, total = %statement.total, "listed services");
        statement
    }

    fn position(&self, kind: ServiceKind) -> Option<usize> {
        self.services.iter().position(|s| s.kind() == kind)
    }
}

impl Entity for ServicePackage {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
