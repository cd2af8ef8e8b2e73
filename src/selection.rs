//! Selection
//!
//! An ordered set of chosen services, and the rules for changing it. Extra
//! services can only join a selection that already holds one of their main
//! services, and leave it as soon as the last such main service is removed.

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    catalog::Catalog,
    services::{ServiceAction, ServiceType, ServiceUpdate},
};

/// Services chosen by a client, in the order they were chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    services: SmallVec<[ServiceType; 5]>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Selection::default()
    }

    /// Whether `service` is selected.
    pub fn contains(&self, service: ServiceType) -> bool {
        self.services.contains(&service)
    }

    /// Whether any of `services` is selected.
    pub fn contains_any(&self, services: &[ServiceType]) -> bool {
        services.iter().any(|service| self.contains(*service))
    }

    /// Iterate over selected services in selection order.
    pub fn iter(&self) -> impl Iterator<Item = ServiceType> + '_ {
        self.services.iter().copied()
    }

    /// Selected services in selection order.
    pub fn as_slice(&self) -> &[ServiceType] {
        &self.services
    }

    /// Number of selected services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    fn push(&mut self, service: ServiceType) {
        if !self.contains(service) {
            self.services.push(service);
        }
    }

    fn remove(&mut self, service: ServiceType) {
        self.services.retain(|selected| *selected != service);
    }
}

impl FromIterator<ServiceType> for Selection {
    /// Collect services into a selection, keeping the first of any duplicates.
    fn from_iter<I: IntoIterator<Item = ServiceType>>(iter: I) -> Self {
        let mut selection = Selection::new();

        for service in iter {
            selection.push(service);
        }

        selection
    }
}

impl<const N: usize> From<[ServiceType; N]> for Selection {
    fn from(services: [ServiceType; N]) -> Self {
        services.into_iter().collect()
    }
}

impl From<&[ServiceType]> for Selection {
    fn from(services: &[ServiceType]) -> Self {
        services.iter().copied().collect()
    }
}

impl From<Vec<ServiceType>> for Selection {
    fn from(services: Vec<ServiceType>) -> Self {
        services.into_iter().collect()
    }
}

impl From<Selection> for Vec<ServiceType> {
    fn from(selection: Selection) -> Self {
        selection.services.into_vec()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = ServiceType;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ServiceType>>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter().copied()
    }
}

/// Apply a select or deselect event to `selection`, returning the new selection.
///
/// The input is left untouched. Requests that break the main/extra rules are
/// ignored rather than reported.
pub fn update(catalog: &Catalog, selection: &Selection, update: ServiceUpdate) -> Selection {
    match update.action {
        ServiceAction::Select => select(catalog, selection, update.service),
        ServiceAction::Deselect => deselect(catalog, selection, update.service),
    }
}

fn select(catalog: &Catalog, selection: &Selection, service: ServiceType) -> Selection {
    if selection.contains(service) {
        return selection.clone();
    }

    if !is_unlocked(catalog, selection, service) {
        debug!(%service, "ignoring extra service without a selected main service");

        return selection.clone();
    }

    let mut selected = selection.clone();
    selected.push(service);

    selected
}

fn deselect(catalog: &Catalog, selection: &Selection, service: ServiceType) -> Selection {
    let mut remaining = selection.clone();
    remaining.remove(service);

    // Relations don't chain, so one pass in declaration order is enough.
    for extra in catalog.extra_services() {
        if remaining.contains(extra) && !is_unlocked(catalog, &remaining, extra) {
            debug!(
                %extra,
                removed = %service,
                "dropping extra service after its last main service"
            );

            remaining.remove(extra);
        }
    }

    remaining
}

/// Main services are always unlocked; extras need one of their main services selected.
fn is_unlocked(catalog: &Catalog, selection: &Selection, service: ServiceType) -> bool {
    match catalog.main_services_of(service) {
        Some(main_services) => selection.contains_any(main_services),
        None => true,
    }
}
