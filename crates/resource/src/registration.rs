//! Service registration: how a host discovers resources.

use std::collections::BTreeMap;

use crate::error::ResourceError;
use crate::resource::{DataSource, Resource};
use crate::schema::{combine_schema, AttributeSchema};

/// One service's contribution to a host registry.
///
/// A service groups related resource types under a name; the host
/// assembles the full registry from every registration without knowing
/// any concrete resource type.
pub trait ServiceRegistration {
    /// The name of this service.
    fn name(&self) -> &'static str;

    /// The resources supported by this service.
    fn supported_resources(&self) -> Vec<Box<dyn Resource>>;

    /// The data sources supported by this service.
    fn supported_data_sources(&self) -> Vec<Box<dyn DataSource>>;
}

/// Merge every registration into one resource-type → schema registry.
///
/// Each entry is the resource's combined argument + attribute schema.
/// Two registrations claiming the same resource type name is an error.
pub fn assemble_registry(
    registrations: &[Box<dyn ServiceRegistration>],
) -> Result<BTreeMap<String, BTreeMap<String, AttributeSchema>>, ResourceError> {
    let mut out = BTreeMap::new();

    for registration in registrations {
        for resource in registration.supported_resources() {
            let schema = combine_schema(&resource.arguments(), &resource.attributes())?;
            let resource_type = resource.resource_type().to_string();
            if out.insert(resource_type.clone(), schema).is_some() {
                return Err(ResourceError::DuplicateResourceType { resource_type });
            }
        }
        for data_source in registration.supported_data_sources() {
            let schema = combine_schema(&data_source.arguments(), &data_source.attributes())?;
            let resource_type = data_source.resource_type().to_string();
            if out.insert(resource_type.clone(), schema).is_some() {
                return Err(ResourceError::DuplicateResourceType { resource_type });
            }
        }
    }

    Ok(out)
}
