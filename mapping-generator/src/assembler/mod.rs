//! Index request assembly.
//!
//! Walks the meta-model and produces one `IndexRequest` per entity, named
//! `<package>__<entity>`, with one property per field that has a resolvable type.

use mapping_generator_shared::{Entity, Field, IndexRequest, MetaModel, Package};
use tracing::{debug, info, instrument, warn};

use crate::config::{MappingConfig, UnresolvedFieldPolicy};
use crate::errors::MappingError;
use crate::mapping::{property_type_for_field, EntityMappingBuilder};
use crate::traversal::{meta_model_for_each, MetaModelVisitor, TraversalAction};

/// Separator between the package name and the entity name in index names.
pub const INDEX_NAME_SEPARATOR: &str = "__";

/// Get the index name for an entity.
///
/// Names are joined as-is, without escaping.
///
/// # Example
///
/// ```
/// use mapping_generator::index_name;
///
/// assert_eq!(index_name("p1", "e1"), "p1__e1");
/// ```
pub fn index_name(package_name: &str, entity_name: &str) -> String {
    format!("{}{}{}", package_name, INDEX_NAME_SEPARATOR, entity_name)
}

/// Create index requests for all entities in the meta-model.
///
/// Fields without a resolvable type are dropped silently.
///
/// # Returns
///
/// One request per entity, in the order the entities appear in the meta-model.
#[instrument(skip(meta_model), fields(package_count = meta_model.packages.len()))]
pub fn create_index_requests(meta_model: &MetaModel) -> Vec<IndexRequest> {
    let config = MappingConfig::default();
    let mut visitor = IndexRequestsVisitor::new(&config);
    meta_model_for_each(meta_model, &mut visitor);

    info!(request_count = visitor.requests.len(), "Created index requests");
    visitor.requests
}

/// Create index requests for all entities using the given configuration.
///
/// # Returns
///
/// * `Ok(Vec<IndexRequest>)` - One request per entity, in visit order
/// * `Err(MappingError)` - If the policy is `Fail` and a field has no resolvable type
#[instrument(
    skip(meta_model, config),
    fields(
        package_count = meta_model.packages.len(),
        policy = ?config.unresolved_field_policy
    )
)]
pub fn create_index_requests_with_config(
    meta_model: &MetaModel,
    config: &MappingConfig,
) -> Result<Vec<IndexRequest>, MappingError> {
    let mut visitor = IndexRequestsVisitor::new(config);
    meta_model_for_each(meta_model, &mut visitor);

    let requests = visitor.finish()?;
    info!(request_count = requests.len(), "Created index requests");
    Ok(requests)
}

/// Visitor that assembles one request per entity.
///
/// Holds only the output list and the builder of the entity being visited;
/// package and entity names come in through the hook parameters.
struct IndexRequestsVisitor<'a> {
    config: &'a MappingConfig,
    requests: Vec<IndexRequest>,
    current: Option<EntityMappingBuilder>,
    error: Option<MappingError>,
}

impl<'a> IndexRequestsVisitor<'a> {
    fn new(config: &'a MappingConfig) -> Self {
        Self {
            config,
            requests: Vec::new(),
            current: None,
            error: None,
        }
    }

    fn finish(self) -> Result<Vec<IndexRequest>, MappingError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.requests),
        }
    }
}

impl MetaModelVisitor for IndexRequestsVisitor<'_> {
    fn visit_entity(&mut self, _package: &Package, _entity: &Entity) -> TraversalAction {
        self.current = Some(EntityMappingBuilder::new());
        TraversalAction::Continue
    }

    fn visit_field(&mut self, package: &Package, entity: &Entity, field: &Field) -> TraversalAction {
        let Some(builder) = self.current.as_mut() else {
            debug!(field = %field.name, "Field visited outside an entity, ignoring");
            return TraversalAction::Continue;
        };

        match property_type_for_field(field) {
            Some(property) => {
                if builder.add_property(field.name.as_str(), property).is_some() {
                    debug!(
                        index = %index_name(&package.name, &entity.name),
                        field = %field.name,
                        "Duplicate field name, replacing earlier property"
                    );
                }
            }
            None => match self.config.unresolved_field_policy {
                UnresolvedFieldPolicy::Skip => {}
                UnresolvedFieldPolicy::Warn => {
                    warn!(
                        index = %index_name(&package.name, &entity.name),
                        field = %field.name,
                        "Field type not resolved, omitting property"
                    );
                }
                UnresolvedFieldPolicy::Fail => {
                    self.error = Some(MappingError::unresolved_field_type(
                        index_name(&package.name, &entity.name),
                        field.name.as_str(),
                    ));
                    return TraversalAction::Abort;
                }
            },
        }
        TraversalAction::Continue
    }

    fn leave_entity(&mut self, package: &Package, entity: &Entity) {
        let Some(builder) = self.current.take() else {
            return;
        };

        let mut request = IndexRequest::new(index_name(&package.name, &entity.name), builder.build());
        if let Some(settings) = &self.config.settings {
            request = request.with_settings(settings.clone());
        }

        debug!(
            index = %request.index,
            property_count = request.mappings.len(),
            "Assembled index request"
        );
        self.requests.push(request);
    }
}
