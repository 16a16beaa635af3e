//! Verification of generated index requests against the meta-model.
//!
//! Re-walks the meta-model and checks that every entity has a request whose
//! properties are exactly those the type table prescribes for the entity's
//! resolvable fields. When field names repeat, the last resolvable field wins,
//! as it does during assembly.

use std::collections::{BTreeMap, HashMap};

use mapping_generator_shared::{Entity, Field, IndexRequest, MetaModel, Package, PropertyType};
use tracing::{debug, instrument};

use crate::assembler::index_name;
use crate::errors::MappingError;
use crate::mapping::property_type_for_field;
use crate::traversal::{meta_model_for_each, MetaModelVisitor, TraversalAction};

/// Verify that `requests` is exactly the mapping of `meta_model`.
///
/// # Returns
///
/// * `Ok(())` - If every entity and field is mapped as expected and no request
///   carries extra properties
/// * `Err(MappingError::VerificationError)` - Describing the first mismatch found
#[instrument(skip(meta_model, requests), fields(request_count = requests.len()))]
pub fn verify_index_requests(
    meta_model: &MetaModel,
    requests: &[IndexRequest],
) -> Result<(), MappingError> {
    let entity_count = meta_model.entity_count();
    if requests.len() != entity_count {
        return Err(MappingError::verification(format!(
            "Expected {} index requests, found {}",
            entity_count,
            requests.len()
        )));
    }

    let mut visitor = MappingVerificationVisitor::new(requests);
    meta_model_for_each(meta_model, &mut visitor);

    match visitor.failure {
        Some(msg) => Err(MappingError::verification(msg)),
        None => {
            debug!("Index requests verified");
            Ok(())
        }
    }
}

struct MappingVerificationVisitor<'a> {
    request_by_index: HashMap<&'a str, &'a IndexRequest>,
    failure: Option<String>,
}

impl<'a> MappingVerificationVisitor<'a> {
    fn new(requests: &'a [IndexRequest]) -> Self {
        Self {
            request_by_index: requests.iter().map(|r| (r.index(), r)).collect(),
            failure: None,
        }
    }

    fn fail(&mut self, msg: String) -> TraversalAction {
        self.failure = Some(msg);
        TraversalAction::Abort
    }
}

/// Properties the assembler should have produced for `fields`.
fn expected_properties(fields: &[Field]) -> BTreeMap<&str, PropertyType> {
    let mut expected = BTreeMap::new();
    for field in fields {
        if let Some(property) = property_type_for_field(field) {
            expected.insert(field.name.as_str(), property);
        }
    }
    expected
}

fn mismatch_message(
    index: &str,
    field_name: &str,
    expected: &PropertyType,
    actual: &PropertyType,
) -> String {
    match (expected, actual) {
        (
            PropertyType::Date { format: expected_format },
            PropertyType::Date { format: actual_format },
        ) => format!(
            "Incorrect date format for '{}' in index '{}': expected '{}', actual '{}'",
            field_name, index, expected_format, actual_format
        ),
        _ => format!(
            "Incorrect mapping for '{}' in index '{}' (expected {}, actual {})",
            field_name, index, expected, actual
        ),
    }
}

impl MetaModelVisitor for MappingVerificationVisitor<'_> {
    fn visit_entity(&mut self, package: &Package, entity: &Entity) -> TraversalAction {
        let index = index_name(&package.name, &entity.name);
        let Some(request) = self.request_by_index.get(index.as_str()).copied() else {
            return self.fail(format!("Index request not found for index '{}'", index));
        };

        let expected = expected_properties(&entity.fields);

        for (field_name, expected_property) in &expected {
            match request.mappings.property(field_name) {
                None => {
                    return self.fail(format!(
                        "Property '{}' not found in index '{}'",
                        field_name, index
                    ));
                }
                Some(actual) if actual != expected_property => {
                    return self.fail(mismatch_message(&index, field_name, expected_property, actual));
                }
                Some(_) => {}
            }
        }

        if let Some(extra) = request
            .mappings
            .properties
            .keys()
            .find(|name| !expected.contains_key(name.as_str()))
        {
            let unresolved = entity
                .fields
                .iter()
                .any(|f| f.name == *extra && f.field_type.is_none());
            let msg = if unresolved {
                format!(
                    "Unexpected property '{}' in index '{}' (field type not resolved)",
                    extra, index
                )
            } else {
                format!("Unexpected property '{}' in index '{}'", extra, index)
            };
            return self.fail(msg);
        }

        // Fields were checked as a whole above.
        TraversalAction::AbortSubtree
    }
}
