//! Meta-model traversal.
//!
//! A single pre-order walk over packages, entities and fields in input order.
//! Visitors implement `MetaModelVisitor` and receive the enclosing nodes as
//! parameters, so they never have to track the current package or entity
//! themselves.

use mapping_generator_shared::{Entity, Field, MetaModel, Package};

/// Returned by `visit_*` hooks to steer the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalAction {
    /// Visit the node's children, then its siblings.
    Continue,
    /// Skip the node's children. The node's leave hook and its siblings still run.
    AbortSubtree,
    /// Stop the whole walk. No further hooks run.
    Abort,
}

/// Enter/leave hooks for each node kind.
///
/// Every hook has a default that continues, so visitors only implement the
/// hooks they need. `leave_*` hooks are called only for nodes whose `visit_*`
/// hook did not return `Abort`.
pub trait MetaModelVisitor {
    fn visit_package(&mut self, _package: &Package) -> TraversalAction {
        TraversalAction::Continue
    }

    fn leave_package(&mut self, _package: &Package) {}

    fn visit_entity(&mut self, _package: &Package, _entity: &Entity) -> TraversalAction {
        TraversalAction::Continue
    }

    fn leave_entity(&mut self, _package: &Package, _entity: &Entity) {}

    fn visit_field(
        &mut self,
        _package: &Package,
        _entity: &Entity,
        _field: &Field,
    ) -> TraversalAction {
        TraversalAction::Continue
    }

    fn leave_field(&mut self, _package: &Package, _entity: &Entity, _field: &Field) {}
}

/// Walk the meta-model, calling the visitor's hooks in document order.
///
/// # Returns
///
/// `TraversalAction::Abort` if a hook aborted the walk, otherwise
/// `TraversalAction::Continue`.
pub fn meta_model_for_each<V>(meta_model: &MetaModel, visitor: &mut V) -> TraversalAction
where
    V: MetaModelVisitor + ?Sized,
{
    for package in &meta_model.packages {
        if package_for_each(package, visitor) == TraversalAction::Abort {
            return TraversalAction::Abort;
        }
    }
    TraversalAction::Continue
}

fn package_for_each<V>(package: &Package, visitor: &mut V) -> TraversalAction
where
    V: MetaModelVisitor + ?Sized,
{
    match visitor.visit_package(package) {
        TraversalAction::Abort => return TraversalAction::Abort,
        TraversalAction::AbortSubtree => {}
        TraversalAction::Continue => {
            for entity in &package.entities {
                if entity_for_each(package, entity, visitor) == TraversalAction::Abort {
                    return TraversalAction::Abort;
                }
            }
        }
    }
    visitor.leave_package(package);
    TraversalAction::Continue
}

fn entity_for_each<V>(package: &Package, entity: &Entity, visitor: &mut V) -> TraversalAction
where
    V: MetaModelVisitor + ?Sized,
{
    match visitor.visit_entity(package, entity) {
        TraversalAction::Abort => return TraversalAction::Abort,
        TraversalAction::AbortSubtree => {}
        TraversalAction::Continue => {
            for field in &entity.fields {
                // Fields are leaves: AbortSubtree has nothing to skip.
                if visitor.visit_field(package, entity, field) == TraversalAction::Abort {
                    return TraversalAction::Abort;
                }
                visitor.leave_field(package, entity, field);
            }
        }
    }
    visitor.leave_entity(package, entity);
    TraversalAction::Continue
}
