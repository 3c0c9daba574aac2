//! Edit-and-continue analysis over [`enc_syntax`] trees.
//!
//! Given the tree of a program before and after an edit, this crate answers the structural
//! questions an edit-legality pass asks:
//! - [`declaration_body`]: which block or expression is the executable body of a declaration;
//! - [`suspension_points`] / [`is_generator`] / [`is_async_declaration`]: where a body's state
//!   machine can suspend, and whether it is a state machine at all;
//! - [`find_leaf_and_partner`] / [`find_partner`]: which node of the new tree corresponds to a
//!   node or position of the old one.
//!
//! Everything here is a pure function of the trees passed in. Nothing is cached.

mod body;
pub mod closure;
mod partner;
mod predicates;
mod suspension;
pub mod walk;

pub use body::{
    assert_is_body, check_body_shape, containing_declaration, declaration_body, top_level_body,
    Body, BodyShape, BodyShapeError, Declaration,
};
pub use partner::{find_leaf_and_partner, find_partner, LeafMatch};
pub use predicates::{
    effective_getter_body, field_or_property_modifiers, has_backing_field, has_type_parameters,
    is_parameterless_constructor,
};
pub use suspension::{
    is_async_declaration, is_generator, suspension_points, SuspensionKind, SuspensionPoint,
};
