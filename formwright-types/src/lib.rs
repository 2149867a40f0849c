//! Core types for the formwright crate.
//!
//! This crate provides the foundational types for rendering declarative
//! form definitions:
//! - `FieldDefinition` and `FormDefinition` - The normalized schema nodes
//! - `FieldValue` and `OptionLabel` - Schema value unions
//! - `FieldKind` and `RenderType` - Dispatch and control-kind tags
//! - `Element` and `Node` - The owned DOM-like output tree
//! - `ValidationState` and `MaskedValue` - Structured control state

mod value;
pub use value::{FieldValue, OptionLabel};

mod definition;
pub use definition::{FieldDefinition, FormDefinition, Label};

mod kind;
pub use kind::{FieldKind, RenderType};

mod dom;
pub use dom::{Element, Node, escape_html};

mod validation;
pub use validation::ValidationState;

mod masked;
pub use masked::MaskedValue;
