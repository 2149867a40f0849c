//! # formwright
//!
//! Renders declarative JSON form definitions into an interactive HTML
//! element tree: field-type dispatch, constraint application, value and
//! display-format handling, nested panel recursion, and asynchronous
//! fragment loading.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formwright::{FormRenderer, RenderOptions, parse_inline};
//! use formwright_wizard::WizardLayout;
//!
//! # async fn run(json: &str) -> anyhow::Result<()> {
//! let definition = parse_inline(json)?;
//! let renderer = FormRenderer::new()
//!     .with_options(RenderOptions::new().with_origin("https://forms.example"))
//!     .with_layout(WizardLayout);
//! let form = renderer.create_form(&definition).await;
//! println!("{}", form.to_html());
//! # Ok(())
//! # }
//! ```
//!
//! ## Structure
//!
//! - Field definitions deserialize into [`FieldDefinition`] trees
//! - [`render_field`] dispatches one renderer per field kind, with a
//!   generic-input fallback for unknown kinds
//! - [`decorate_input`] applies the cross-cutting identity, state, and
//!   validation pass
//! - [`FormRenderer`] walks panels recursively and joins asynchronous
//!   work (fragments, nested panels) before layout extensions run
//! - [`FormRenderer::create_form`] assembles the final form and wires
//!   the captcha and rule-engine integrations
//!
//! Layout extensions and integrations plug in through the traits in
//! [`collab`] and [`LayoutExtension`]; the wizard layout ships in the
//! `formwright-wizard` crate.

// Re-export all types from formwright-types
pub use formwright_types::*;

pub mod collab;

mod constraint;
pub use constraint::apply_constraints;

mod decorate;
pub use decorate::{apply_column_span, decorate_input};

mod engine;
pub use engine::{FormRenderer, RenderFault, RenderReport};

mod field;
pub use field::{create_label, field_wrapper, help_text};

mod form;
pub use form::RenderedForm;

mod layout;
pub use layout::{LayoutError, LayoutExtension, LayoutRegistry};

mod options;
pub use options::RenderOptions;

mod render;
pub use render::render_field;

mod sanitize;
pub use sanitize::strip_tags;

mod source;
pub use source::{SourceError, fetch_definition, parse_inline};

mod validity;
pub use validity::{Constraint, Violation, check_control, validate_tree};
