//! edm-schema: translates a vendor conceptual schema model into a normalized schema
//!
//! The vendor model (entity sets, entity/complex/enum types, operations) is
//! read through the descriptors in [`source`]. A translation pass turns it into
//! the self-contained [`model::Schema`] graph that downstream query, path, and
//! serialization code treats as ground truth.
//!
//! ```
//! use edm_schema::source::{SourceEntitySet, SourceModel, SourceSchemaType, SourceStructuredType};
//! use edm_schema::{translate_model, TranslateOptions};
//!
//! let model = SourceModel::new()
//!     .with_entity_set(SourceEntitySet {
//!         name: "Customers".to_string(),
//!         element_type: "Collection(NS.Customer)".to_string(),
//!     })
//!     .with_type(SourceSchemaType::Entity(SourceStructuredType {
//!         namespace: "NS".to_string(),
//!         name: "Customer".to_string(),
//!         ..Default::default()
//!     }));
//!
//! let schema = translate_model(&model, &TranslateOptions::default()).unwrap();
//! assert_eq!(schema.entity_sets[0].entity_type_name, "NS.Customer");
//! assert!(schema.entity_type_for_set("Customers").is_some());
//! ```

pub mod error;
pub mod model;
pub mod source;
pub mod translate;

pub use error::{Result, TranslateError};
pub use model::Schema;
pub use source::SourceModel;

/// What to do with a key that names a property its entity type does not declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Fail the pass with [`TranslateError::UnknownKeyProperty`]
    #[default]
    Reject,
    /// Keep the key as declared and log a warning
    Accept,
}

/// Options for a translation pass
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Handling of key names without a matching declared property
    pub key_policy: KeyPolicy,
    /// Translate functions and actions along with the types
    pub include_operations: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            key_policy: KeyPolicy::Reject,
            include_operations: true,
        }
    }
}

/// Translate a complete vendor model.
///
/// Each call is an independent pass with its own memo table, so concurrent
/// calls on different models share nothing.
///
/// # Errors
/// Returns the first [`TranslateError`] raised anywhere in the pass. No
/// partially populated schema is ever returned.
pub fn translate_model(model: &SourceModel, options: &TranslateOptions) -> Result<Schema> {
    translate::translate_schema(model, options)
}
