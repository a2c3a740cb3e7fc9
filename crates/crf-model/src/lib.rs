//! Typed model for case report form submissions.

pub mod enums;
pub mod error;
pub mod ids;
pub mod record;
pub mod schema;
pub mod selection;

pub use enums::{HivStatus, Response};
pub use error::{ModelError, Result};
pub use ids::{SubjectId, VisitRef};
pub use record::{FieldValue, FormRecord, RawSubmission};
pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use selection::{SelectionOption, SelectionSet};
