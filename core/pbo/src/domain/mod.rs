//! pbo 固有のドメイン型（型と不変条件）

pub mod command;
pub mod prompt;
pub mod record;
pub mod request;
pub mod result;
pub mod slug;
pub mod tag;

pub use command::{ExplanationSource, PboCommand};
pub use prompt::Prompt;
pub use record::{Record, StoredRecord, APP_NAME};
pub use request::{count_chars, validate, DiagnosisRequest, ValidationError, MIN_CHARS};
pub use result::DiagnosisResult;
pub use slug::safe_slug;
pub use tag::{Tag, TagDef, TAG_CATALOG};
