// Profile intake: form body -> normalized, request-scoped profile record.

pub mod models;
pub mod normalize;
pub mod sanitize;

pub use models::{ProfileForm, ProfileRecord};
