mod record;
mod truthy;
mod value;

pub use record::{FieldNotFound, Record};
pub use truthy::Truthy;
pub use value::{Value, ValueKind};
