pub mod event;
pub mod validate;

pub use event::{Event, EventCreate, EventStatus, EventUpdate};
pub use validate::{
    validate_create, validate_update, FieldError, FieldPatch, NewEvent, UpdateSet,
};
