pub mod apply;
pub mod selector;

pub use apply::apply_selector;
pub use selector::{ALL_PARTICIPANTS, ParticipantSelector};
