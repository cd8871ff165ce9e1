//! Value objects for the character form

mod field;
mod occupation;
mod sex;

pub use field::FieldId;
pub use occupation::OccupationChoice;
pub use sex::SexChoice;
