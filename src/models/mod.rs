pub mod department;
pub mod person;
pub mod timeslot;
pub mod workplace;

pub use department::{Department, DepartmentRequest};
pub use person::{
    DepartmentLinkRequest, Person, PersonRequest, WeekdayId, WeekdayLinkRequest, WeekdayShape,
    WorkplaceLinkRequest,
};
pub use timeslot::{Timeslot, TimeslotAvailability, TimeslotRequest};
pub use workplace::{Workplace, WorkplaceRequest};
