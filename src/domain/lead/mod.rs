// src/domain/lead/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Lead, NewLead};
pub use repository::LeadRepository;
pub use value_objects::{Email, LeadId, LeadStatus};
