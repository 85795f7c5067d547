// src/domain/property/mod.rs
pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{NewProperty, Property, PropertyUpdate, PublishStateUpdate};
pub use filter::PropertyFilter;
pub use repository::{PropertyReadRepository, PropertyWriteRepository};
pub use value_objects::{OfferKind, Price, PropertyId, PropertyTitle, PropertyType};
