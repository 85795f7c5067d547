pub mod errors;
pub mod lead;
pub mod locale;
pub mod pagination;
pub mod project;
pub mod property;
pub mod slug;
pub mod template;
