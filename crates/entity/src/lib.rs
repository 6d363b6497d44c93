pub mod company;
pub mod company_room_link;
pub mod contact;
pub mod message;
pub mod project;
pub mod summary;
pub mod task;
pub mod wholesale;
