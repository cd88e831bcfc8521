pub mod docs;
pub mod form;
pub mod home;
pub mod login;
pub mod occupation_card;
pub mod occupation_detail;
pub mod pagination;
pub mod search_input;
pub mod stats;
