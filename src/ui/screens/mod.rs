pub mod dashboard;
pub mod login;
pub mod role_select;
