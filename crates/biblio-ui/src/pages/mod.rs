pub mod catalogue;
pub mod dashboard;
pub mod loans;
pub mod login;
pub mod my_loans;
pub mod register;
pub mod users;
