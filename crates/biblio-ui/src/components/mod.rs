pub mod auth_guard;
pub mod book_details_dialog;
pub mod book_form_dialog;
pub mod edit_user_dialog;
pub mod gauge;
pub mod loan_form_dialog;
pub mod loan_status;
pub mod metric_card;
pub mod nav;
pub mod toast;
