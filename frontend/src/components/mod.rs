pub mod edit_modal;
pub mod feedback;
pub mod sources_table;
