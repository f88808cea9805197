pub mod analytics_query;
pub mod analytics_response;
pub mod create_entry_response;
pub mod delete_response;
pub mod entry_dto;
pub mod entry_form;
pub mod entry_list_response;
pub mod entry_response;
pub mod journal;
pub mod list_entries_query;
