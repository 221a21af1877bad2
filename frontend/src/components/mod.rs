pub mod confidence_bar;
pub mod header;
pub mod history_list;
pub mod results;
pub mod review_form;
pub mod summary;
pub mod utils;
