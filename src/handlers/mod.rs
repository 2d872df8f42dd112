pub mod chart_handlers;
pub mod echo_handlers;

pub use chart_handlers::{sales_data_handler, visitor_data_handler};
pub use echo_handlers::{echo2_handler, echo_handler, hello_handler};
