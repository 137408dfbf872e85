// Handlers module

pub mod get_by_time;
pub mod get_last;
pub mod publish;
pub mod rejection;
pub mod reply;

pub use get_by_time::get_by_time_handler;
pub use get_last::get_last_handler;
pub use publish::publish_handler;
pub use rejection::handle_rejection;
