pub use reviewdb_core::gateways::email::*;

pub mod mailgun;
pub mod send_to_json_file;
pub mod sendmail;
