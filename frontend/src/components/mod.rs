pub mod form;
pub mod handlers;
pub mod header;
pub mod registros;
pub mod utils;
