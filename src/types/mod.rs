pub mod models;
pub mod requests;
pub mod response;

pub use models::*;
pub use requests::*;
pub use response::*;
