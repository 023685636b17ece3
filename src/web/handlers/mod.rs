pub mod account_handlers;
pub mod employer_handlers;
pub mod job_handlers;
pub mod system_handlers;
pub mod talent_handlers;

pub use account_handlers::*;
pub use employer_handlers::*;
pub use job_handlers::*;
pub use system_handlers::*;
pub use talent_handlers::*;
