pub mod repositories;
pub mod services;

pub use repositories::Repositories;
pub use services::ResolverServices;
