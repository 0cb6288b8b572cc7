pub use cache::*;
pub use interests::*;
pub use session::*;

mod cache;
mod interests;
mod session;
