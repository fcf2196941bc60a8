#![forbid(unsafe_code)]

pub mod model;
pub mod route;
pub mod routing;
pub mod session;
pub mod time;

pub use route::RoutePath;
pub use routing::{View, resolve};
pub use session::Session;
pub use time::Clock;
