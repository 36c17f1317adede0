pub mod forecast;
pub mod serve;
pub mod watch;

pub use forecast::forecast;
pub use serve::serve;
pub use watch::watch;
