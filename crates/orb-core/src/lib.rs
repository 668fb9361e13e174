pub mod constants;
pub mod points;
pub mod projection;
pub mod scene;
pub mod viewport;

pub use constants::*;
pub use points::*;
pub use projection::*;
pub use scene::*;
pub use viewport::*;
