pub mod director;
pub mod genre;
pub mod movies;

pub use director::*;
pub use genre::*;
pub use movies::*;
