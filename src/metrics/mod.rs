pub mod fps;

pub use fps::FpsCounter;
