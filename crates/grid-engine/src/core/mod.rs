pub mod scene;
pub mod scheduler;
pub mod time;
pub mod world;
