pub mod crypto;
pub mod local;
pub mod world;
