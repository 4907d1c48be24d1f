pub mod driver;

pub mod device;
pub mod error;
pub mod texture;

pub use self::error::TextureError;
