mod driver;
pub use self::driver::*;

pub mod headless;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "native")]
pub type Dvr = native::Driver;

#[cfg(not(feature = "native"))]
pub type Dvr = headless::Driver;
