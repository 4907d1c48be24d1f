mod description;
pub use self::description::*;

mod mipmap_levels;
pub use self::mipmap_levels::*;

mod resource;
pub use self::resource::*;

mod texture_2d;
pub use self::texture_2d::*;

mod texture_2d_base;
pub use self::texture_2d_base::*;

mod texture_cube;
pub use self::texture_cube::*;

mod view_cache;

mod view_descriptor;

mod view_slice;
pub use self::view_slice::*;

pub mod format;
pub mod upload;

pub use crate::driver::{BindFlags, CpuAccess, ResourceOptions};
