use thiserror::Error;

use crate::driver::DriverError;
use crate::texture::ViewSlice;

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum TextureError {
    #[error("invalid texture description: {reason}")]
    InvalidDescription { reason: &'static str },

    #[error(
        "`{slice:?}` view starting at array index `{array_index}` and mip index `{mip_index}` is \
        out of range for a texture with `{array_size}` array layers and `{mip_levels}` mip levels"
    )]
    SliceOutOfRange {
        slice: ViewSlice,
        array_index: u32,
        mip_index: u32,
        array_size: u32,
        mip_levels: u32,
    },

    #[error("invalid initial data: {reason}")]
    InvalidInitialData { reason: String },

    #[error("expected a `{expected}` texture, found a `{found}` texture")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Driver(#[from] DriverError),
}
