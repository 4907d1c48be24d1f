use std::any::{type_name, Any};

use crate::driver::{Driver, Dvr};
use crate::error::TextureError;
use crate::texture::{Texture2DBase, Texture2DDescription, ViewSlice};

/// Common interface of all 2D texture kinds.
pub trait Texture2DResource<D: Driver = Dvr>: Any {
    fn base(&self) -> &Texture2DBase<D>;

    /// Creates a new texture of the same kind from the same description.
    ///
    /// The clone gets its own native texture and view caches; texel data is not copied.
    fn clone_boxed(&self) -> Result<Box<dyn Texture2DResource<D>>, TextureError>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn kind(&self) -> &'static str {
        type_name::<Self>()
    }

    fn description(&self) -> &Texture2DDescription {
        self.base().description()
    }

    fn shader_resource_view(
        &self,
        slice: ViewSlice,
        array_index: u32,
        mip_index: u32,
    ) -> Result<Option<&D::ShaderResourceView>, TextureError> {
        self.base().shader_resource_view(slice, array_index, mip_index)
    }

    fn unordered_access_view(
        &self,
        array_index: u32,
        mip_index: u32,
    ) -> Result<Option<&D::UnorderedAccessView>, TextureError> {
        self.base().unordered_access_view(array_index, mip_index)
    }
}

impl<D: Driver> dyn Texture2DResource<D> {
    /// Clones this texture as the concrete kind `T`.
    ///
    /// Fails with [TextureError::TypeMismatch] without creating anything if this texture is not
    /// a `T`.
    pub fn clone_as<T>(&self) -> Result<T, TextureError>
    where
        T: Texture2DResource<D>,
    {
        if !self.as_any().is::<T>() {
            return Err(TextureError::TypeMismatch {
                expected: type_name::<T>(),
                found: self.kind(),
            });
        }

        let found = self.kind();

        self.clone_boxed()?
            .into_any()
            .downcast::<T>()
            .map(|texture| *texture)
            .map_err(|_| TextureError::TypeMismatch {
                expected: type_name::<T>(),
                found,
            })
    }
}
