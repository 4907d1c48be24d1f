use std::any::Any;

use bytemuck::Pod;

use crate::device::Device;
use crate::driver::{Driver, Dvr};
use crate::error::TextureError;
use crate::texture::upload::pin_subresources;
use crate::texture::{Texture2DBase, Texture2DDescription, Texture2DResource};

/// A 2D texture or 2D texture array.
pub struct Texture2D<D: Driver = Dvr> {
    base: Texture2DBase<D>,
}

impl<D: Driver> Texture2D<D> {
    pub fn new(
        device: &Device<D>,
        description: Texture2DDescription,
    ) -> Result<Self, TextureError> {
        Ok(Texture2D {
            base: Texture2DBase::new(device, description, &[])?,
        })
    }

    /// Creates a texture initialized from one buffer of row-major pixels per subresource.
    ///
    /// Buffers are ordered by array layer first and mip level second.
    pub fn with_data<T: Pod>(
        device: &Device<D>,
        description: Texture2DDescription,
        textures: &[&[T]],
    ) -> Result<Self, TextureError> {
        description.validate()?;

        let pinned = pin_subresources(&description, textures)?;

        Ok(Texture2D {
            base: Texture2DBase::new(device, description, pinned.as_slice())?,
        })
    }

    /// Wraps a native texture that was created from `description`.
    pub fn from_handle(
        device: &Device<D>,
        handle: D::TextureHandle,
        description: Texture2DDescription,
    ) -> Result<Self, TextureError> {
        Ok(Texture2D {
            base: Texture2DBase::from_handle(device, handle, description)?,
        })
    }

    pub fn clone_texture(&self) -> Result<Self, TextureError> {
        Texture2D::new(self.base.device(), *self.base.description())
    }

    pub fn to_staging(&self) -> Result<Texture2D<D>, TextureError> {
        self.base.to_staging()
    }
}

impl<D: Driver> Texture2DResource<D> for Texture2D<D> {
    fn base(&self) -> &Texture2DBase<D> {
        &self.base
    }

    fn clone_boxed(&self) -> Result<Box<dyn Texture2DResource<D>>, TextureError> {
        Ok(Box::new(self.clone_texture()?))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
