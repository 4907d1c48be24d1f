use bytemuck::Pod;
use flagset::FlagSet;

use crate::driver::{BindFlags, Driver, Dvr};
use crate::error::TextureError;
use crate::texture::format::TextureFormatId;
use crate::texture::{MipmapLevels, Texture2D, Texture2DDescription, TextureCube};

/// The device every texture is created on.
pub struct Device<D: Driver = Dvr> {
    pub(crate) handle: D::DeviceHandle,
}

impl<D: Driver> Clone for Device<D> {
    fn clone(&self) -> Self {
        Device {
            handle: self.handle.clone(),
        }
    }
}

impl<D: Driver> Device<D> {
    pub fn from_handle(handle: D::DeviceHandle) -> Self {
        Device { handle }
    }

    pub fn handle(&self) -> &D::DeviceHandle {
        &self.handle
    }

    pub fn create_texture_2d(
        &self,
        description: &Texture2DDescription,
    ) -> Result<Texture2D<D>, TextureError> {
        Texture2D::new(self, *description)
    }

    pub fn create_texture_2d_with_data<T: Pod>(
        &self,
        description: &Texture2DDescription,
        textures: &[&[T]],
    ) -> Result<Texture2D<D>, TextureError> {
        Texture2D::with_data(self, *description, textures)
    }

    pub fn create_texture_cube<B>(
        &self,
        size: u32,
        format: TextureFormatId,
        mipmap_levels: MipmapLevels,
        bind_flags: B,
    ) -> Result<TextureCube<D>, TextureError>
    where
        B: Into<FlagSet<BindFlags>>,
    {
        TextureCube::new(self, size, format, mipmap_levels, bind_flags)
    }
}
