use std::any::Any;

use flagset::FlagSet;

use crate::device::Device;
use crate::driver::{BindFlags, Driver, Dvr, ResourceOptions};
use crate::error::TextureError;
use crate::texture::format::TextureFormatId;
use crate::texture::{
    MipmapLevels, ResourceUsage, SampleDescription, Texture2D, Texture2DBase,
    Texture2DDescription, Texture2DResource,
};

const FACE_COUNT: u32 = 6;

/// A cube map: six square array layers, one per face.
pub struct TextureCube<D: Driver = Dvr> {
    base: Texture2DBase<D>,
}

impl<D: Driver> TextureCube<D> {
    pub fn new<B>(
        device: &Device<D>,
        size: u32,
        format: TextureFormatId,
        mipmap_levels: MipmapLevels,
        bind_flags: B,
    ) -> Result<Self, TextureError>
    where
        B: Into<FlagSet<BindFlags>>,
    {
        let description = Texture2DDescription {
            width: size,
            height: size,
            array_size: FACE_COUNT,
            mip_levels: mipmap_levels.to_u32(size)?,
            format,
            sample_description: SampleDescription::default(),
            usage: ResourceUsage::Default,
            bind_flags: bind_flags.into(),
            cpu_access_flags: FlagSet::default(),
            option_flags: ResourceOptions::TextureCube.into(),
        };

        Self::from_description(device, description)
    }

    pub fn from_description(
        device: &Device<D>,
        description: Texture2DDescription,
    ) -> Result<Self, TextureError> {
        validate_cube(&description)?;

        Ok(TextureCube {
            base: Texture2DBase::new(device, description, &[])?,
        })
    }

    pub fn size(&self) -> u32 {
        self.base.description().width
    }

    pub fn clone_texture(&self) -> Result<Self, TextureError> {
        TextureCube::from_description(self.base.device(), *self.base.description())
    }

    pub fn to_staging(&self) -> Result<Texture2D<D>, TextureError> {
        self.base.to_staging()
    }
}

fn validate_cube(description: &Texture2DDescription) -> Result<(), TextureError> {
    let reason = if !description.is_cube() {
        "cube textures require the `TextureCube` option"
    } else if description.array_size != FACE_COUNT {
        "cube textures must have exactly 6 array layers"
    } else if description.width != description.height {
        "cube texture faces must be square"
    } else if description.is_multisampled() {
        "cube textures cannot be multisampled"
    } else {
        return Ok(());
    };

    Err(TextureError::InvalidDescription { reason })
}

impl<D: Driver> Texture2DResource<D> for TextureCube<D> {
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
