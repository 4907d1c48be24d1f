use flagset::flags;
use thiserror::Error;

use crate::texture::format::TextureFormatId;
use crate::texture::Texture2DDescription;

pub trait Driver: Sized + 'static {
    type DeviceHandle: Device<Self> + 'static;
    type TextureHandle: Texture<Self> + 'static;
    type ShaderResourceView: 'static;
    type UnorderedAccessView: 'static;
}

pub trait Device<D>: Clone + Sized
where
    D: Driver,
{
    /// Creates a native 2D texture.
    ///
    /// `initial_data` is either empty or holds one entry per subresource, ordered by array layer
    /// first and mip level second.
    fn create_texture(
        &self,
        description: &Texture2DDescription,
        initial_data: &[SubresourceData],
    ) -> Result<D::TextureHandle, DriverError>;
}

pub trait Texture<D>: Sized
where
    D: Driver,
{
    fn create_shader_resource_view(
        &self,
        descriptor: &ShaderResourceViewDescriptor,
    ) -> Result<D::ShaderResourceView, DriverError>;

    fn create_unordered_access_view(
        &self,
        descriptor: &UnorderedAccessViewDescriptor,
    ) -> Result<D::UnorderedAccessView, DriverError>;
}

flags! {
    pub enum BindFlags: u32 {
        ShaderResource  = 0x0001,
        UnorderedAccess = 0x0002,
        RenderTarget    = 0x0004,
        DepthStencil    = 0x0008,
    }

    pub enum CpuAccess: u32 {
        Read  = 0x0001,
        Write = 0x0002,
    }

    pub enum ResourceOptions: u32 {
        TextureCube = 0x0001,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShaderResourceViewDimension {
    Texture2D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture2DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2DMultisampled,
    Texture2DMultisampledArray {
        first_array_slice: u32,
        array_size: u32,
    },
    TextureCube {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShaderResourceViewDescriptor {
    pub format: TextureFormatId,
    pub dimension: ShaderResourceViewDimension,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnorderedAccessViewDimension {
    Texture2D {
        mip_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnorderedAccessViewDescriptor {
    pub format: TextureFormatId,
    pub dimension: UnorderedAccessViewDimension,
}

/// Initial contents of a single subresource (one mip level of one array layer).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubresourceData<'a> {
    pub data: &'a [u8],
    pub row_pitch: u32,
    pub array_layer: u32,
    pub mip_level: u32,
}

/// Signals that the native API refused to create a resource.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum DriverError {
    #[error("the device ran out of memory")]
    OutOfMemory,
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("{0}")]
    Backend(String),
}
