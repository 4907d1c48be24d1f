#![allow(non_camel_case_types)]

/// Identifies the pixel format of a texture.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TextureFormatId {
    r8unorm,
    r8snorm,
    r8uint,
    r8sint,
    r16uint,
    r16sint,
    r16float,
    rg8unorm,
    rg8snorm,
    rg8uint,
    rg8sint,
    r32uint,
    r32sint,
    r32float,
    rg16uint,
    rg16sint,
    rg16float,
    rgba8unorm,
    rgba8unorm_srgb,
    rgba8snorm,
    rgba8uint,
    rgba8sint,
    bgra8unorm,
    bgra8unorm_srgb,
    rgb10a2unorm,
    rg32uint,
    rg32sint,
    rg32float,
    rgba16uint,
    rgba16sint,
    rgba16float,
    rgba32uint,
    rgba32sint,
    rgba32float,
    depth32float,
}

impl TextureFormatId {
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormatId::r8unorm
            | TextureFormatId::r8snorm
            | TextureFormatId::r8uint
            | TextureFormatId::r8sint => 1,
            TextureFormatId::r16uint
            | TextureFormatId::r16sint
            | TextureFormatId::r16float
            | TextureFormatId::rg8unorm
            | TextureFormatId::rg8snorm
            | TextureFormatId::rg8uint
            | TextureFormatId::rg8sint => 2,
            TextureFormatId::r32uint
            | TextureFormatId::r32sint
            | TextureFormatId::r32float
            | TextureFormatId::rg16uint
            | TextureFormatId::rg16sint
            | TextureFormatId::rg16float
            | TextureFormatId::rgba8unorm
            | TextureFormatId::rgba8unorm_srgb
            | TextureFormatId::rgba8snorm
            | TextureFormatId::rgba8uint
            | TextureFormatId::rgba8sint
            | TextureFormatId::bgra8unorm
            | TextureFormatId::bgra8unorm_srgb
            | TextureFormatId::rgb10a2unorm
            | TextureFormatId::depth32float => 4,
            TextureFormatId::rg32uint
            | TextureFormatId::rg32sint
            | TextureFormatId::rg32float
            | TextureFormatId::rgba16uint
            | TextureFormatId::rgba16sint
            | TextureFormatId::rgba16float => 8,
            TextureFormatId::rgba32uint
            | TextureFormatId::rgba32sint
            | TextureFormatId::rgba32float => 16,
        }
    }
}
