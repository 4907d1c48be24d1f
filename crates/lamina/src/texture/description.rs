use std::cmp::max;

use flagset::FlagSet;

use crate::driver::{BindFlags, CpuAccess, ResourceOptions};
use crate::error::TextureError;
use crate::texture::format::TextureFormatId;
use crate::texture::MipmapLevels;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ResourceUsage {
    #[default]
    Default,
    Immutable,
    Dynamic,
    Staging,
}

impl ResourceUsage {
    /// The CPU access a resource with this usage requires.
    pub fn cpu_access(&self) -> FlagSet<CpuAccess> {
        match self {
            ResourceUsage::Dynamic => CpuAccess::Write.into(),
            ResourceUsage::Staging => CpuAccess::Read | CpuAccess::Write,
            ResourceUsage::Default | ResourceUsage::Immutable => FlagSet::default(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SampleDescription {
    pub count: u32,
    pub quality: u32,
}

impl Default for SampleDescription {
    fn default() -> Self {
        SampleDescription {
            count: 1,
            quality: 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Texture2DDescription {
    pub width: u32,
    pub height: u32,
    pub array_size: u32,
    pub mip_levels: u32,
    pub format: TextureFormatId,
    pub sample_description: SampleDescription,
    pub usage: ResourceUsage,
    pub bind_flags: FlagSet<BindFlags>,
    pub cpu_access_flags: FlagSet<CpuAccess>,
    pub option_flags: FlagSet<ResourceOptions>,
}

impl Texture2DDescription {
    /// The largest number of array layers a description may declare.
    pub const MAX_ARRAY_SIZE: u32 = 2048;

    /// Describes a shader-readable 2D texture (or texture array).
    ///
    /// When `read_write` is set the texture is also bindable for unordered access. CPU access is
    /// derived from `usage`.
    pub fn new_2d(
        width: u32,
        height: u32,
        format: TextureFormatId,
        mipmap_levels: MipmapLevels,
        array_size: u32,
        read_write: bool,
        usage: ResourceUsage,
    ) -> Result<Self, TextureError> {
        let mip_levels = mipmap_levels.to_u32(max(width, height))?;

        let mut bind_flags = FlagSet::from(BindFlags::ShaderResource);

        if read_write {
            bind_flags |= BindFlags::UnorderedAccess;
        }

        let description = Texture2DDescription {
            width,
            height,
            array_size,
            mip_levels,
            format,
            sample_description: SampleDescription::default(),
            usage,
            bind_flags,
            cpu_access_flags: usage.cpu_access(),
            option_flags: FlagSet::default(),
        };

        description.validate()?;

        Ok(description)
    }

    pub fn validate(&self) -> Result<(), TextureError> {
        let reason = if self.width == 0 {
            "width must be greater than `0`"
        } else if self.height == 0 {
            "height must be greater than `0`"
        } else if self.array_size == 0 {
            "array size must be greater than `0`"
        } else if self.array_size > Self::MAX_ARRAY_SIZE {
            "array size exceeds the maximum of `2048` layers"
        } else if self.mip_levels == 0 {
            "mip level count must be greater than `0`"
        } else if self.sample_description.count == 0 {
            "sample count must be greater than `0`"
        } else if self.mip_levels > MipmapLevels::Complete.to_u32(max(self.width, self.height))? {
            "mip level count exceeds the complete mip chain"
        } else if self.is_multisampled() && self.mip_levels > 1 {
            "multisampled textures cannot have more than one mip level"
        } else {
            return Ok(());
        };

        Err(TextureError::InvalidDescription { reason })
    }

    pub fn is_multisampled(&self) -> bool {
        self.sample_description.count > 1
    }

    pub fn is_cube(&self) -> bool {
        self.option_flags.contains(ResourceOptions::TextureCube)
    }

    /// The number of (array layer, mip level) pairs; saturates at `u32::MAX` for descriptions
    /// that fail [validate](Self::validate).
    pub fn subresource_count(&self) -> u32 {
        self.array_size
            .checked_mul(self.mip_levels)
            .unwrap_or(u32::MAX)
    }

    /// The width and height of the given mip level.
    pub fn mip_extent(&self, mip_level: u32) -> (u32, u32) {
        let width = self.width.checked_shr(mip_level).unwrap_or(0);
        let height = self.height.checked_shr(mip_level).unwrap_or(0);

        (max(width, 1), max(height, 1))
    }

    /// Derives the description of a CPU read/write staging copy of this texture.
    pub fn to_staging(&self) -> Self {
        Texture2DDescription {
            bind_flags: FlagSet::default(),
            cpu_access_flags: CpuAccess::Read | CpuAccess::Write,
            usage: ResourceUsage::Staging,
            option_flags: FlagSet::default(),
            ..*self
        }
    }
}
