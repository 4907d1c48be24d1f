use crate::driver::{
    ShaderResourceViewDescriptor, ShaderResourceViewDimension, UnorderedAccessViewDescriptor,
    UnorderedAccessViewDimension,
};
use crate::texture::{Texture2DDescription, ViewSliceBounds};

pub(crate) fn shader_resource_view_descriptor(
    description: &Texture2DDescription,
    bounds: &ViewSliceBounds,
) -> ShaderResourceViewDescriptor {
    let ViewSliceBounds {
        array_index,
        mip_index,
        array_count,
        mip_count,
    } = *bounds;

    let dimension = if description.array_size > 1 {
        if description.is_cube() {
            ShaderResourceViewDimension::TextureCube {
                most_detailed_mip: mip_index,
                mip_levels: mip_count,
            }
        } else if description.is_multisampled() {
            // Multisampled surfaces have no mip chain.
            ShaderResourceViewDimension::Texture2DMultisampledArray {
                first_array_slice: array_index,
                array_size: array_count,
            }
        } else {
            ShaderResourceViewDimension::Texture2DArray {
                most_detailed_mip: mip_index,
                mip_levels: mip_count,
                first_array_slice: array_index,
                array_size: array_count,
            }
        }
    } else if description.is_multisampled() {
        ShaderResourceViewDimension::Texture2DMultisampled
    } else {
        ShaderResourceViewDimension::Texture2D {
            most_detailed_mip: mip_index,
            mip_levels: mip_count,
        }
    };

    ShaderResourceViewDescriptor {
        format: description.format,
        dimension,
    }
}

pub(crate) fn unordered_access_view_descriptor(
    description: &Texture2DDescription,
    bounds: &ViewSliceBounds,
) -> UnorderedAccessViewDescriptor {
    let dimension = if description.array_size > 1 {
        UnorderedAccessViewDimension::Texture2DArray {
            mip_slice: bounds.mip_index,
            first_array_slice: bounds.array_index,
            array_size: bounds.array_count,
        }
    } else {
        UnorderedAccessViewDimension::Texture2D {
            mip_slice: bounds.mip_index,
        }
    };

    UnorderedAccessViewDescriptor {
        format: description.format,
        dimension,
    }
}

#[cfg(test)]
mod tests {
    use flagset::FlagSet;

    use super::*;
    use crate::driver::{BindFlags, ResourceOptions};
    use crate::texture::format::TextureFormatId;
    use crate::texture::{ResourceUsage, SampleDescription, ViewSlice};

    fn description(array_size: u32, mip_levels: u32, samples: u32) -> Texture2DDescription {
        Texture2DDescription {
            width: 128,
            height: 128,
            array_size,
            mip_levels,
            format: TextureFormatId::rgba16float,
            sample_description: SampleDescription {
                count: samples,
                quality: 0,
            },
            usage: ResourceUsage::Default,
            bind_flags: BindFlags::ShaderResource | BindFlags::UnorderedAccess,
            cpu_access_flags: FlagSet::default(),
            option_flags: FlagSet::default(),
        }
    }

    fn srv(
        description: &Texture2DDescription,
        slice: ViewSlice,
        array_index: u32,
        mip_index: u32,
    ) -> ShaderResourceViewDimension {
        let bounds = slice.resolve(array_index, mip_index, description).unwrap();

        shader_resource_view_descriptor(description, &bounds).dimension
    }

    #[test]
    fn single_surface_with_mips() {
        let description = description(1, 4, 1);

        assert_eq!(
            srv(&description, ViewSlice::MipBand, 0, 1),
            ShaderResourceViewDimension::Texture2D {
                most_detailed_mip: 1,
                mip_levels: 3,
            }
        );
    }

    #[test]
    fn multisampled_single_surface_has_no_mip_range() {
        let description = description(1, 1, 4);

        assert_eq!(
            srv(&description, ViewSlice::Full, 0, 0),
            ShaderResourceViewDimension::Texture2DMultisampled
        );
    }

    #[test]
    fn array_band() {
        let description = description(5, 2, 1);

        assert_eq!(
            srv(&description, ViewSlice::ArrayBand, 2, 1),
            ShaderResourceViewDimension::Texture2DArray {
                most_detailed_mip: 1,
                mip_levels: 1,
                first_array_slice: 2,
                array_size: 3,
            }
        );
    }

    #[test]
    fn multisampled_array_keeps_only_layers() {
        let description = description(3, 1, 2);

        assert_eq!(
            srv(&description, ViewSlice::Full, 0, 0),
            ShaderResourceViewDimension::Texture2DMultisampledArray {
                first_array_slice: 0,
                array_size: 3,
            }
        );
    }

    #[test]
    fn cube_option_wins_over_array_layout() {
        let mut description = description(6, 3, 1);

        description.option_flags = ResourceOptions::TextureCube.into();

        assert_eq!(
            srv(&description, ViewSlice::Full, 0, 0),
            ShaderResourceViewDimension::TextureCube {
                most_detailed_mip: 0,
                mip_levels: 3,
            }
        );
    }

    #[test]
    fn format_is_copied() {
        let description = description(1, 1, 1);
        let bounds = ViewSlice::Single.resolve(0, 0, &description).unwrap();

        assert_eq!(
            shader_resource_view_descriptor(&description, &bounds).format,
            TextureFormatId::rgba16float
        );
        assert_eq!(
            unordered_access_view_descriptor(&description, &bounds).format,
            TextureFormatId::rgba16float
        );
    }

    #[test]
    fn unordered_access_layouts() {
        let single = description(1, 3, 1);
        let bounds = ViewSlice::Single.resolve(0, 2, &single).unwrap();

        assert_eq!(
            unordered_access_view_descriptor(&single, &bounds).dimension,
            UnorderedAccessViewDimension::Texture2D { mip_slice: 2 }
        );

        let array = description(4, 3, 1);
        let bounds = ViewSlice::Single.resolve(3, 1, &array).unwrap();

        assert_eq!(
            unordered_access_view_descriptor(&array, &bounds).dimension,
            UnorderedAccessViewDimension::Texture2DArray {
                mip_slice: 1,
                first_array_slice: 3,
                array_size: 1,
            }
        );
    }
}
