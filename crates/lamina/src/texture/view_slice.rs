use crate::error::TextureError;
use crate::texture::Texture2DDescription;

/// Selects the sub-range of a texture a view covers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ViewSlice {
    /// The entire array and mip chain.
    Full,
    /// Exactly one array layer and one mip level.
    Single,
    /// All array layers from the start layer onwards, for a single mip level.
    ArrayBand,
    /// All mip levels from the start level onwards, for a single array layer.
    MipBand,
}

/// The effective range of a [ViewSlice] on a particular texture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ViewSliceBounds {
    pub array_index: u32,
    pub mip_index: u32,
    pub array_count: u32,
    pub mip_count: u32,
}

impl ViewSlice {
    /// The number of slice kinds.
    pub const COUNT: usize = 4;

    pub fn ordinal(&self) -> usize {
        match self {
            ViewSlice::Full => 0,
            ViewSlice::Single => 1,
            ViewSlice::ArrayBand => 2,
            ViewSlice::MipBand => 3,
        }
    }

    /// Resolves the array layers and mip levels this slice covers when it starts at the given
    /// array layer and mip level.
    ///
    /// [ViewSlice::Full] ignores the start indices. For all other kinds the start indices must
    /// lie inside the texture.
    pub fn resolve(
        &self,
        array_index: u32,
        mip_index: u32,
        description: &Texture2DDescription,
    ) -> Result<ViewSliceBounds, TextureError> {
        let Texture2DDescription {
            array_size,
            mip_levels,
            ..
        } = *description;

        let in_range = array_index < array_size && mip_index < mip_levels;

        let (array_index, mip_index, array_count, mip_count) = match self {
            ViewSlice::Full => (0, 0, array_size, mip_levels),
            ViewSlice::Single if in_range => (array_index, mip_index, 1, 1),
            ViewSlice::ArrayBand if in_range => {
                (array_index, mip_index, array_size - array_index, 1)
            }
            ViewSlice::MipBand if in_range => (array_index, mip_index, 1, mip_levels - mip_index),
            ViewSlice::Single | ViewSlice::ArrayBand | ViewSlice::MipBand => {
                return Err(TextureError::SliceOutOfRange {
                    slice: *self,
                    array_index,
                    mip_index,
                    array_size,
                    mip_levels,
                });
            }
        };

        Ok(ViewSliceBounds {
            array_index,
            mip_index,
            array_count,
            mip_count,
        })
    }
}

/// Flattens a slice kind and start indices into a cache slot.
///
/// Row-major over (slice kind, array layer, mip level): every dimension's multiplier is the full
/// extent of the next one, so distinct inputs never collide.
pub fn view_index(
    slice: ViewSlice,
    array_index: u32,
    mip_index: u32,
    description: &Texture2DDescription,
) -> usize {
    let array_size = description.array_size as usize;
    let mip_levels = description.mip_levels as usize;

    (slice.ordinal() * array_size + array_index as usize) * mip_levels + mip_index as usize
}

/// The number of cache slots a view cache for the given texture needs.
///
/// An exclusive upper bound on [view_index]: the index formula evaluated one slice kind past the
/// last, with both start indices at their extents.
pub fn view_count(description: &Texture2DDescription) -> usize {
    let array_size = description.array_size as usize;
    let mip_levels = description.mip_levels as usize;

    (ViewSlice::COUNT * array_size + array_size) * mip_levels + mip_levels
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::texture::format::TextureFormatId;
    use crate::texture::{MipmapLevels, ResourceUsage};

    const SLICES: [ViewSlice; 4] = [
        ViewSlice::Full,
        ViewSlice::Single,
        ViewSlice::ArrayBand,
        ViewSlice::MipBand,
    ];

    fn description(array_size: u32, mip_levels: u8) -> Texture2DDescription {
        Texture2DDescription::new_2d(
            64,
            64,
            TextureFormatId::rgba8unorm,
            MipmapLevels::Partial(mip_levels),
            array_size,
            false,
            ResourceUsage::Default,
        )
        .unwrap()
    }

    #[test]
    fn index_values_for_two_layers_three_mips() {
        let description = description(2, 3);

        assert_eq!(view_index(ViewSlice::Full, 0, 0, &description), 0);
        assert_eq!(view_index(ViewSlice::Single, 0, 0, &description), 6);
        assert_eq!(view_count(&description), 33);
    }

    #[test]
    fn index_is_injective_and_below_count() {
        let description = description(3, 4);
        let count = view_count(&description);
        let mut seen = HashSet::new();

        for slice in SLICES {
            for array_index in 0..3 {
                for mip_index in 0..4 {
                    let index = view_index(slice, array_index, mip_index, &description);

                    assert!(index < count);
                    assert!(seen.insert(index), "collision at {}", index);
                }
            }
        }
    }

    #[test]
    fn full_ignores_start_indices() {
        let description = description(4, 3);
        let bounds = ViewSlice::Full.resolve(3, 2, &description).unwrap();

        assert_eq!(
            bounds,
            ViewSliceBounds {
                array_index: 0,
                mip_index: 0,
                array_count: 4,
                mip_count: 3,
            }
        );
    }

    #[test]
    fn bands_cover_the_remainder() {
        let description = description(4, 3);

        let array_band = ViewSlice::ArrayBand.resolve(1, 2, &description).unwrap();

        assert_eq!((array_band.array_count, array_band.mip_count), (3, 1));

        let mip_band = ViewSlice::MipBand.resolve(3, 1, &description).unwrap();

        assert_eq!((mip_band.array_count, mip_band.mip_count), (1, 2));
        assert_eq!((mip_band.array_index, mip_band.mip_index), (3, 1));

        let single = ViewSlice::Single.resolve(2, 2, &description).unwrap();

        assert_eq!((single.array_count, single.mip_count), (1, 1));
    }

    #[test]
    fn out_of_range_start_is_rejected() {
        let description = description(4, 3);

        assert_eq!(
            ViewSlice::ArrayBand.resolve(4, 0, &description),
            Err(TextureError::SliceOutOfRange {
                slice: ViewSlice::ArrayBand,
                array_index: 4,
                mip_index: 0,
                array_size: 4,
                mip_levels: 3,
            })
        );
        assert!(ViewSlice::MipBand.resolve(0, 3, &description).is_err());
        assert!(ViewSlice::Single.resolve(0, 5, &description).is_err());
    }
}
