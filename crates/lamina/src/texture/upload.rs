use bytemuck::Pod;

use crate::driver::SubresourceData;
use crate::error::TextureError;
use crate::texture::Texture2DDescription;

/// Initial texture data, borrowed for the duration of a texture creation call.
///
/// The borrow keeps every source buffer alive and unmoved until the guard goes out of scope,
/// whichever way the creation call exits.
pub struct PinnedSubresources<'a> {
    subresources: Vec<SubresourceData<'a>>,
}

impl<'a> PinnedSubresources<'a> {
    pub fn as_slice(&self) -> &[SubresourceData<'a>] {
        &self.subresources
    }

    pub fn len(&self) -> usize {
        self.subresources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subresources.is_empty()
    }
}

impl Drop for PinnedSubresources<'_> {
    fn drop(&mut self) {
        log::trace!("releasing {} pinned subresources", self.subresources.len());
    }
}

/// Pins one buffer of row-major pixels per subresource.
///
/// Buffers are ordered by array layer first and mip level second. Each buffer must hold at least
/// `row_pitch * rows` bytes for its mip level, where the row pitch is the mip level's width times
/// the format's bytes per pixel.
pub fn pin_subresources<'a, T>(
    description: &Texture2DDescription,
    textures: &'a [&'a [T]],
) -> Result<PinnedSubresources<'a>, TextureError>
where
    T: Pod,
{
    description.validate()?;

    let expected = description.subresource_count() as usize;

    if textures.len() != expected {
        return Err(TextureError::InvalidInitialData {
            reason: format!(
                "expected `{}` subresources ({} array layers x {} mip levels), found `{}`",
                expected,
                description.array_size,
                description.mip_levels,
                textures.len()
            ),
        });
    }

    let bytes_per_pixel = description.format.bytes_per_pixel();
    let mut subresources = Vec::with_capacity(expected);

    for (index, texture) in textures.iter().enumerate() {
        let index = index as u32;
        let array_layer = index / description.mip_levels;
        let mip_level = index % description.mip_levels;
        let (width, height) = description.mip_extent(mip_level);
        let row_pitch = width * bytes_per_pixel;
        let data: &'a [u8] = bytemuck::cast_slice(*texture);
        let required = row_pitch as usize * height as usize;

        if data.len() < required {
            return Err(TextureError::InvalidInitialData {
                reason: format!(
                    "subresource for array layer `{}` mip level `{}` holds `{}` bytes, `{}` \
                    required",
                    array_layer,
                    mip_level,
                    data.len(),
                    required
                ),
            });
        }

        subresources.push(SubresourceData {
            data,
            row_pitch,
            array_layer,
            mip_level,
        });
    }

    log::trace!("pinned {} subresources", subresources.len());

    Ok(PinnedSubresources { subresources })
}
