use crate::device::Device;
use crate::driver::{BindFlags, Device as _, Driver, Dvr, SubresourceData, Texture as _};
use crate::error::TextureError;
use crate::texture::view_cache::ViewCache;
use crate::texture::view_descriptor::{
    shader_resource_view_descriptor, unordered_access_view_descriptor,
};
use crate::texture::{view_count, view_index, Texture2D, Texture2DDescription, ViewSlice};

/// State shared by every 2D texture kind: the native texture, its description and the views
/// created on it.
///
/// Views are created on first request and cached for the lifetime of the texture. Dropping the
/// texture releases its unordered-access views first, then its shader-resource views, then the
/// native texture itself.
pub struct Texture2DBase<D: Driver = Dvr> {
    // Field order is drop order.
    unordered_access_views: Option<ViewCache<D::UnorderedAccessView>>,
    shader_resource_views: Option<ViewCache<D::ShaderResourceView>>,
    handle: D::TextureHandle,
    device: Device<D>,
    description: Texture2DDescription,
    stride_in_bytes: u32,
}

impl<D: Driver> Texture2DBase<D> {
    pub(crate) fn new(
        device: &Device<D>,
        description: Texture2DDescription,
        initial_data: &[SubresourceData],
    ) -> Result<Self, TextureError> {
        description.validate()?;

        let handle = device.handle.create_texture(&description, initial_data)?;

        log::debug!(
            "created {}x{} texture with {} array layers and {} mip levels ({:?})",
            description.width,
            description.height,
            description.array_size,
            description.mip_levels,
            description.format
        );

        Self::from_handle(device, handle, description)
    }

    /// Wraps an existing native texture that was created from `description`.
    pub(crate) fn from_handle(
        device: &Device<D>,
        handle: D::TextureHandle,
        description: Texture2DDescription,
    ) -> Result<Self, TextureError> {
        description.validate()?;

        let view_count = view_count(&description);
        let bind_flags = description.bind_flags;

        let base = Texture2DBase {
            unordered_access_views: bind_flags
                .contains(BindFlags::UnorderedAccess)
                .then(|| ViewCache::new(view_count)),
            shader_resource_views: bind_flags
                .contains(BindFlags::ShaderResource)
                .then(|| ViewCache::new(view_count)),
            handle,
            device: device.clone(),
            stride_in_bytes: description.width * description.format.bytes_per_pixel(),
            description,
        };

        base.initialize_views()?;

        Ok(base)
    }

    fn initialize_views(&self) -> Result<(), TextureError> {
        self.shader_resource_view(ViewSlice::Full, 0, 0)?;
        self.unordered_access_view(0, 0)?;

        Ok(())
    }

    pub fn device(&self) -> &Device<D> {
        &self.device
    }

    pub fn handle(&self) -> &D::TextureHandle {
        &self.handle
    }

    pub fn description(&self) -> &Texture2DDescription {
        &self.description
    }

    /// The number of bytes in a row of the top mip level.
    pub fn stride_in_bytes(&self) -> u32 {
        self.stride_in_bytes
    }

    /// Returns the shader-resource view on the requested slice, creating it on first use.
    ///
    /// Returns `Ok(None)` if the texture was not created with [BindFlags::ShaderResource].
    /// Repeated requests with the same arguments return the same view.
    pub fn shader_resource_view(
        &self,
        slice: ViewSlice,
        array_index: u32,
        mip_index: u32,
    ) -> Result<Option<&D::ShaderResourceView>, TextureError> {
        let Some(cache) = &self.shader_resource_views else {
            return Ok(None);
        };

        let bounds = slice.resolve(array_index, mip_index, &self.description)?;
        let index = view_index(slice, bounds.array_index, bounds.mip_index, &self.description);

        let view = cache
            .get_or_try_insert_with(index, || {
                let descriptor = shader_resource_view_descriptor(&self.description, &bounds);
                let view = self.handle.create_shader_resource_view(&descriptor)?;

                log::trace!(
                    "created shader resource view in slot {}: {:?}",
                    index,
                    descriptor
                );

                Ok::<_, TextureError>(view)
            })
            .ok_or_else(|| self.out_of_range(slice, array_index, mip_index))??;

        Ok(Some(view))
    }

    /// Returns the unordered-access view on a single array layer and mip level, creating it on
    /// first use.
    ///
    /// Returns `Ok(None)` if the texture was not created with [BindFlags::UnorderedAccess].
    pub fn unordered_access_view(
        &self,
        array_index: u32,
        mip_index: u32,
    ) -> Result<Option<&D::UnorderedAccessView>, TextureError> {
        let Some(cache) = &self.unordered_access_views else {
            return Ok(None);
        };

        let bounds = ViewSlice::Single.resolve(array_index, mip_index, &self.description)?;
        let index = view_index(
            ViewSlice::Single,
            bounds.array_index,
            bounds.mip_index,
            &self.description,
        );

        let view = cache
            .get_or_try_insert_with(index, || {
                let descriptor = unordered_access_view_descriptor(&self.description, &bounds);
                let view = self.handle.create_unordered_access_view(&descriptor)?;

                log::trace!(
                    "created unordered access view in slot {}: {:?}",
                    index,
                    descriptor
                );

                Ok::<_, TextureError>(view)
            })
            .ok_or_else(|| self.out_of_range(ViewSlice::Single, array_index, mip_index))??;

        Ok(Some(view))
    }

    /// The number of shader-resource views created on this texture so far.
    pub fn cached_shader_resource_views(&self) -> usize {
        self.shader_resource_views
            .as_ref()
            .map_or(0, |cache| cache.populated())
    }

    /// The number of unordered-access views created on this texture so far.
    pub fn cached_unordered_access_views(&self) -> usize {
        self.unordered_access_views
            .as_ref()
            .map_or(0, |cache| cache.populated())
    }

    /// Returns `true` if the shader-resource view for the given slice already exists.
    ///
    /// Never creates a view.
    pub fn is_shader_resource_view_cached(
        &self,
        slice: ViewSlice,
        array_index: u32,
        mip_index: u32,
    ) -> bool {
        let (Some(cache), Ok(bounds)) = (
            &self.shader_resource_views,
            slice.resolve(array_index, mip_index, &self.description),
        ) else {
            return false;
        };

        let index = view_index(slice, bounds.array_index, bounds.mip_index, &self.description);

        cache.get(index).is_some()
    }

    /// Creates a CPU read/write staging texture with the same shape and format.
    ///
    /// No texel data is copied.
    pub fn to_staging(&self) -> Result<Texture2D<D>, TextureError> {
        log::debug!("deriving staging texture from {:?}", self.description);

        Texture2D::new(&self.device, self.description.to_staging())
    }

    fn out_of_range(&self, slice: ViewSlice, array_index: u32, mip_index: u32) -> TextureError {
        TextureError::SliceOutOfRange {
            slice,
            array_index,
            mip_index,
            array_size: self.description.array_size,
            mip_levels: self.description.mip_levels,
        }
    }
}

impl<D: Driver> Drop for Texture2DBase<D> {
    fn drop(&mut self) {
        let mut released = 0;

        if let Some(cache) = &mut self.unordered_access_views {
            released += cache.clear();
        }

        if let Some(cache) = &mut self.shader_resource_views {
            released += cache.clear();
        }

        log::trace!("released {} views", released);
    }
}
