use std::sync::Arc;

use wgc::gfx_select;
use wgc::global::Global;
use wgc::id::{DeviceId, QueueId, TextureId, TextureViewId};

use crate::driver;
use crate::driver::{
    BindFlags, DriverError, ShaderResourceViewDescriptor, ShaderResourceViewDimension,
    SubresourceData, UnorderedAccessViewDescriptor, UnorderedAccessViewDimension,
};
use crate::texture::format::TextureFormatId;
use crate::texture::{ResourceUsage, Texture2DDescription};

pub struct Driver;

impl driver::Driver for Driver {
    type DeviceHandle = DeviceHandle;
    type TextureHandle = TextureHandle;
    type ShaderResourceView = TextureView;
    type UnorderedAccessView = TextureView;
}

#[derive(Clone)]
pub struct DeviceHandle {
    global: Arc<Global>,
    device_id: DeviceId,
    queue_id: QueueId,
}

impl DeviceHandle {
    /// Wraps a device and its queue that were requested from `global`.
    pub fn from_raw(global: Arc<Global>, device_id: DeviceId, queue_id: QueueId) -> Self {
        DeviceHandle {
            global,
            device_id,
            queue_id,
        }
    }

    fn write_subresource(
        &self,
        texture_id: TextureId,
        description: &Texture2DDescription,
        subresource: &SubresourceData,
    ) -> Result<(), DriverError> {
        let (width, height) = description.mip_extent(subresource.mip_level);

        let destination = wgc::command::ImageCopyTexture {
            texture: texture_id,
            mip_level: subresource.mip_level,
            origin: wgt::Origin3d {
                x: 0,
                y: 0,
                z: subresource.array_layer,
            },
            aspect: wgt::TextureAspect::All,
        };
        let layout = wgt::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(subresource.row_pitch),
            rows_per_image: Some(height),
        };
        let size = wgt::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let res: Result<(), wgc::device::queue::QueueWriteError> = gfx_select!(self.queue_id => self.global.queue_write_texture(
            self.queue_id,
            &destination,
            subresource.data,
            &layout,
            &size,
        ));

        res.map_err(|err| DriverError::Backend(err.to_string()))
    }
}

impl driver::Device<Driver> for DeviceHandle {
    fn create_texture(
        &self,
        description: &Texture2DDescription,
        initial_data: &[SubresourceData],
    ) -> Result<TextureHandle, DriverError> {
        let descriptor = wgc::resource::TextureDescriptor {
            label: None,
            size: wgt::Extent3d {
                width: description.width,
                height: description.height,
                depth_or_array_layers: description.array_size,
            },
            mip_level_count: description.mip_levels,
            sample_count: description.sample_description.count,
            dimension: wgt::TextureDimension::D2,
            format: texture_format_to_wgc(&description.format),
            usage: texture_usage_to_wgc(description),
            view_formats: Vec::new(),
        };

        let (id, err): (_, Option<wgc::resource::CreateTextureError>) = gfx_select!(self.device_id => self.global.device_create_texture(
            self.device_id,
            &descriptor,
            None
        ));

        let handle = TextureHandle {
            global: self.global.clone(),
            id,
        };

        if let Some(err) = err {
            return Err(DriverError::Backend(err.to_string()));
        }

        for subresource in initial_data {
            self.write_subresource(id, description, subresource)?;
        }

        Ok(handle)
    }
}

pub struct TextureHandle {
    global: Arc<Global>,
    id: TextureId,
}

impl TextureHandle {
    fn create_view(
        &self,
        descriptor: &wgc::resource::TextureViewDescriptor,
    ) -> Result<TextureView, DriverError> {
        let (id, err): (_, Option<wgc::resource::CreateTextureViewError>) = gfx_select!(
            self.id => self.global.texture_create_view(self.id, descriptor, None)
        );

        let view = TextureView {
            global: self.global.clone(),
            id,
        };

        match err {
            Some(err) => Err(DriverError::Backend(err.to_string())),
            None => Ok(view),
        }
    }
}

impl driver::Texture<Driver> for TextureHandle {
    fn create_shader_resource_view(
        &self,
        descriptor: &ShaderResourceViewDescriptor,
    ) -> Result<TextureView, DriverError> {
        let (dimension, mip_levels, layers) = match descriptor.dimension {
            ShaderResourceViewDimension::Texture2D {
                most_detailed_mip,
                mip_levels,
            } => (wgt::TextureViewDimension::D2, (most_detailed_mip, mip_levels), (0, 1)),
            ShaderResourceViewDimension::Texture2DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
            } => (
                wgt::TextureViewDimension::D2Array,
                (most_detailed_mip, mip_levels),
                (first_array_slice, array_size),
            ),
            ShaderResourceViewDimension::Texture2DMultisampled => {
                (wgt::TextureViewDimension::D2, (0, 1), (0, 1))
            }
            ShaderResourceViewDimension::Texture2DMultisampledArray {
                first_array_slice,
                array_size,
            } => (
                wgt::TextureViewDimension::D2Array,
                (0, 1),
                (first_array_slice, array_size),
            ),
            ShaderResourceViewDimension::TextureCube {
                most_detailed_mip,
                mip_levels,
            } => (
                wgt::TextureViewDimension::Cube,
                (most_detailed_mip, mip_levels),
                (0, 6),
            ),
        };

        self.create_view(&view_descriptor_to_wgc(
            &descriptor.format,
            dimension,
            mip_levels,
            layers,
        ))
    }

    fn create_unordered_access_view(
        &self,
        descriptor: &UnorderedAccessViewDescriptor,
    ) -> Result<TextureView, DriverError> {
        let (dimension, mip_slice, layers) = match descriptor.dimension {
            UnorderedAccessViewDimension::Texture2D { mip_slice } => {
                (wgt::TextureViewDimension::D2, mip_slice, (0, 1))
            }
            UnorderedAccessViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => (
                wgt::TextureViewDimension::D2Array,
                mip_slice,
                (first_array_slice, array_size),
            ),
        };

        self.create_view(&view_descriptor_to_wgc(
            &descriptor.format,
            dimension,
            (mip_slice, 1),
            layers,
        ))
    }
}

impl Drop for TextureHandle {
    fn drop(&mut self) {
        gfx_select!(self.id => self.global.texture_drop(self.id));
    }
}

pub struct TextureView {
    global: Arc<Global>,
    id: TextureViewId,
}

impl TextureView {
    pub fn id(&self) -> TextureViewId {
        self.id
    }
}

impl Drop for TextureView {
    fn drop(&mut self) {
        gfx_select!(self.id => self.global.texture_view_drop(self.id));
    }
}

fn view_descriptor_to_wgc(
    format: &TextureFormatId,
    dimension: wgt::TextureViewDimension,
    mip_levels: (u32, u32),
    layers: (u32, u32),
) -> wgc::resource::TextureViewDescriptor<'static> {
    let (base_mip_level, mip_level_count) = mip_levels;
    let (base_array_layer, array_layer_count) = layers;

    wgc::resource::TextureViewDescriptor {
        label: None,
        format: Some(texture_format_to_wgc(format)),
        dimension: Some(dimension),
        range: wgt::ImageSubresourceRange {
            aspect: wgt::TextureAspect::All,
            base_mip_level,
            mip_level_count: Some(mip_level_count),
            base_array_layer,
            array_layer_count: Some(array_layer_count),
        },
    }
}

fn texture_usage_to_wgc(description: &Texture2DDescription) -> wgt::TextureUsages {
    let mut usages = wgt::TextureUsages::COPY_SRC | wgt::TextureUsages::COPY_DST;

    if description.usage == ResourceUsage::Staging {
        return usages;
    }

    let bind_flags = description.bind_flags;

    if bind_flags.contains(BindFlags::ShaderResource) {
        usages |= wgt::TextureUsages::TEXTURE_BINDING;
    }

    if bind_flags.contains(BindFlags::UnorderedAccess) {
        usages |= wgt::TextureUsages::STORAGE_BINDING;
    }

    if bind_flags.contains(BindFlags::RenderTarget) || bind_flags.contains(BindFlags::DepthStencil)
    {
        usages |= wgt::TextureUsages::RENDER_ATTACHMENT;
    }

    usages
}

pub fn texture_format_to_wgc(texture_format: &TextureFormatId) -> wgt::TextureFormat {
    match texture_format {
        TextureFormatId::r8unorm => wgt::TextureFormat::R8Unorm,
        TextureFormatId::r8snorm => wgt::TextureFormat::R8Snorm,
        TextureFormatId::r8uint => wgt::TextureFormat::R8Uint,
        TextureFormatId::r8sint => wgt::TextureFormat::R8Sint,
        TextureFormatId::r16uint => wgt::TextureFormat::R16Uint,
        TextureFormatId::r16sint => wgt::TextureFormat::R16Sint,
        TextureFormatId::r16float => wgt::TextureFormat::R16Float,
        TextureFormatId::rg8unorm => wgt::TextureFormat::Rg8Unorm,
        TextureFormatId::rg8snorm => wgt::TextureFormat::Rg8Snorm,
        TextureFormatId::rg8uint => wgt::TextureFormat::Rg8Uint,
        TextureFormatId::rg8sint => wgt::TextureFormat::Rg8Sint,
        TextureFormatId::r32uint => wgt::TextureFormat::R32Uint,
        TextureFormatId::r32sint => wgt::TextureFormat::R32Sint,
        TextureFormatId::r32float => wgt::TextureFormat::R32Float,
        TextureFormatId::rg16uint => wgt::TextureFormat::Rg16Uint,
        TextureFormatId::rg16sint => wgt::TextureFormat::Rg16Sint,
        TextureFormatId::rg16float => wgt::TextureFormat::Rg16Float,
        TextureFormatId::rgba8unorm => wgt::TextureFormat::Rgba8Unorm,
        TextureFormatId::rgba8unorm_srgb => wgt::TextureFormat::Rgba8UnormSrgb,
        TextureFormatId::rgba8snorm => wgt::TextureFormat::Rgba8Snorm,
        TextureFormatId::rgba8uint => wgt::TextureFormat::Rgba8Uint,
        TextureFormatId::rgba8sint => wgt::TextureFormat::Rgba8Sint,
        TextureFormatId::bgra8unorm => wgt::TextureFormat::Bgra8Unorm,
        TextureFormatId::bgra8unorm_srgb => wgt::TextureFormat::Bgra8UnormSrgb,
        TextureFormatId::rgb10a2unorm => wgt::TextureFormat::Rgb10a2Unorm,
        TextureFormatId::rg32uint => wgt::TextureFormat::Rg32Uint,
        TextureFormatId::rg32sint => wgt::TextureFormat::Rg32Sint,
        TextureFormatId::rg32float => wgt::TextureFormat::Rg32Float,
        TextureFormatId::rgba16uint => wgt::TextureFormat::Rgba16Uint,
        TextureFormatId::rgba16sint => wgt::TextureFormat::Rgba16Sint,
        TextureFormatId::rgba16float => wgt::TextureFormat::Rgba16Float,
        TextureFormatId::rgba32uint => wgt::TextureFormat::Rgba32Uint,
        TextureFormatId::rgba32sint => wgt::TextureFormat::Rgba32Sint,
        TextureFormatId::rgba32float => wgt::TextureFormat::Rgba32Float,
        TextureFormatId::depth32float => wgt::TextureFormat::Depth32Float,
    }
}
