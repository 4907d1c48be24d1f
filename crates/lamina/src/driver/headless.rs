//! A driver that keeps no GPU state.
//!
//! Every handle records the descriptor it was created from and the device counts creations and
//! releases, which makes this backend suitable for tests and for tooling that only needs to
//! reason about resource layouts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use atomic_counter::{AtomicCounter, RelaxedCounter};
use lazy_static::lazy_static;

use crate::driver;
use crate::driver::{
    DriverError, ShaderResourceViewDescriptor, SubresourceData, UnorderedAccessViewDescriptor,
};
use crate::texture::Texture2DDescription;

lazy_static! {
    static ref ID_GEN: RelaxedCounter = RelaxedCounter::new(1);
}

pub struct Driver;

impl driver::Driver for Driver {
    type DeviceHandle = DeviceHandle;
    type TextureHandle = TextureHandle;
    type ShaderResourceView = ShaderResourceView;
    type UnorderedAccessView = UnorderedAccessView;
}

struct DeviceState {
    textures_created: RelaxedCounter,
    shader_resource_views_created: RelaxedCounter,
    unordered_access_views_created: RelaxedCounter,
    views_released: RelaxedCounter,
    fail_next_texture: AtomicBool,
    fail_next_view: AtomicBool,
}

impl Default for DeviceState {
    fn default() -> Self {
        DeviceState {
            textures_created: RelaxedCounter::new(0),
            shader_resource_views_created: RelaxedCounter::new(0),
            unordered_access_views_created: RelaxedCounter::new(0),
            views_released: RelaxedCounter::new(0),
            fail_next_texture: AtomicBool::new(false),
            fail_next_view: AtomicBool::new(false),
        }
    }
}

#[derive(Clone, Default)]
pub struct DeviceHandle {
    state: Arc<DeviceState>,
}

impl DeviceHandle {
    pub fn new() -> Self {
        DeviceHandle::default()
    }

    pub fn textures_created(&self) -> usize {
        self.state.textures_created.get()
    }

    pub fn shader_resource_views_created(&self) -> usize {
        self.state.shader_resource_views_created.get()
    }

    pub fn unordered_access_views_created(&self) -> usize {
        self.state.unordered_access_views_created.get()
    }

    pub fn views_released(&self) -> usize {
        self.state.views_released.get()
    }

    /// The number of views created on this device that have not been released yet.
    pub fn live_views(&self) -> usize {
        self.shader_resource_views_created() + self.unordered_access_views_created()
            - self.views_released()
    }

    /// Makes the next texture creation on this device fail.
    pub fn fail_next_texture(&self) {
        self.state.fail_next_texture.store(true, Ordering::Relaxed);
    }

    /// Makes the next view creation on this device fail.
    pub fn fail_next_view(&self) {
        self.state.fail_next_view.store(true, Ordering::Relaxed);
    }
}

impl driver::Device<Driver> for DeviceHandle {
    fn create_texture(
        &self,
        description: &Texture2DDescription,
        initial_data: &[SubresourceData],
    ) -> Result<TextureHandle, DriverError> {
        if self.state.fail_next_texture.swap(false, Ordering::Relaxed) {
            return Err(DriverError::OutOfMemory);
        }

        if !initial_data.is_empty()
            && initial_data.len() != description.subresource_count() as usize
        {
            return Err(DriverError::InvalidParameter(format!(
                "`{}` subresources supplied for a texture with `{}` subresources",
                initial_data.len(),
                description.subresource_count()
            )));
        }

        self.state.textures_created.inc();

        Ok(TextureHandle {
            id: ID_GEN.inc(),
            description: *description,
            initialized_subresources: initial_data.len(),
            state: self.state.clone(),
        })
    }
}

pub struct TextureHandle {
    id: usize,
    description: Texture2DDescription,
    initialized_subresources: usize,
    state: Arc<DeviceState>,
}

impl TextureHandle {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn description(&self) -> &Texture2DDescription {
        &self.description
    }

    pub fn initialized_subresources(&self) -> usize {
        self.initialized_subresources
    }

    fn check_view_failure(&self) -> Result<(), DriverError> {
        if self.state.fail_next_view.swap(false, Ordering::Relaxed) {
            Err(DriverError::InvalidParameter("view creation refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl driver::Texture<Driver> for TextureHandle {
    fn create_shader_resource_view(
        &self,
        descriptor: &ShaderResourceViewDescriptor,
    ) -> Result<ShaderResourceView, DriverError> {
        self.check_view_failure()?;
        self.state.shader_resource_views_created.inc();

        Ok(ShaderResourceView {
            inner: ViewInner {
                id: ID_GEN.inc(),
                texture_id: self.id,
                state: self.state.clone(),
            },
            descriptor: *descriptor,
        })
    }

    fn create_unordered_access_view(
        &self,
        descriptor: &UnorderedAccessViewDescriptor,
    ) -> Result<UnorderedAccessView, DriverError> {
        self.check_view_failure()?;
        self.state.unordered_access_views_created.inc();

        Ok(UnorderedAccessView {
            inner: ViewInner {
                id: ID_GEN.inc(),
                texture_id: self.id,
                state: self.state.clone(),
            },
            descriptor: *descriptor,
        })
    }
}

struct ViewInner {
    id: usize,
    texture_id: usize,
    state: Arc<DeviceState>,
}

impl Drop for ViewInner {
    fn drop(&mut self) {
        self.state.views_released.inc();
    }
}

pub struct ShaderResourceView {
    inner: ViewInner,
    descriptor: ShaderResourceViewDescriptor,
}

impl ShaderResourceView {
    pub fn id(&self) -> usize {
        self.inner.id
    }

    pub fn texture_id(&self) -> usize {
        self.inner.texture_id
    }

    pub fn descriptor(&self) -> &ShaderResourceViewDescriptor {
        &self.descriptor
    }
}

pub struct UnorderedAccessView {
    inner: ViewInner,
    descriptor: UnorderedAccessViewDescriptor,
}

impl UnorderedAccessView {
    pub fn id(&self) -> usize {
        self.inner.id
    }

    pub fn texture_id(&self) -> usize {
        self.inner.texture_id
    }

    pub fn descriptor(&self) -> &UnorderedAccessViewDescriptor {
        &self.descriptor
    }
}
