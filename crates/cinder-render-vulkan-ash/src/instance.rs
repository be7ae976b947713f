use ash::vk;
use cinder_core::VkConfig;
use std::ffi::{c_char, CString};

use crate::error::{LoaderError, LoaderResult};
use crate::loader::ProcAddrSource;
use crate::shim;

/// Creates an instance with the platform's required extensions plus the
/// configured ones.
///
/// The application info and name arrays live on this stack frame and are
/// borrowed by the create info for exactly the duration of the call.
pub fn create_instance_with_config<L>(
    loader: &L,
    required_extensions: &[&str],
    cfg: &VkConfig,
) -> LoaderResult<vk::Instance>
where
    L: ProcAddrSource + ?Sized,
{
    let extensions = required_extensions
        .iter()
        .copied()
        .chain(cfg.extensions.iter().map(String::as_str))
        .map(CString::new)
        .collect::<Result<Vec<_>, _>>()?;
    let layers = cfg
        .layers
        .iter()
        .map(|l| CString::new(l.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let extension_ptrs: Vec<*const c_char> = extensions.iter().map(|e| e.as_ptr()).collect();
    let layer_ptrs: Vec<*const c_char> = layers.iter().map(|l| l.as_ptr()).collect();

    let api_version = if cfg.api_version != 0 {
        cfg.api_version
    } else {
        vk::API_VERSION_1_0
    };
    let app_info = vk::ApplicationInfo::default().api_version(api_version);

    let create_info = vk::InstanceCreateInfo::default()
        .application_info(&app_info)
        .enabled_extension_names(&extension_ptrs)
        .enabled_layer_names(&layer_ptrs);

    log::debug!(
        "creating vk instance: api {}.{}, extensions {:?}, layers {:?}",
        vk::api_version_major(api_version),
        vk::api_version_minor(api_version),
        extensions,
        layers
    );

    // SAFETY: every pointer in create_info refers to locals that outlive the call.
    let (instance, result) = unsafe { shim::create_instance(loader, &create_info, None) };
    if let Err(e) = LoaderError::from_result(result) {
        log::error!("failed to create vk instance with config {cfg:?}: {e}");
        return Err(e);
    }

    Ok(instance)
}

/// Owns an instance and the window surface created from it.
///
/// Dropping destroys the surface first, then the instance, through the same
/// loader that was used to create them.
pub struct InstanceSurface<L: ProcAddrSource> {
    loader: L,
    instance: vk::Instance,
    surface: vk::SurfaceKHR,
}

impl<L: ProcAddrSource> InstanceSurface<L> {
    /// # Safety
    /// `surface` must belong to `instance`, both must be live, and nothing else
    /// may destroy them.
    pub unsafe fn from_raw(loader: L, instance: vk::Instance, surface: vk::SurfaceKHR) -> Self {
        Self {
            loader,
            instance,
            surface,
        }
    }

    #[inline]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    #[inline]
    pub fn instance(&self) -> vk::Instance {
        self.instance
    }

    #[inline]
    pub fn surface(&self) -> vk::SurfaceKHR {
        self.surface
    }
}

impl<L: ProcAddrSource> Drop for InstanceSurface<L> {
    fn drop(&mut self) {
        unsafe {
            if self.surface != vk::SurfaceKHR::null() {
                shim::destroy_surface(&self.loader, self.instance, self.surface, None);
                self.surface = vk::SurfaceKHR::null();
            }
            if self.instance != vk::Instance::null() {
                shim::destroy_instance(&self.loader, self.instance, None);
                self.instance = vk::Instance::null();
            }
        }
    }
}
