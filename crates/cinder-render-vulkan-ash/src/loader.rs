use ash::vk;

/// Supplies the `vkGetInstanceProcAddr` entry point, if a loader is available.
///
/// Implementations are queried on every shim call; nothing is cached.
pub trait ProcAddrSource {
    fn get_instance_proc_addr(&self) -> Option<vk::PFN_vkGetInstanceProcAddr>;
}

impl<T: ProcAddrSource + ?Sized> ProcAddrSource for &T {
    #[inline]
    fn get_instance_proc_addr(&self) -> Option<vk::PFN_vkGetInstanceProcAddr> {
        (**self).get_instance_proc_addr()
    }
}

/// A plain, possibly missing, function pointer.
#[derive(Clone, Copy, Default)]
pub struct RawProcAddr(pub Option<vk::PFN_vkGetInstanceProcAddr>);

impl ProcAddrSource for RawProcAddr {
    #[inline]
    fn get_instance_proc_addr(&self) -> Option<vk::PFN_vkGetInstanceProcAddr> {
        self.0
    }
}

impl ProcAddrSource for ash::Entry {
    #[inline]
    fn get_instance_proc_addr(&self) -> Option<vk::PFN_vkGetInstanceProcAddr> {
        Some(self.static_fn().get_instance_proc_addr)
    }
}

/// SDL's loader indirection. Needs a Vulkan window or an explicitly loaded library.
#[cfg(feature = "sdl")]
impl ProcAddrSource for sdl2::VideoSubsystem {
    fn get_instance_proc_addr(&self) -> Option<vk::PFN_vkGetInstanceProcAddr> {
        let raw = match self.vulkan_get_proc_address_function() {
            Ok(raw) => raw as *const std::ffi::c_void,
            Err(e) => {
                log::warn!("SDL has no vulkan loader: {e}");
                return None;
            }
        };
        if raw.is_null() {
            return None;
        }
        // SAFETY: SDL hands out the loader's vkGetInstanceProcAddr as an untyped pointer.
        Some(unsafe {
            std::mem::transmute::<*const std::ffi::c_void, vk::PFN_vkGetInstanceProcAddr>(raw)
        })
    }
}
