use ash::vk;
use std::ffi::CStr;
use std::ptr;

use crate::loader::ProcAddrSource;

/// Resolves a global-level entry point with a null instance.
fn resolve<L>(loader: &L, name: &CStr) -> vk::PFN_vkVoidFunction
where
    L: ProcAddrSource + ?Sized,
{
    let get_instance_proc_addr = loader.get_instance_proc_addr()?;
    // SAFETY: the loader contract accepts a null instance and a NUL-terminated name.
    unsafe { get_instance_proc_addr(vk::Instance::null(), name.as_ptr()) }
}

#[inline]
fn allocator_ptr<'a>(allocator: Option<&'a vk::AllocationCallbacks<'a>>) -> *const vk::AllocationCallbacks<'a> {
    allocator.map_or(ptr::null(), |a| a as *const _)
}

/// Forwards to the loader's `vkCreateInstance`.
///
/// Returns a null handle and `ERROR_INVALID_EXTERNAL_HANDLE` when either the
/// loader or the entry point cannot be found; nothing is invoked in that case.
///
/// # Safety
/// `create_info` and everything it points to must be valid Vulkan input for
/// the duration of the call.
pub unsafe fn create_instance<L>(
    loader: &L,
    create_info: &vk::InstanceCreateInfo<'_>,
    allocator: Option<&vk::AllocationCallbacks<'_>>,
) -> (vk::Instance, vk::Result)
where
    L: ProcAddrSource + ?Sized,
{
    let Some(raw) = resolve(loader, c"vkCreateInstance") else {
        log::warn!("vkCreateInstance could not be resolved");
        return (vk::Instance::null(), vk::Result::ERROR_INVALID_EXTERNAL_HANDLE);
    };
    // SAFETY: the loader returned this pointer for "vkCreateInstance".
    let create: vk::PFN_vkCreateInstance = unsafe { std::mem::transmute(raw) };

    let mut instance = vk::Instance::null();
    let result = unsafe { create(create_info, allocator_ptr(allocator), &mut instance) };
    (instance, result)
}

/// Forwards to `vkDestroySurfaceKHR`. Silently does nothing without a loader.
///
/// # Safety
/// `surface` must have been created from `instance` and not destroyed yet.
pub unsafe fn destroy_surface<L>(
    loader: &L,
    instance: vk::Instance,
    surface: vk::SurfaceKHR,
    allocator: Option<&vk::AllocationCallbacks<'_>>,
) where
    L: ProcAddrSource + ?Sized,
{
    let Some(raw) = resolve(loader, c"vkDestroySurfaceKHR") else {
        log::warn!("vkDestroySurfaceKHR could not be resolved, surface leaked");
        return;
    };
    // SAFETY: the loader returned this pointer for "vkDestroySurfaceKHR".
    let destroy: vk::PFN_vkDestroySurfaceKHR = unsafe { std::mem::transmute(raw) };
    unsafe { destroy(instance, surface, allocator_ptr(allocator)) };
}

/// Forwards to `vkDestroyInstance`. Silently does nothing without a loader.
///
/// # Safety
/// `instance` must be a live instance with all child objects already destroyed.
pub unsafe fn destroy_instance<L>(
    loader: &L,
    instance: vk::Instance,
    allocator: Option<&vk::AllocationCallbacks<'_>>,
) where
    L: ProcAddrSource + ?Sized,
{
    let Some(raw) = resolve(loader, c"vkDestroyInstance") else {
        log::warn!("vkDestroyInstance could not be resolved, instance leaked");
        return;
    };
    // SAFETY: the loader returned this pointer for "vkDestroyInstance".
    let destroy: vk::PFN_vkDestroyInstance = unsafe { std::mem::transmute(raw) };
    unsafe { destroy(instance, allocator_ptr(allocator)) };
}
