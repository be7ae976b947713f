//! In-process stand-in for a Vulkan loader. State is per test thread.

use ash::vk::{self, Handle};
use std::cell::{Cell, RefCell};
use std::ffi::{c_char, CStr};

use crate::loader::RawProcAddr;

pub const INSTANCE: u64 = 0x1000;

#[derive(Debug, Default, Clone, Copy)]
pub struct Calls {
    pub lookups: u32,
    pub create: u32,
    pub destroy_surface: u32,
    pub destroy_instance: u32,
}

#[derive(Debug, Default, Clone)]
pub struct Captured {
    pub api_version: Option<u32>,
    pub extensions: Vec<String>,
    pub layers: Vec<String>,
}

thread_local! {
    static CALLS: Cell<Calls> = Cell::new(Calls::default());
    static CREATE_RESULT: Cell<vk::Result> = const { Cell::new(vk::Result::SUCCESS) };
    static ORDER: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    static CAPTURED: RefCell<Captured> = RefCell::new(Captured::default());
}

pub fn reset() {
    CALLS.with(|c| c.set(Calls::default()));
    CREATE_RESULT.with(|r| r.set(vk::Result::SUCCESS));
    ORDER.with(|o| o.borrow_mut().clear());
    CAPTURED.with(|c| *c.borrow_mut() = Captured::default());
}

pub fn calls() -> Calls {
    CALLS.with(Cell::get)
}

pub fn captured() -> Captured {
    CAPTURED.with(|c| c.borrow().clone())
}

pub fn destroyed_order() -> Vec<&'static str> {
    ORDER.with(|o| o.borrow().clone())
}

pub fn fail_create_with(result: vk::Result) {
    CREATE_RESULT.with(|r| r.set(result));
}

/// Loader that resolves the three lifecycle entry points.
pub fn loader() -> RawProcAddr {
    RawProcAddr(Some(get_instance_proc_addr as vk::PFN_vkGetInstanceProcAddr))
}

/// Loader that is present but resolves nothing.
pub fn empty_loader() -> RawProcAddr {
    RawProcAddr(Some(get_nothing as vk::PFN_vkGetInstanceProcAddr))
}

fn bump(f: impl FnOnce(&mut Calls)) {
    CALLS.with(|c| {
        let mut calls = c.get();
        f(&mut calls);
        c.set(calls);
    });
}

unsafe extern "system" fn get_instance_proc_addr(
    _instance: vk::Instance,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    bump(|c| c.lookups += 1);
    let name = unsafe { CStr::from_ptr(name) };

    // SAFETY: each pointer is erased to the void function type and restored by the caller.
    unsafe {
        match name.to_bytes() {
            b"vkCreateInstance" => Some(std::mem::transmute::<
                vk::PFN_vkCreateInstance,
                unsafe extern "system" fn(),
            >(create_instance)),
            b"vkDestroySurfaceKHR" => Some(std::mem::transmute::<
                vk::PFN_vkDestroySurfaceKHR,
                unsafe extern "system" fn(),
            >(destroy_surface)),
            b"vkDestroyInstance" => Some(std::mem::transmute::<
                vk::PFN_vkDestroyInstance,
                unsafe extern "system" fn(),
            >(destroy_instance)),
            _ => None,
        }
    }
}

unsafe extern "system" fn get_nothing(
    _instance: vk::Instance,
    _name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    bump(|c| c.lookups += 1);
    None
}

unsafe fn names(ptrs: *const *const c_char, count: u32) -> Vec<String> {
    (0..count as usize)
        .map(|i| unsafe { CStr::from_ptr(*ptrs.add(i)) }.to_string_lossy().into_owned())
        .collect()
}

unsafe extern "system" fn create_instance(
    info: *const vk::InstanceCreateInfo<'_>,
    _allocator: *const vk::AllocationCallbacks<'_>,
    out: *mut vk::Instance,
) -> vk::Result {
    bump(|c| c.create += 1);

    let info = unsafe { &*info };
    let captured = Captured {
        api_version: unsafe { info.p_application_info.as_ref() }.map(|a| a.api_version),
        extensions: unsafe { names(info.pp_enabled_extension_names, info.enabled_extension_count) },
        layers: unsafe { names(info.pp_enabled_layer_names, info.enabled_layer_count) },
    };
    CAPTURED.with(|c| *c.borrow_mut() = captured);

    let result = CREATE_RESULT.with(Cell::get);
    if result == vk::Result::SUCCESS {
        unsafe { *out = vk::Instance::from_raw(INSTANCE) };
    }
    result
}

unsafe extern "system" fn destroy_surface(
    _instance: vk::Instance,
    _surface: vk::SurfaceKHR,
    _allocator: *const vk::AllocationCallbacks<'_>,
) {
    bump(|c| c.destroy_surface += 1);
    ORDER.with(|o| o.borrow_mut().push("surface"));
}

unsafe extern "system" fn destroy_instance(
    _instance: vk::Instance,
    _allocator: *const vk::AllocationCallbacks<'_>,
) {
    bump(|c| c.destroy_instance += 1);
    ORDER.with(|o| o.borrow_mut().push("instance"));
}
