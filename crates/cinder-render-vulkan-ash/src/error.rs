use ash::vk;
use cinder_core::CoreError;
use std::ffi::NulError;
use thiserror::Error;

pub type LoaderResult<T> = Result<T, LoaderError>;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to find vulkan loader")]
    LoaderMissing,

    #[error("vulkan error: {0}")]
    Vk(vk::Result),

    #[error("invalid layer or extension name: {0}")]
    InvalidName(#[from] NulError),
}

impl LoaderError {
    /// Maps a raw instance-creation result. The sentinel becomes `LoaderMissing`.
    pub fn from_result(result: vk::Result) -> LoaderResult<()> {
        match result {
            vk::Result::SUCCESS => Ok(()),
            vk::Result::ERROR_INVALID_EXTERNAL_HANDLE => Err(LoaderError::LoaderMissing),
            other => Err(LoaderError::Vk(other)),
        }
    }
}

impl From<vk::Result> for LoaderError {
    fn from(e: vk::Result) -> Self {
        LoaderError::Vk(e)
    }
}

impl From<LoaderError> for CoreError {
    fn from(e: LoaderError) -> Self {
        CoreError::Platform(e.to_string())
    }
}
