/// Operating system family, decides how ffmpeg gets launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Unix,
}

impl HostPlatform {
    /// Resolve the platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else {
            HostPlatform::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        self == HostPlatform::Windows
    }
}
