use bitflags::bitflags;

bitflags! {
    /// The operating systems a catalog tracks, as a flag set.
    ///
    /// Catalog column headers use the short names `linux`, `osx` and `win`
    /// (case-insensitive); display output uses the friendly names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Platform: u32 {
        /// Linux
        const LINUX = 1;
        /// macOS
        const MACOS = 2;
        /// Windows
        const WINDOWS = 4;
    }
}

impl Platform {
    /// Parses a catalog column header into a single platform flag.
    ///
    /// Named apart from the bitflags-generated `from_name`, which matches
    /// flag identifiers rather than catalog headers.
    #[must_use]
    pub fn from_header(name: &str) -> Option<Platform> {
        match name.to_lowercase().as_str() {
            "linux" => Some(Platform::LINUX),
            "osx" => Some(Platform::MACOS),
            "win" => Some(Platform::WINDOWS),
            _ => None,
        }
    }

    /// The catalog column header for a single platform flag, or `None` for
    /// empty or combined sets.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self {
            Platform::LINUX => Some("linux"),
            Platform::MACOS => Some("osx"),
            Platform::WINDOWS => Some("win"),
            _ => None,
        }
    }

    /// Renders the set for human-facing output, e.g. `Linux, macOS`.
    #[must_use]
    pub fn to_friendly_string(self) -> String {
        let mut names = Vec::new();
        if self.contains(Platform::LINUX) {
            names.push("Linux");
        }
        if self.contains(Platform::MACOS) {
            names.push("macOS");
        }
        if self.contains(Platform::WINDOWS) {
            names.push("Windows");
        }
        names.join(", ")
    }
}
