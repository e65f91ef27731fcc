//! Static build-dependency matrix
//!
//! Maps `(InstallArch, OsFamily)` to the rdma-core build dependencies and
//! `InstallArch` to the cmake configure line. Populated once at first use and
//! never mutated. A missing entry is a configuration gap surfaced as
//! [`RdmupError::UnsupportedTarget`] by the resolver, never a silent default.
//!
//! Package lists follow <https://github.com/linux-rdma/rdma-core#building>.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::plan::{InstallArch, OsFamily};

static X86_64_DEBIAN_PACKAGES: &[&str] = &[
    "cmake",
    "libudev-dev",
    "libnl-3-dev",
    "libnl-route-3-dev",
    "ninja-build",
    "pkg-config",
    "valgrind",
    "python3-dev",
    "cython3",
    "python3-docutils",
    "pandoc",
    "libssl-dev",
    "libelf-dev",
    "python3-pip",
    "libnuma-dev",
];

static X86_64_FEDORA_PACKAGES: &[&str] = &[
    "cmake",
    "gcc",
    "libudev-devel",
    "libnl3-devel",
    "pkg-config",
    "valgrind",
    "python3-devel",
    "python3-docutils",
    "openssl-devel",
    "unzip",
    "elfutils-devel",
    "python3-pip",
    "libpcap-devel",
    "tar",
    "wget",
    "dos2unix",
    "psmisc",
    "kernel-devel-$(uname -r)",
    "librdmacm-devel",
    "libmnl-devel",
    "kernel-modules-extra",
    "numactl-devel",
    "kernel-headers",
    "elfutils-libelf-devel",
    "meson",
    "ninja-build",
    "libbpf-devel",
];

static I386_DEBIAN_PACKAGES: &[&str] = &[
    "gcc:i386",
    "cmake",
    "ninja-build",
    "meson",
    "libnl-3-dev:i386",
    "libnl-route-3-dev:i386",
    "pkg-config",
    "valgrind",
    "libelf-dev:i386",
];

static X86_64_CONFIGURE: &str = "cmake -DIN_PLACE=0 -DNO_MAN_PAGES=1 -DCMAKE_INSTALL_PREFIX=/usr";

// Cross build: forces the 32-bit toolchain and pkg-config search path.
// Opaque shell text, executed as a single invocation.
static I386_CONFIGURE: &str = "PKG_CONFIG_LIBDIR=/usr/lib/i386-linux-gnu/pkgconfig \
     cmake -DIN_PLACE=0 -DNO_MAN_PAGES=1 -DCMAKE_INSTALL_PREFIX=/usr \
     -DCMAKE_C_COMPILER=/usr/bin/i686-linux-gnu-gcc -DCMAKE_C_FLAGS=-m32";

/// Read-only dependency and configure-command tables
pub struct DependencyMatrix {
    packages: HashMap<(InstallArch, OsFamily), &'static [&'static str]>,
    configure: HashMap<InstallArch, &'static str>,
}

static MATRIX: LazyLock<DependencyMatrix> = LazyLock::new(DependencyMatrix::populate);

impl DependencyMatrix {
    fn populate() -> Self {
        let packages = HashMap::from([
            (
                (InstallArch::X86_64, OsFamily::Debian),
                X86_64_DEBIAN_PACKAGES,
            ),
            (
                (InstallArch::X86_64, OsFamily::Fedora),
                X86_64_FEDORA_PACKAGES,
            ),
            ((InstallArch::I386, OsFamily::Debian), I386_DEBIAN_PACKAGES),
        ]);
        let configure = HashMap::from([
            (InstallArch::X86_64, X86_64_CONFIGURE),
            (InstallArch::I386, I386_CONFIGURE),
        ]);
        Self {
            packages,
            configure,
        }
    }

    /// Process-wide matrix instance
    pub fn get() -> &'static Self {
        &MATRIX
    }

    /// Build dependencies for a target, `None` when no recipe exists
    pub fn packages(&self, arch: InstallArch, os: OsFamily) -> Option<&'static [&'static str]> {
        self.packages.get(&(arch, os)).copied()
    }

    /// Configure line for an architecture, `None` when no recipe exists
    pub fn configure(&self, arch: InstallArch) -> Option<&'static str> {
        self.configure.get(&arch).copied()
    }
}
