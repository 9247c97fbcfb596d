//! Backend selection: which lane implementation runs on this target.
//!
//! The build targets one 128-bit instruction set. Detection only confirms
//! that target and otherwise falls back to the scalar loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  force_scalar feature    →  Scalar                       │
//! │  portable_simd feature   →  Portable (std::simd f32x4)   │
//! │  x86 / x86_64 + SSE2     →  Sse2 (addps, movups)         │
//! │  x86 without SSE2        →  Scalar (logged once)         │
//! │  aarch64                 →  Neon (fadd v.4s, ld1/st1)    │
//! │  anything else           →  Portable ([f32; 4] blocks)   │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::OnceLock;

use crate::simd::F32_LANES;

/// A lane implementation of the addition kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// One element per iteration.
    #[default]
    Scalar,
    /// Target-independent 4-lane blocks.
    Portable,
    /// x86 SSE2, 128-bit `xmm` registers.
    Sse2,
    /// aarch64 Advanced SIMD, 128-bit `v` registers.
    Neon,
}

impl Backend {
    /// Every backend, in ascending preference.
    pub const ALL: [Backend; 4] = [
        Backend::Scalar,
        Backend::Portable,
        Backend::Sse2,
        Backend::Neon,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            Backend::Portable => "portable",
            Backend::Sse2 => "SSE2",
            Backend::Neon => "NEON",
        }
    }

    /// Elements per vector-phase iteration.
    pub const fn lanes(self) -> usize {
        match self {
            Backend::Scalar => 1,
            Backend::Portable | Backend::Sse2 | Backend::Neon => F32_LANES,
        }
    }

    /// Whether this backend can run on the current CPU.
    pub fn is_available(self) -> bool {
        let caps = detect();
        match self {
            Backend::Scalar | Backend::Portable => true,
            Backend::Sse2 => caps.sse2,
            Backend::Neon => caps.neon,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detected capabilities of the current hardware and build.
#[derive(Clone, Debug, Default)]
pub struct ComputeCaps {
    pub sse2: bool,
    pub neon: bool,
    /// Built with the `portable_simd` feature.
    pub portable_simd: bool,
    /// Built with the `force_scalar` feature.
    pub force_scalar: bool,
    /// Backend used by the dispatching entry points.
    pub backend: Backend,
}

static CAPS: OnceLock<ComputeCaps> = OnceLock::new();

/// Detect hardware capabilities (cached after first call).
pub fn detect() -> &'static ComputeCaps {
    CAPS.get_or_init(|| {
        let mut caps = ComputeCaps {
            sse2: detect_sse2(),
            neon: cfg!(target_arch = "aarch64"),
            portable_simd: cfg!(feature = "portable_simd"),
            force_scalar: cfg!(feature = "force_scalar"),
            backend: Backend::Scalar,
        };
        caps.backend = select_backend(&caps);
        log::debug!("lanewise backend: {}", caps.backend);
        caps
    })
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_sse2() -> bool {
    // Baseline on x86_64; only a runtime question on 32-bit x86 builds.
    cfg!(target_feature = "sse2") || std::is_x86_feature_detected!("sse2")
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn detect_sse2() -> bool {
    false
}

fn select_backend(caps: &ComputeCaps) -> Backend {
    if caps.force_scalar {
        return Backend::Scalar;
    }
    if caps.portable_simd {
        return Backend::Portable;
    }
    if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
        if caps.sse2 {
            return Backend::Sse2;
        }
        log::warn!("SSE2 not available on this CPU, using scalar loop");
        return Backend::Scalar;
    }
    if caps.neon {
        return Backend::Neon;
    }
    Backend::Portable
}

/// Log detected capabilities summary.
pub fn log_caps() {
    let caps = detect();
    log::info!("=== Compute Capabilities ===");
    log::info!("  SSE2:          {}", caps.sse2);
    log::info!("  NEON:          {}", caps.neon);
    log::info!("  portable_simd: {}", caps.portable_simd);
    log::info!("  force_scalar:  {}", caps.force_scalar);
    log::info!("  backend:       {} ({} lanes)", caps.backend, caps.backend.lanes());
}
