//! Fixed-kernel 3×3 convolutions: Sobel-style edge magnitude and sharpen.
//!
//! Kernels are immutable integer tables in [`kernels`]; the shared
//! [`convolve::accumulate`] loop sums colour channels in `i64` and lets each
//! filter pick its border policy:
//!
//! - edge detection skips out-of-bounds taps;
//! - sharpen replicates edge pixels.

pub mod convolve;
pub mod kernels;
pub mod sharpen;
pub mod sobel;

pub use convolve::Border;
pub use kernels::{sharpen_kernel, Kernel3, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
pub use sharpen::sharpen;
pub use sobel::detect_edges;
