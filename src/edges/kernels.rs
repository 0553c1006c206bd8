//! Fixed 3×3 integer kernels. Row index is the vertical offset (`dy + 1`),
//! column index the horizontal offset (`dx + 1`).

pub type Kernel3 = [[i32; 3]; 3];

/// Horizontal Sobel derivative.
pub const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical Sobel derivative. Not used by [`super::detect_edges`], whose
/// second accumulator also runs `SOBEL_KERNEL_X`.
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Laplacian-style high-pass kernel with a boosted centre.
///
/// Weights sum to 1 for every intensity, so flat regions are preserved.
pub const fn sharpen_kernel(intensity: i32) -> Kernel3 {
    [
        [0, -intensity, 0],
        [-intensity, 4 * intensity + 1, -intensity],
        [0, -intensity, 0],
    ]
}
