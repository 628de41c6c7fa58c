/// A 3x3 convolution kernel, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel3x3([[f32; 3]; 3]);

impl Kernel3x3 {
    /// Create a kernel from its rows.
    pub const fn new(weights: [[f32; 3]; 3]) -> Self {
        Self(weights)
    }

    /// The kernel that copies the center pixel.
    pub const fn identity() -> Self {
        Self([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]])
    }

    /// Create a sharpen kernel.
    ///
    /// The center weight is 9 and each neighbor -1, so the weights sum to 1 and
    /// flat regions are left unchanged.
    pub const fn sharpen() -> Self {
        Self([[-1.0, -1.0, -1.0], [-1.0, 9.0, -1.0], [-1.0, -1.0, -1.0]])
    }

    /// The weight at row `j` and column `i`.
    ///
    /// PRECONDITION: `i < 3` and `j < 3`.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f32 {
        self.0[j][i]
    }

    /// Sum of all weights, the gain of the kernel on a flat region.
    pub fn sum(&self) -> f32 {
        self.0.iter().flatten().sum()
    }
}
