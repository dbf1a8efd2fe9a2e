// Texture extents and the dense sample buffers the generators materialize.
// The buffers are plain owned Vec<f32>; the rendering side copies or encodes
// them into its own resources, nothing is shared across that boundary.

// 2D texture extent, components always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dim2 {
    pub width: u32,
    pub height: u32,
}

impl Dim2 {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "texture extent must be positive");
        Self { width, height }
    }

    // Number of samples in the full grid
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

// 3D texture extent, components always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dim3 {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Dim3 {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        assert!(
            width > 0 && height > 0 && depth > 0,
            "texture extent must be positive"
        );
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

// Dense row-major scalar field: data[y * width + x]
#[derive(Debug, Clone, PartialEq)]
pub struct Texture2D {
    dim: Dim2,
    data: Vec<f32>,
}

impl Texture2D {
    // Materialize a full grid by sampling `f` at every pixel.
    // The loop body only reads shared state, so callers that need a parallel
    // version can split the rows without touching this crate.
    pub fn from_fn(dim: Dim2, f: impl Fn(u32, u32) -> f32) -> Self {
        let mut data = Vec::with_capacity(dim.len());
        for y in 0..dim.height {
            for x in 0..dim.width {
                data.push(f(x, y));
            }
        }
        Self { dim, data }
    }

    pub fn from_raw(dim: Dim2, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), dim.len(), "buffer length must match extent");
        Self { dim, data }
    }

    pub fn dim(&self) -> Dim2 {
        self.dim
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.dim.width && y < self.dim.height);
        self.data[(y * self.dim.width + x) as usize]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }

    // Linear [0,1] -> [0,255] conversion for 8-bit channel consumers
    pub fn to_luma8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
            .collect()
    }
}

// Dense slice-row-major scalar field: data[z * width * height + y * width + x]
#[derive(Debug, Clone, PartialEq)]
pub struct Texture3D {
    dim: Dim3,
    data: Vec<f32>,
}

impl Texture3D {
    pub fn from_fn(dim: Dim3, f: impl Fn(u32, u32, u32) -> f32) -> Self {
        let mut data = Vec::with_capacity(dim.len());
        for z in 0..dim.depth {
            for y in 0..dim.height {
                for x in 0..dim.width {
                    data.push(f(x, y, z));
                }
            }
        }
        Self { dim, data }
    }

    pub fn from_raw(dim: Dim3, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), dim.len(), "buffer length must match extent");
        Self { dim, data }
    }

    pub fn dim(&self) -> Dim3 {
        self.dim
    }

    pub fn get(&self, x: u32, y: u32, z: u32) -> f32 {
        debug_assert!(x < self.dim.width && y < self.dim.height && z < self.dim.depth);
        let page = self.dim.width as usize * self.dim.height as usize;
        self.data[z as usize * page + (y * self.dim.width + x) as usize]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }

    pub fn to_luma8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
            .collect()
    }
}
