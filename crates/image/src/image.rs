use base::Tensor;

/// Decoded pixel buffer in HWC layout: `[height, width, channels]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    U8(Tensor<u8>),
    U16(Tensor<u16>),
    F32(Tensor<f32>),
}

impl Image {
    pub fn shape(&self) -> &[usize] {
        match self {
            Image::U8(t) => &t.shape,
            Image::U16(t) => &t.shape,
            Image::F32(t) => &t.shape,
        }
    }

    // 0 when the tensor has fewer axes than HWC
    fn axis(&self, index: usize) -> usize {
        self.shape().get(index).copied().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.axis(0)
    }

    pub fn width(&self) -> usize {
        self.axis(1)
    }

    pub fn channels(&self) -> usize {
        self.axis(2)
    }
}
