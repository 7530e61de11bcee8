use super::TensorError;

/// Shape of a tensor.
///
/// An empty shape is a scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    /// The dimensions of the tensor.
    pub dims: Vec<usize>,
}

impl Shape {
    /// Constructs a new `Shape`.
    pub fn new<const D: usize>(dims: [usize; D]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }

    /// Shape of a scalar tensor.
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    /// Returns the total number of elements of a tensor having this shape.
    ///
    /// Saturates at `usize::MAX` when the product overflows.
    pub fn num_elements(&self) -> usize {
        self.checked_num_elements().unwrap_or(usize::MAX)
    }

    /// Same as [num_elements](Shape::num_elements), but returns `None` on overflow.
    ///
    /// A shape with a zero-sized dimension holds no elements, whatever its other dimensions.
    pub fn checked_num_elements(&self) -> Option<usize> {
        if self.dims.contains(&0) {
            return Some(0);
        }

        self.dims
            .iter()
            .try_fold(1usize, |acc, dim| acc.checked_mul(*dim))
    }

    /// Returns the number of dimensions.
    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }

    /// Construct a vector of the dims.
    pub fn to_vec(&self) -> Vec<usize> {
        self.dims.clone()
    }

    /// Converts the dimensions to the signed 64-bit representation used on the wire.
    pub fn to_i64_dims(&self) -> Result<Vec<i64>, TensorError> {
        self.dims
            .iter()
            .enumerate()
            .map(|(axis, dim)| {
                i64::try_from(*dim).map_err(|_| TensorError::DimensionOverflow { axis, dim: *dim })
            })
            .collect()
    }

    /// Builds a shape from signed 64-bit dimensions, rejecting negative values.
    pub fn from_i64_dims(dims: &[i64]) -> Result<Self, TensorError> {
        let dims = dims
            .iter()
            .enumerate()
            .map(|(axis, dim)| {
                usize::try_from(*dim).map_err(|_| TensorError::InvalidDimension { axis, dim: *dim })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dims })
    }
}

impl<const D: usize> From<[usize; D]> for Shape {
    fn from(dims: [usize; D]) -> Self {
        Shape::new(dims)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape { dims }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }
}
