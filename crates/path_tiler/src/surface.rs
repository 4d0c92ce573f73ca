//! The drawing-surface collaborator consulted by the lattice sweep.
use mint::Vector2;

/// A surface the tiles are drawn onto. Only its size in device units is ever queried.
pub trait DrawingSurface {
    fn size(&self) -> Vector2<f64>;
}

/// A plain rectangular surface with a fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl DrawingSurface for Canvas {
    fn size(&self) -> Vector2<f64> {
        Vector2 {
            x: self.width,
            y: self.height,
        }
    }
}

impl<T: DrawingSurface + ?Sized> DrawingSurface for &T {
    fn size(&self) -> Vector2<f64> {
        (**self).size()
    }
}
