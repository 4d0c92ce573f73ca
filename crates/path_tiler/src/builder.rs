//! Device-space path buffers.
//!
//! [`PathBuilder`] only ever sees points that have already been through the current transform.
//! The session in [`crate::tiler`] does the transforming and forwards here.
use crate::error::{Error, Result};
use crate::geometry::{Path, Point};

/// Accumulates polylines as drawing commands arrive.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    paths: Vec<Vec<Point>>,
    current: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new path at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.paths.push(vec![p]);
        self.current = Some(p);
    }

    /// Appends `p` to the active path.
    pub fn line_to(&mut self, p: Point) -> Result<()> {
        let active = self
            .paths
            .last_mut()
            .ok_or_else(|| Error::InvalidState("line_to before any move_to".into()))?;
        active.push(p);
        self.current = Some(p);
        Ok(())
    }

    /// Closes the active path by repeating its first point, and clears the current point.
    pub fn close_path(&mut self) -> Result<()> {
        let active = self
            .paths
            .last_mut()
            .ok_or_else(|| Error::InvalidState("close_path before any move_to".into()))?;
        if let Some(&start) = active.first() {
            active.push(start);
        }
        self.current = None;
        Ok(())
    }

    /// The last point drawn, in device space. `None` before `move_to` or after `close_path`.
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn paths(&self) -> Vec<Path> {
        self.paths.iter().cloned().map(Path::new).collect()
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths.into_iter().map(Path::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;

    #[test]
    fn move_to_starts_a_new_path() {
        let mut b = PathBuilder::new();
        b.move_to(DVec2::new(1.0, 1.0));
        b.line_to(DVec2::new(2.0, 1.0)).expect("active path");
        b.move_to(DVec2::new(5.0, 5.0));
        let paths = b.paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].len(), 2);
        assert_eq!(paths[1].points(), &[DVec2::new(5.0, 5.0)]);
        assert_eq!(b.current(), Some(DVec2::new(5.0, 5.0)));
    }

    #[test]
    fn close_path_duplicates_first_point_and_clears_current() {
        let mut b = PathBuilder::new();
        b.move_to(DVec2::ZERO);
        b.line_to(DVec2::X).expect("active path");
        b.line_to(DVec2::ONE).expect("active path");
        b.close_path().expect("active path");
        assert_eq!(b.current(), None);
        let path = &b.paths()[0];
        assert!(path.is_closed());
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn commands_without_a_path_are_rejected() {
        let mut b = PathBuilder::new();
        assert!(matches!(b.line_to(DVec2::ONE), Err(Error::InvalidState(_))));
        assert!(matches!(b.close_path(), Err(Error::InvalidState(_))));
        assert_eq!(b.path_count(), 0);
    }
}
