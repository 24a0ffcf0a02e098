use crate::layout::CellGrid;
use crate::model::Vec3;

pub const DEFAULT_FOV_DEGREES: f64 = 50.0;
pub const DEFAULT_DISTANCE: f64 = 25.0;
pub const NEAR_PLANE: f64 = 0.1;

/// Perspective camera on the +z axis looking back at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_degrees: f64,
    pub distance: f64,
    /// Height of a terminal cell relative to its width.
    pub cell_aspect: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            distance: DEFAULT_DISTANCE,
            cell_aspect: 2.0,
        }
    }
}

impl Camera {
    pub fn aspect(&self, cols: u16, rows: u16) -> f64 {
        if rows == 0 {
            return 1.0;
        }
        cols as f64 / (rows as f64 * self.cell_aspect)
    }

    fn half_fov_tan(&self) -> f64 {
        (self.fov_degrees.to_radians() / 2.0).tan()
    }

    /// Visible `(width, height)` of the frustum at `depth` in front of the camera.
    pub fn frustum_extent(&self, depth: f64, cols: u16, rows: u16) -> (f64, f64) {
        let height = 2.0 * self.half_fov_tan() * depth.abs();
        (height * self.aspect(cols, rows), height)
    }

    /// Visible extent of the `z = 0` plane the text lives on.
    pub fn text_plane_extent(&self, cols: u16, rows: u16) -> (f64, f64) {
        self.frustum_extent(self.distance, cols, rows)
    }

    /// Project a world point to fractional cell coordinates, `(0, 0)` being
    /// the top-left corner. Points behind the near plane project to `None`.
    pub fn project(&self, point: Vec3, cols: u16, rows: u16) -> Option<(f64, f64)> {
        let depth = self.distance - point.z;
        if depth < NEAR_PLANE {
            return None;
        }

        let (half_w, half_h) = {
            let (w, h) = self.frustum_extent(depth, cols, rows);
            (w / 2.0, h / 2.0)
        };
        let ndc_x = point.x / half_w;
        let ndc_y = point.y / half_h;

        let col = (ndc_x + 1.0) / 2.0 * cols as f64;
        let row = (1.0 - ndc_y) / 2.0 * rows as f64;
        Some((col, row))
    }

    /// Screen columns per world unit on the text plane.
    pub fn columns_per_unit(&self, cols: u16, rows: u16) -> f64 {
        let (width, _) = self.text_plane_extent(cols, rows);
        if width > 0.0 {
            cols as f64 / width
        } else {
            0.0
        }
    }

    /// World size of one terminal cell on the text plane.
    pub fn cell_grid(&self, cols: u16, rows: u16) -> CellGrid {
        let (cols, rows) = (cols.max(1), rows.max(1));
        let (_, height) = self.text_plane_extent(cols, rows);
        CellGrid {
            column_width: 1.0 / self.columns_per_unit(cols, rows),
            row_height: height / rows as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_frustum_height_matches_fov() {
        let camera = Camera {
            fov_degrees: 90.0,
            distance: 10.0,
            cell_aspect: 1.0,
        };
        let (w, h) = camera.frustum_extent(10.0, 40, 20);
        assert!((h - 20.0).abs() < EPS);
        assert!((w - 40.0).abs() < EPS);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = Camera::default();
        let (col, row) = camera.project(Vec3::ZERO, 80, 24).unwrap();
        assert!((col - 40.0).abs() < EPS);
        assert!((row - 12.0).abs() < EPS);
    }

    #[test]
    fn test_frustum_edge_projects_to_screen_edge() {
        let camera = Camera::default();
        let (w, h) = camera.text_plane_extent(80, 24);
        let (col, row) = camera.project(Vec3::new(w / 2.0, h / 2.0, 0.0), 80, 24).unwrap();
        assert!((col - 80.0).abs() < EPS);
        assert!(row.abs() < EPS);
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let camera = Camera::default();
        assert!(camera.project(Vec3::new(0.0, 0.0, 30.0), 80, 24).is_none());
    }

    #[test]
    fn test_cell_grid_matches_projection() {
        let camera = Camera::default();
        for (cols, rows) in [(100, 10), (80, 12), (120, 39), (7, 3)] {
            let grid = camera.cell_grid(cols, rows);
            let (c0, r0) = camera.project(Vec3::ZERO, cols, rows).unwrap();
            let (c1, r1) = camera
                .project(Vec3::new(grid.column_width, -grid.row_height, 0.0), cols, rows)
                .unwrap();
            assert!((c1 - c0 - 1.0).abs() < EPS);
            assert!((r1 - r0 - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_cell_grid_of_empty_viewport_is_finite() {
        let grid = Camera::default().cell_grid(0, 0);
        assert!(grid.column_width.is_finite() && grid.column_width > 0.0);
        assert!(grid.row_height.is_finite() && grid.row_height > 0.0);
    }

    #[test]
    fn test_closer_points_spread_further() {
        let camera = Camera::default();
        let far = camera.project(Vec3::new(1.0, 0.0, -5.0), 80, 24).unwrap();
        let near = camera.project(Vec3::new(1.0, 0.0, 5.0), 80, 24).unwrap();
        assert!(near.0 > far.0);
    }
}
