use crate::drawer::DebugDrawerContext;

impl DebugDrawerContext<'_> {
    /// Draw a single line segment.
    pub fn draw_line(&mut self, start: [f32; 2], end: [f32; 2], color: [f32; 4]) {
        self.push_line(start, end, color);
    }

    /// Draw an axis-aligned rectangle from min to max corners (4 edges).
    pub fn draw_rect(&mut self, min: [f32; 2], max: [f32; 2], color: [f32; 4]) {
        let c = [
            [min[0], min[1]],
            [max[0], min[1]],
            [max[0], max[1]],
            [min[0], max[1]],
        ];
        self.push_line(c[0], c[1], color);
        self.push_line(c[1], c[2], color);
        self.push_line(c[2], c[3], color);
        self.push_line(c[3], c[0], color);
    }

    /// Draw an oriented box given center, half-extents, and rotation angle
    /// in radians.
    pub fn draw_box(&mut self, center: [f32; 2], half_extents: [f32; 2], angle: f32, color: [f32; 4]) {
        let (sin, cos) = angle.sin_cos();
        let corner = |sx: f32, sy: f32| -> [f32; 2] {
            let lx = half_extents[0] * sx;
            let ly = half_extents[1] * sy;
            [
                center[0] + cos * lx - sin * ly,
                center[1] + sin * lx + cos * ly,
            ]
        };

        let c = [
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ];

        self.push_line(c[0], c[1], color);
        self.push_line(c[1], c[2], color);
        self.push_line(c[2], c[3], color);
        self.push_line(c[3], c[0], color);
    }

    /// Draw a closed polygon outline.
    ///
    /// Fewer than two points draws nothing.
    pub fn draw_polygon(&mut self, points: &[[f32; 2]], color: [f32; 4]) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.push_line(pair[0], pair[1], color);
        }
        self.push_line(points[points.len() - 1], points[0], color);
    }

    /// Draw a circle outline.
    pub fn draw_circle(&mut self, center: [f32; 2], radius: f32, color: [f32; 4]) {
        const SEGMENTS: usize = 32;
        let mut prev = [center[0] + radius, center[1]];

        for i in 1..=SEGMENTS {
            let angle = (i as f32) * std::f32::consts::TAU / SEGMENTS as f32;
            let (sin, cos) = angle.sin_cos();
            let point = [center[0] + cos * radius, center[1] + sin * radius];
            self.push_line(prev, point, color);
            prev = point;
        }
    }

    /// Draw a cross marker at a point (2 axis-aligned lines).
    pub fn draw_cross(&mut self, center: [f32; 2], size: f32, color: [f32; 4]) {
        let half = size * 0.5;
        self.push_line(
            [center[0] - half, center[1]],
            [center[0] + half, center[1]],
            color,
        );
        self.push_line(
            [center[0], center[1] - half],
            [center[0], center[1] + half],
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::DebugDrawer;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn rect_emits_four_segments() {
        let drawer = DebugDrawer::new();
        let mut ctx = drawer.context();
        ctx.draw_rect([0.0, 0.0], [10.0, 10.0], RED);
        assert_eq!(ctx.vertex_count(), 8);
    }

    #[test]
    fn circle_emits_closed_loop() {
        let drawer = DebugDrawer::new();
        let mut ctx = drawer.context();
        ctx.draw_circle([5.0, 5.0], 2.0, RED);
        assert_eq!(ctx.vertex_count(), 64);
    }

    #[test]
    fn polygon_closes_outline() {
        let drawer = DebugDrawer::new();
        let mut ctx = drawer.context();
        ctx.draw_polygon(&[[0.0, 0.0], [10.0, 0.0], [5.0, 8.0]], RED);
        assert_eq!(ctx.vertex_count(), 6);

        ctx.draw_polygon(&[[1.0, 1.0]], RED);
        assert_eq!(ctx.vertex_count(), 6);
    }

    #[test]
    fn box_rotation_preserves_extents() {
        let drawer = DebugDrawer::new();
        let mut ctx = drawer.context();
        ctx.draw_box([0.0, 0.0], [2.0, 1.0], std::f32::consts::FRAC_PI_2, RED);
        assert_eq!(ctx.vertex_count(), 8);
    }
}
