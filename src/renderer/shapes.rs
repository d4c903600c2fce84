//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a triangle list in screen space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Rectangle outline drawn as four bars of `thickness`, inset into the rect
pub fn rect_outline(pos: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0);
    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full width
    vertices.extend(rect(pos, Vec2::new(size.x, t), color));
    vertices.extend(rect(
        Vec2::new(pos.x, pos.y + size.y - t),
        Vec2::new(size.x, t),
        color,
    ));
    // Sides fill the gap between them
    let side = Vec2::new(t, size.y - 2.0 * t);
    vertices.extend(rect(Vec2::new(pos.x, pos.y + t), side, color));
    vertices.extend(rect(Vec2::new(pos.x + size.x - t, pos.y + t), side, color));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_rect_covers_corners() {
        let vertices = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), RED);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_stays_inside_rect() {
        let vertices = rect_outline(Vec2::ZERO, Vec2::new(100.0, 20.0), 2.0, RED);
        assert_eq!(vertices.len(), 24);
        for v in &vertices {
            assert!(v.position[0] >= 0.0 && v.position[0] <= 100.0);
            assert!(v.position[1] >= 0.0 && v.position[1] <= 20.0);
        }
    }

    #[test]
    fn test_circle_radius() {
        let center = Vec2::new(5.0, 5.0);
        let vertices = circle(center, 3.0, RED, 16);
        assert_eq!(vertices.len(), 48);
        for v in &vertices {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 3.0 + 1e-4);
        }
    }
}
