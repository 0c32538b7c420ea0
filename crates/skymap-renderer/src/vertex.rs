//! GPU vertex layouts and packing of primitives into them.
//!
//! All layouts are `#[repr(C)]` + `Pod` so a packed slice can be uploaded with
//! `bytemuck::cast_slice` and no copying.

use crate::primitives::{ImagePrimitive, LinePrimitive, PointPrimitive};

/// One point sprite.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct PointVertex {
    pub position: [f32; 3],
    /// Sprite size in pixels.
    pub size: f32,
    pub color: [f32; 4],
}

/// One end of a line segment.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub width: f32,
    pub color: [f32; 4],
}

/// One corner of a textured image quad.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct ImageVertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];

pub fn pack_points(points: &[PointPrimitive], out: &mut Vec<PointVertex>) {
    out.extend(points.iter().map(|p| PointVertex {
        position: p.location.to_array(),
        size: p.size as f32,
        color: p.color.to_rgba_f32(),
    }));
}

/// Lines become a line list: two vertices per segment.
pub fn pack_lines(lines: &[LinePrimitive], out: &mut Vec<LineVertex>) {
    for line in lines {
        let color = line.color.to_rgba_f32();
        for segment in line.vertices.windows(2) {
            for end in segment {
                out.push(LineVertex {
                    position: end.to_array(),
                    width: line.line_width,
                    color,
                });
            }
        }
    }
}

/// Images become two triangles each, spanned by their billboard basis.
pub fn pack_images(images: &[ImagePrimitive], out: &mut Vec<ImageVertex>) {
    for image in images {
        let corners = image.billboard.corners(&image.location);
        out.extend(QUAD_TRIANGLES.iter().map(|&i| ImageVertex {
            position: corners[i].to_array(),
            tex_coord: QUAD_TEX_COORDS[i],
        }));
    }
}
