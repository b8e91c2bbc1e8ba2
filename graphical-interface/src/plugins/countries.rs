use std::{cell::RefCell, rc::Rc};

use egui::{Color32, Mesh, Pos2, Response, Shape, Stroke};
use walkers::{Plugin, Position, Projector};

use map_engine::style::{Rgb, StylePaint, StylePolicy};
use map_engine::InteractionState;

use crate::state::ViewState;

/// Draws the boundary dataset as status-colored polygons and feeds pointer
/// events into the interaction state.
pub struct Countries<'a> {
    view: &'a ViewState,
    policy: &'a StylePolicy,
    interaction: Rc<RefCell<InteractionState>>,
}

impl<'a> Countries<'a> {
    pub fn new(
        view: &'a ViewState,
        policy: &'a StylePolicy,
        interaction: Rc<RefCell<InteractionState>>,
    ) -> Self {
        Self {
            view,
            policy,
            interaction,
        }
    }
}

impl Plugin for Countries<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, response: &Response, projector: &Projector) {
        let pointer = response.hover_pos();

        // Project every ring once, holes included; the same points serve
        // the hover hit-test and the draw pass.
        let mut projected: Vec<Vec<Vec<Vec<Pos2>>>> =
            Vec::with_capacity(self.view.features().len());
        let mut hovered_index: Option<usize> = None;
        for (index, feature) in self.view.features().iter().enumerate() {
            let mut polygons = Vec::new();
            for polygon in feature.geometry.polygons() {
                let rings: Vec<Vec<Pos2>> = polygon
                    .iter()
                    .map(|ring| {
                        let mut points: Vec<Pos2> = ring
                            .iter()
                            .map(|coord| {
                                projector
                                    .project(Position::from_lat_lon(coord[1], coord[0]))
                                    .to_pos2()
                            })
                            .collect();
                        // GeoJSON rings repeat the first coordinate.
                        if points.len() > 1 && points.first() == points.last() {
                            points.pop();
                        }
                        points
                    })
                    .collect();
                if let Some(pointer) = pointer {
                    // Last hit wins, matching the front-most drawn feature.
                    if screen_point_in_polygon(pointer, &rings) {
                        hovered_index = Some(index);
                    }
                }
                polygons.push(rings);
            }
            projected.push(polygons);
        }

        // Hover transition: enter the resolved feature under the pointer,
        // leave otherwise. The state is updated before painting so the
        // current frame already shows the hover style.
        let mut interaction = self.interaction.borrow_mut();
        let hovered_code =
            hovered_index.and_then(|index| self.view.code_of(index).cloned());
        match hovered_code.clone() {
            Some(code) => interaction.pointer_enter(code),
            None => interaction.pointer_leave(),
        }

        if response.clicked() {
            if let Some(code) = hovered_code {
                // Toggle; the app reacts to the new selection after the
                // frame (callback, detail window, camera).
                let _ = interaction.click(code);
            }
        }

        // Paint: plain features first, hovered or selected ones on top so
        // their border is not occluded by neighbors.
        let mut raised: Vec<Shape> = Vec::new();
        for (index, polygons) in projected.into_iter().enumerate() {
            let code = self.view.code_of(index);
            let hovered = code.is_some_and(|code| interaction.is_hovered(code));
            let selected = code.is_some_and(|code| interaction.is_selected(code));
            let paint = self
                .policy
                .paint(self.view.status_of(code), hovered, selected);
            let stroke = Stroke::new(paint.stroke_weight, opaque(paint.stroke_color));

            for rings in polygons {
                let Some(outer) = rings.first() else {
                    continue;
                };
                if outer.len() < 3 {
                    continue;
                }
                // Holes stay unfilled: the enclave feature paints itself.
                let mut shapes = vec![filled_ring(outer.clone(), fill_color(&paint))];
                for ring in &rings {
                    if ring.len() >= 3 {
                        shapes.push(Shape::closed_line(ring.clone(), stroke));
                    }
                }
                let shape = Shape::Vec(shapes);
                if hovered || selected {
                    raised.push(shape);
                } else {
                    ui.painter().add(shape);
                }
            }
        }
        for shape in raised {
            ui.painter().add(shape);
        }
    }
}

fn fill_color(paint: &StylePaint) -> Color32 {
    let Rgb(r, g, b) = paint.fill_color;
    Color32::from_rgba_unmultiplied(r, g, b, (paint.fill_opacity * 255.0) as u8)
}

fn opaque(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

/// Ray-casting test in screen space over a projected ring.
fn screen_point_in_ring(point: Pos2, ring: &[Pos2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (ring[i].x, ring[i].y);
        let (xj, yj) = (ring[j].x, ring[j].y);
        if ((yi > point.y) != (yj > point.y))
            && (point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Outer-ring membership minus hole membership, in screen space. A pointer
/// inside an enclave hole belongs to the enclave's own feature, not to the
/// surrounding one.
fn screen_point_in_polygon(point: Pos2, rings: &[Vec<Pos2>]) -> bool {
    let Some(outer) = rings.first() else {
        return false;
    };
    if !screen_point_in_ring(point, outer) {
        return false;
    }
    !rings[1..]
        .iter()
        .any(|hole| screen_point_in_ring(point, hole))
}

/// Fills one projected ring as a triangle mesh. Country outlines are far
/// from convex, and egui's convex fill produces overlap artifacts on them.
fn filled_ring(points: Vec<Pos2>, color: Color32) -> Shape {
    let mut mesh = Mesh::default();
    for point in &points {
        mesh.colored_vertex(*point, color);
    }
    for [a, b, c] in triangulate(&points) {
        mesh.add_triangle(a, b, c);
    }
    Shape::mesh(mesh)
}

/// Ear-clipping triangulation of a simple ring, as vertex index triples.
fn triangulate(points: &[Pos2]) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let mut ring: Vec<u32> = (0..n as u32).collect();
    if signed_area(points) < 0.0 {
        ring.reverse();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    while ring.len() > 3 {
        let len = ring.len();
        let mut clipped = false;
        for i in 0..len {
            let prev = ring[(i + len - 1) % len];
            let curr = ring[i];
            let next = ring[(i + 1) % len];
            let (a, b, c) = (
                points[prev as usize],
                points[curr as usize],
                points[next as usize],
            );
            if cross(a, b, c) <= 0.0 {
                continue;
            }
            let blocked = ring.iter().any(|&other| {
                other != prev
                    && other != curr
                    && other != next
                    && point_in_triangle(points[other as usize], a, b, c)
            });
            if !blocked {
                triangles.push([prev, curr, next]);
                ring.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            // Self-intersecting ring; keep what was clipped so far.
            return triangles;
        }
    }
    triangles.push([ring[0], ring[1], ring[2]]);
    triangles
}

fn signed_area(points: &[Pos2]) -> f32 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

// Assumes counter-clockwise `a, b, c`, which `triangulate` guarantees.
fn point_in_triangle(p: Pos2, a: Pos2, b: Pos2, c: Pos2) -> bool {
    cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
}
