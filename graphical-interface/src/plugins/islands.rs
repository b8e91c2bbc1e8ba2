use std::{cell::RefCell, rc::Rc};

use egui::{Color32, Rect, Response, Sense, Stroke, Vec2};
use walkers::{Plugin, Position, Projector};

use map_engine::style::{Rgb, StylePolicy};
use map_engine::InteractionState;

use crate::state::ViewState;

const MARKER_RADIUS: f32 = 6.0;
const HIT_AREA: f32 = 20.0;

/// Point markers for small nations the boundary dataset has no polygons
/// for, styled and wired exactly like the polygon features.
pub struct Islands<'a> {
    view: &'a ViewState,
    policy: &'a StylePolicy,
    interaction: Rc<RefCell<InteractionState>>,
}

impl<'a> Islands<'a> {
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

impl Plugin for Islands<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for island in self.view.islands() {
            let code = island.country_code();
            let screen_position = projector
                .project(Position::from_lat_lon(island.lat, island.lon))
                .to_pos2();

            let clickable_area =
                Rect::from_center_size(screen_position, Vec2::splat(HIT_AREA));
            let response = ui.allocate_rect(clickable_area, Sense::click());

            let mut interaction = self.interaction.borrow_mut();
            if response.hovered() {
                interaction.pointer_enter(code.clone());
            }

            let paint = self.policy.paint(
                self.view.statuses.get(&code),
                interaction.is_hovered(&code),
                interaction.is_selected(&code),
            );
            let Rgb(r, g, b) = paint.fill_color;
            ui.painter().circle(
                screen_position,
                MARKER_RADIUS,
                Color32::from_rgba_unmultiplied(r, g, b, (paint.fill_opacity * 255.0) as u8),
                Stroke::new(
                    paint.stroke_weight,
                    Color32::from_rgb(
                        paint.stroke_color.0,
                        paint.stroke_color.1,
                        paint.stroke_color.2,
                    ),
                ),
            );

            if response.clicked() {
                let _ = interaction.click(code);
            }
        }
    }
}
