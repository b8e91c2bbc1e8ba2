use std::{
    cell::RefCell,
    rc::Rc,
    sync::mpsc::{channel, Receiver, Sender},
    time::{Duration, Instant},
};

use chrono::Local;
use egui::Context;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use logger::{Color, Logger};
use map_engine::camera::{self, CameraFlight};
use map_engine::types::{BoundaryFeature, CountryCode};
use map_engine::{aliases, resolver, InteractionState, StylePolicy};

use crate::{
    plugins,
    state::ViewState,
    status_source::{spawn_fetch, FetchResult, HttpStatusSource},
    widgets::WidgetCountry,
    windows,
};

const INITIAL_LAT: f64 = 52.069;
const INITIAL_LON: f64 = 19.480;
const INITIAL_ZOOM: f64 = 4.0;
const STATUS_REFRESH_MS: u64 = 30_000;
const FRAME_TICK_MS: u64 = 1000;

/// Callback invoked on every selection toggle, with the newly selected code
/// or `None` when the selection was cleared.
pub type SelectionCallback = Box<dyn FnMut(Option<&CountryCode>)>;

/// The main application struct: owns the tile layer, the view and
/// interaction state, the status refresh loop and the camera animation.
pub struct MapApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    view_state: ViewState,
    interaction: Rc<RefCell<InteractionState>>,
    policy: StylePolicy,
    country_widget: Option<WidgetCountry>,
    last_selected: Option<CountryCode>,
    on_country_select: Option<SelectionCallback>,
    status_endpoint: String,
    fetch_tx: Sender<FetchResult>,
    fetch_rx: Receiver<FetchResult>,
    last_refresh_request: Option<Instant>,
    last_refresh_label: Option<String>,
    flight: Option<FlightAnimation>,
    logger: Logger,
}

impl MapApp {
    /// Creates a new `MapApp`, resolving the dataset once and starting the
    /// first status refresh.
    pub fn new(
        egui_ctx: Context,
        features: Vec<BoundaryFeature>,
        status_endpoint: String,
        logger: Logger,
    ) -> Self {
        let mut initial_map_memory = MapMemory::default();
        let _ = initial_map_memory.set_zoom(INITIAL_ZOOM);

        let view_state = ViewState::new(features);
        let _ = logger.info(
            &format!(
                "Map mounted: {} features, {} island markers",
                view_state.features().len(),
                view_state.islands().len()
            ),
            Color::Green,
            true,
        );

        let (fetch_tx, fetch_rx) = channel();
        let mut app = Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx,
            )),
            map_memory: initial_map_memory,
            view_state,
            interaction: Rc::new(RefCell::new(InteractionState::new())),
            policy: StylePolicy::default(),
            country_widget: None,
            last_selected: None,
            on_country_select: None,
            status_endpoint,
            fetch_tx,
            fetch_rx,
            last_refresh_request: None,
            last_refresh_label: None,
            flight: None,
            logger,
        };
        app.request_status_refresh();
        app
    }

    /// Registers the page-level selection callback.
    pub fn with_selection_callback(mut self, callback: SelectionCallback) -> Self {
        self.on_country_select = Some(callback);
        self
    }

    /// Starts a status fetch unless one is already outstanding.
    fn request_status_refresh(&mut self) {
        if let Some(token) = self.view_state.statuses.begin_refresh() {
            match HttpStatusSource::new(self.status_endpoint.clone()) {
                Ok(source) => spawn_fetch(source, token, self.fetch_tx.clone()),
                Err(e) => {
                    // Release the guard so the next tick can try again.
                    self.view_state.statuses.fail(token);
                    let _ = self
                        .logger
                        .warn(&format!("Could not start status refresh: {e}"), true);
                }
            }
            self.last_refresh_request = Some(Instant::now());
        }
    }

    /// Applies completed fetches. A failed or stale fetch leaves the
    /// current table in place; the map keeps rendering with what it has.
    fn drain_fetch_results(&mut self) {
        let completed: Vec<FetchResult> = self.fetch_rx.try_iter().collect();
        for (token, result) in completed {
            match result {
                Ok(records) => {
                    if self.view_state.statuses.apply(token, &records) {
                        self.last_refresh_label =
                            Some(Local::now().format("%H:%M:%S").to_string());
                        let _ = self.logger.info(
                            &format!("Status refresh applied: {} records", records.len()),
                            Color::Cyan,
                            false,
                        );
                    }
                }
                Err(e) => {
                    self.view_state.statuses.fail(token);
                    let _ = self
                        .logger
                        .warn(&format!("Status refresh failed, keeping previous table: {e}"), true);
                }
            }
        }
    }

    /// Reacts to a selection toggle: notify the callback, open or close the
    /// detail window, and fly the camera to the new country.
    fn handle_selection_change(&mut self, selected: Option<CountryCode>) {
        if let Some(callback) = self.on_country_select.as_mut() {
            callback(selected.as_ref());
        }

        match &selected {
            Some(code) => {
                let name = display_name(code, self.view_state.features());
                self.country_widget = Some(WidgetCountry::new(code.clone(), name));
                // No matching polygon (island markers, pseudo-codes) means
                // no camera movement; the selection itself still stands.
                self.flight = camera::flight_to_country(code, self.view_state.features())
                    .map(|target| FlightAnimation::new(target, &self.map_memory));
                let _ = self
                    .logger
                    .info(&format!("Country selected: {code}"), Color::Blue, false);
            }
            None => {
                self.country_widget = None;
            }
        }
        self.last_selected = selected;
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let refresh_due = self
            .last_refresh_request
            .map(|at| at.elapsed() >= Duration::from_millis(STATUS_REFRESH_MS))
            .unwrap_or(true);
        if refresh_due {
            self.request_status_refresh();
        }
        self.drain_fetch_results();

        if let Some(flight) = &self.flight {
            if flight.step(&mut self.map_memory) {
                self.flight = None;
            }
            ctx.request_repaint();
        }
        ctx.request_repaint_after(Duration::from_millis(FRAME_TICK_MS));

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let start_position = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);

                let countries_plugin = plugins::Countries::new(
                    &self.view_state,
                    &self.policy,
                    self.interaction.clone(),
                );
                let islands_plugin = plugins::Islands::new(
                    &self.view_state,
                    &self.policy,
                    self.interaction.clone(),
                );

                let map = Map::new(
                    Some(self.tiles.as_mut()),
                    &mut self.map_memory,
                    start_position,
                )
                .with_plugin(countries_plugin)
                .with_plugin(islands_plugin);

                ui.add(map);

                windows::zoom(ui, &mut self.map_memory);
            });

        let selected = self.interaction.borrow().selected().cloned();
        if selected != self.last_selected {
            self.handle_selection_change(selected);
        }

        if let Some(widget) = &mut self.country_widget {
            let status = self.view_state.statuses.get(&widget.selected_code);
            if !widget.show(ctx, status, self.last_refresh_label.as_deref()) {
                // Closing the window deselects, through the same toggle the
                // map click uses.
                let code = widget.selected_code.clone();
                let _ = self.interaction.borrow_mut().click(code);
                self.country_widget = None;
            }
        }
    }
}

impl Drop for MapApp {
    fn drop(&mut self) {
        // A fetch still in flight must not touch state that is going away.
        self.view_state.statuses.abort();
        self.interaction.borrow_mut().clear();
    }
}

/// Preferred label for the detail window: the dataset's own display name,
/// then the alias table, then the bare code.
fn display_name(code: &CountryCode, features: &[BoundaryFeature]) -> String {
    resolver::find_feature(code, features)
        .map(|feature| feature.properties.display_name())
        .filter(|name| !name.is_empty())
        .or_else(|| aliases::display_name_for(code))
        .unwrap_or(code.as_str())
        .to_string()
}

/// One camera move, interpolated from the viewport at selection time to the
/// engine-computed target over the flight's fixed duration.
struct FlightAnimation {
    target: CameraFlight,
    from_lat: f64,
    from_lon: f64,
    from_zoom: f64,
    started: Instant,
}

impl FlightAnimation {
    fn new(target: CameraFlight, map_memory: &MapMemory) -> Self {
        let from = map_memory
            .detached()
            .unwrap_or(Position::from_lat_lon(INITIAL_LAT, INITIAL_LON));
        Self {
            target,
            from_lat: from.lat(),
            from_lon: from.lon(),
            from_zoom: map_memory.zoom(),
            started: Instant::now(),
        }
    }

    /// Advances the animation.
    ///
    /// # Returns
    /// * `bool` - `true` once the flight has reached its target.
    fn step(&self, map_memory: &mut MapMemory) -> bool {
        let progress = (self.started.elapsed().as_millis() as f64
            / self.target.duration_ms.max(1) as f64)
            .min(1.0);
        let eased = progress * progress * (3.0 - 2.0 * progress);

        let lat = lerp(self.from_lat, self.target.center_lat, eased);
        let lon = lerp(self.from_lon, self.target.center_lon, eased);
        map_memory.center_at(Position::from_lat_lon(lat, lon));
        let _ = map_memory.set_zoom(lerp(self.from_zoom, self.target.zoom, eased));

        progress >= 1.0
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn test_display_name_falls_back_to_alias_table() {
        let code = CountryCode::parse("POL").expect("code");
        assert_eq!(display_name(&code, &[]), "Poland");

        let pseudo = CountryCode::parse("ZZZ").expect("code");
        assert_eq!(display_name(&pseudo, &[]), "ZZZ");
    }
}
