//! Session state: the single mutable owner of the current crosshair.

use crosshair_config::{presets, resolve_initial, CrosshairConfig, PersistedRecord, SettingsStore};
use crosshair_console::{console_command, ConsoleCommand};
use crosshair_ipc::{
    decode_ui_message, encode_core_messages, CoreToUi, UiToCore, ERROR_INVALID_MESSAGE,
    ERROR_UNKNOWN_PRESET,
};
use crosshair_render::{render, CanvasSize, DrawPrimitive};
use tracing::{debug, info, warn};

use crate::{DrawBackend, FrontendError};

/// Output of one render-and-serialize pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub config: CrosshairConfig,
    pub primitives: Vec<DrawPrimitive>,
    pub command: ConsoleCommand,
}

impl Frame {
    pub fn into_message(self) -> CoreToUi {
        CoreToUi::Frame {
            config: self.config,
            primitives: self.primitives,
            command: self.command.to_string(),
        }
    }
}

/// Owns the current config, the canvas size and the settings store.
///
/// Every change goes through [`Session::handle`], which re-renders,
/// re-serializes and re-persists before returning.
pub struct Session<S: SettingsStore> {
    config: CrosshairConfig,
    canvas: CanvasSize,
    store: S,
}

impl<S: SettingsStore> Session<S> {
    /// Start a session from a URL query (if any), else the store, else defaults.
    ///
    /// Nothing is written back until the first change.
    pub fn new(store: S, query: Option<&str>, canvas: CanvasSize) -> Self {
        let config = resolve_initial(query, &store);
        info!(
            "Session started at {}x{} with style {}",
            canvas.width, canvas.height, config.style
        );
        Self {
            config,
            canvas,
            store,
        }
    }

    pub fn config(&self) -> CrosshairConfig {
        self.config
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Console command for the current config.
    pub fn command(&self) -> ConsoleCommand {
        console_command(&self.config)
    }

    /// Share link query string for the current config, without the `?`.
    pub fn share_query(&self) -> String {
        PersistedRecord::from_config(&self.config).to_query_string()
    }

    /// Render and serialize the current config.
    pub fn frame(&self) -> Frame {
        Frame {
            config: self.config,
            primitives: render(&self.config, self.canvas),
            command: self.command(),
        }
    }

    /// Draw the current config onto a backend.
    pub fn present<B: DrawBackend + ?Sized>(&self, backend: &mut B) -> Result<(), FrontendError> {
        backend.apply(&render(&self.config, backend.size()))
    }

    /// Handle one UI message and return the replies.
    pub fn handle(&mut self, msg: UiToCore) -> Vec<CoreToUi> {
        debug!("Handling {msg:?}");
        match msg {
            UiToCore::UpdateField(update) => {
                let next = self.config.apply(&update);
                vec![self.commit(next)]
            }
            UiToCore::ApplyPreset { id } => match presets::find(&id) {
                Some(preset) => {
                    info!("Applying preset {}", preset.id);
                    vec![self.commit(preset.config)]
                }
                None => {
                    warn!("Unknown preset: {id:?}");
                    vec![CoreToUi::error(
                        ERROR_UNKNOWN_PRESET,
                        format!("No preset named {id:?}"),
                    )]
                }
            },
            UiToCore::LoadRecord(record) => vec![self.commit(record.to_config())],
            UiToCore::Reset => vec![self.commit(CrosshairConfig::default())],
            UiToCore::Resize(canvas) => {
                self.canvas = canvas;
                vec![self.frame().into_message()]
            }
            UiToCore::RequestShareQuery => vec![CoreToUi::ShareQuery {
                query: self.share_query(),
            }],
            UiToCore::ListPresets => vec![CoreToUi::Presets {
                ids: presets::ids().map(str::to_string).collect(),
            }],
        }
    }

    /// Decode a JSON message, handle it and encode the replies.
    ///
    /// Undecodable input becomes an `Error` reply rather than a failure.
    pub fn dispatch_json(&mut self, json: &str) -> Result<String, FrontendError> {
        let replies = match decode_ui_message(json) {
            Ok(msg) => self.handle(msg),
            Err(e) => {
                warn!("Dropping UI message: {e}");
                vec![CoreToUi::error(ERROR_INVALID_MESSAGE, e.to_string())]
            }
        };
        Ok(encode_core_messages(&replies)?)
    }

    fn commit(&mut self, config: CrosshairConfig) -> CoreToUi {
        self.config = config;
        let frame = self.frame();
        self.persist();
        frame.into_message()
    }

    fn persist(&mut self) {
        let record = PersistedRecord::from_config(&self.config);
        if let Err(e) = self.store.save(&record) {
            warn!("Failed to save settings: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosshair_config::{ConfigError, CrosshairStyle, FieldUpdate, MemoryStore, Rgb};
    use crosshair_render::CpuSurface;

    fn session() -> Session<MemoryStore> {
        Session::new(MemoryStore::new(), None, CanvasSize::default())
    }

    fn frame_config(reply: &CoreToUi) -> CrosshairConfig {
        match reply {
            CoreToUi::Frame { config, .. } => *config,
            other => panic!("expected frame, got {other:?}"),
        }
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl SettingsStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<PersistedRecord>, ConfigError> {
            Ok(None)
        }

        fn save(&mut self, _record: &PersistedRecord) -> Result<(), ConfigError> {
            Err(ConfigError::Unavailable("read only".into()))
        }
    }

    #[test]
    fn test_new_session_uses_defaults_and_does_not_save() {
        let session = session();
        assert_eq!(session.config(), CrosshairConfig::default());
        assert!(session.store().record().is_none());
    }

    #[test]
    fn test_query_wins_over_store() {
        let stored = PersistedRecord::from_config(&CrosshairConfig {
            size: 12,
            ..Default::default()
        });
        let session = Session::new(
            MemoryStore::with_record(stored),
            Some("?size=3&gap=1"),
            CanvasSize::default(),
        );
        assert_eq!(session.config().size, 3);
        assert_eq!(session.config().gap, 1);

        let stored = PersistedRecord::from_config(&CrosshairConfig {
            size: 12,
            ..Default::default()
        });
        let session = Session::new(MemoryStore::with_record(stored), Some(""), CanvasSize::default());
        assert_eq!(session.config().size, 12);
    }

    #[test]
    fn test_update_field_renders_serializes_and_persists() {
        let mut session = session();
        let replies = session.handle(UiToCore::UpdateField(FieldUpdate::Color("#FF0000".into())));
        assert_eq!(replies.len(), 1);

        let CoreToUi::Frame {
            config,
            primitives,
            command,
        } = &replies[0]
        else {
            panic!("expected frame");
        };
        assert_eq!(config.color, Rgb::new(255, 0, 0));
        assert!(matches!(primitives[0], DrawPrimitive::Clear { .. }));
        assert!(command.contains("cl_crosshaircolor_r 255; cl_crosshaircolor_g 0"));

        let saved = session.store().record().unwrap();
        assert_eq!(saved.color.as_deref(), Some("FF0000"));
        assert_eq!(saved.to_config(), session.config());
    }

    #[test]
    fn test_garbage_update_keeps_value() {
        let mut session = session();
        let replies = session.handle(UiToCore::UpdateField(FieldUpdate::Size("abc".into())));
        assert_eq!(frame_config(&replies[0]).size, 5);
    }

    #[test]
    fn test_apply_preset() {
        let mut session = session();
        let replies = session.handle(UiToCore::ApplyPreset { id: "ropz".into() });
        let config = frame_config(&replies[0]);
        assert_eq!(config.style, CrosshairStyle::Dot);
        assert_eq!(config.size, 2);
        assert_eq!(session.store().record().unwrap().style.as_deref(), Some("dot"));
    }

    #[test]
    fn test_unknown_preset_is_a_no_op() {
        let mut session = session();
        let replies = session.handle(UiToCore::ApplyPreset { id: "nobody".into() });
        assert!(matches!(
            &replies[0],
            CoreToUi::Error { code, .. } if code == ERROR_UNKNOWN_PRESET
        ));
        assert_eq!(session.config(), CrosshairConfig::default());
        assert!(session.store().record().is_none());
    }

    #[test]
    fn test_load_record_and_reset() {
        let mut session = session();
        let record = PersistedRecord::from_query_string("size=9&style=circle&dot=1").unwrap();
        let config = frame_config(&session.handle(UiToCore::LoadRecord(record))[0]);
        assert_eq!(config.size, 9);
        assert_eq!(config.style, CrosshairStyle::Circle);
        assert!(config.draw_center_dot);
        assert_eq!(config.opacity, 255);

        let config = frame_config(&session.handle(UiToCore::Reset)[0]);
        assert_eq!(config, CrosshairConfig::default());
        assert_eq!(session.store().record().unwrap().size.as_deref(), Some("5"));
    }

    #[test]
    fn test_resize_rerenders_at_new_center() {
        let mut session = session();
        let replies = session.handle(UiToCore::Resize(CanvasSize::new(400, 100)));
        let CoreToUi::Frame { primitives, .. } = &replies[0] else {
            panic!("expected frame");
        };
        assert_eq!(
            primitives[0],
            DrawPrimitive::Clear {
                width: 400.0,
                height: 100.0
            }
        );
        assert_eq!(session.canvas(), CanvasSize::new(400, 100));
    }

    #[test]
    fn test_share_query_and_preset_list() {
        let mut session = session();
        let replies = session.handle(UiToCore::RequestShareQuery);
        assert_eq!(
            replies,
            vec![CoreToUi::ShareQuery {
                query: "size=5&gap=-3&thickness=1&opacity=200&outline=1&color=50FA7B&style=classic&dot=0"
                    .into()
            }]
        );

        let replies = session.handle(UiToCore::ListPresets);
        let CoreToUi::Presets { ids } = &replies[0] else {
            panic!("expected presets");
        };
        assert_eq!(ids.len(), presets::PRESETS.len());
        assert_eq!(ids[0], "s1mple");
    }

    #[test]
    fn test_save_failure_does_not_abort_pass() {
        let mut session = Session::new(ReadOnlyStore, None, CanvasSize::default());
        let replies = session.handle(UiToCore::UpdateField(FieldUpdate::Gap("4".into())));
        assert_eq!(frame_config(&replies[0]).gap, 4);
        assert_eq!(session.config().gap, 4);
    }

    #[test]
    fn test_dispatch_json() {
        let mut session = session();
        let out = session
            .dispatch_json(r#"{"type":"UpdateField","data":{"field":"drawCenterDot","value":true}}"#)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["type"], "Frame");
        assert!(value[0]["data"]["command"]
            .as_str()
            .unwrap()
            .ends_with("cl_crosshairdot 1"));

        let out = session.dispatch_json("not json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["type"], "Error");
        assert_eq!(value[0]["data"]["code"], ERROR_INVALID_MESSAGE);
    }

    #[test]
    fn test_present_uses_backend_size() {
        let session = session();
        let mut surface = CpuSurface::new(30, 30);
        session.present(&mut surface).unwrap();
        // Default gap is -3 so the arms meet at the center.
        assert!(surface.get_pixel(15, 15).unwrap()[3] > 0.0);
    }
}
