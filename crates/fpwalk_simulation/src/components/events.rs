//! Запросы контроллера к host-окружению

use bevy::prelude::*;

use crate::controller::CursorCapture;

/// Event: захватить курсор (lock + hide)
///
/// Генерируется: init система контроллера, один раз на entity.
/// Обрабатывается: client (window cursor options). Headless — никем.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCaptureRequested {
    pub body: Entity,
}

/// CursorCapture поверх EventWriter
pub struct CursorCaptureEvents<'a, 'w> {
    pub writer: &'a mut EventWriter<'w, CursorCaptureRequested>,
    pub body: Entity,
}

impl CursorCapture for CursorCaptureEvents<'_, '_> {
    fn capture_cursor(&mut self) {
        self.writer.write(CursorCaptureRequested { body: self.body });
    }
}
