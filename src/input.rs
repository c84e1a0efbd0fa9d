//! Input handling abstractions.
//!
//! This module provides traits and types for handling keyboard and mouse
//! input in a modular way, so each handler can be tested independently.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::types::NavAction;

/// Result of processing an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Move through the deck.
    Navigate(NavAction),
    /// Start a PDF export.
    Export,
    /// Dismiss the message overlay.
    Dismiss,
    /// The application should quit.
    Quit,
    /// The input was ignored (not applicable to this handler).
    Ignored,
}

/// Context passed to input handlers.
///
/// This provides handlers with the information they need to process
/// input without directly accessing the full App state.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputContext {
    /// Whether a status or error message is shown.
    pub has_message: bool,
    /// Whether an export is running.
    pub exporting: bool,
}

/// Trait for handling keyboard input.
pub trait InputHandler {
    /// Handle a key event.
    ///
    /// # Arguments
    /// * `key` - The key event to handle
    /// * `ctx` - Context about the current application state
    ///
    /// # Returns
    /// The result of handling the input.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for global shortcuts (dismiss, quit).
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        match key.code {
            KeyCode::Esc if ctx.has_message => InputResult::Dismiss,
            KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for slide navigation and export keys.
#[derive(Debug, Default)]
pub struct NavigationHandler;

impl InputHandler for NavigationHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => InputResult::Navigate(NavAction::Next),
            KeyCode::Left => InputResult::Navigate(NavAction::Previous),
            KeyCode::Char('e') if !ctx.exporting => InputResult::Export,
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "NavigationHandler"
    }
}

/// Run `key` through `handlers` in order; the first non-ignored result wins.
pub fn dispatch(handlers: &mut [Box<dyn InputHandler>], key: KeyEvent, ctx: &InputContext) -> InputResult {
    for handler in handlers.iter_mut() {
        let result = handler.handle(key, ctx);
        if result != InputResult::Ignored {
            tracing::debug!("{} handled {:?}", handler.name(), key.code);
            return result;
        }
    }
    InputResult::Ignored
}

/// Map a left click to the control it landed on.
pub fn hit_test(controls: &[(Rect, NavAction)], mouse: &MouseEvent) -> Option<NavAction> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    controls
        .iter()
        .find(|(area, _)| {
            mouse.column >= area.left()
                && mouse.column < area.right()
                && mouse.row >= area.top()
                && mouse.row < area.bottom()
        })
        .map(|(_, action)| *action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::empty() }
    }

    #[test]
    fn test_navigation_keys() {
        let mut handler = NavigationHandler;
        let ctx = InputContext::default();
        assert_eq!(handler.handle(make_key(KeyCode::Right), &ctx), InputResult::Navigate(NavAction::Next));
        assert_eq!(handler.handle(make_key(KeyCode::Char(' ')), &ctx), InputResult::Navigate(NavAction::Next));
        assert_eq!(handler.handle(make_key(KeyCode::Left), &ctx), InputResult::Navigate(NavAction::Previous));
        assert_eq!(handler.handle(make_key(KeyCode::Up), &ctx), InputResult::Ignored);
    }

    #[test]
    fn test_export_key_ignored_while_exporting() {
        let mut handler = NavigationHandler;
        let busy = InputContext { exporting: true, ..InputContext::default() };
        assert_eq!(handler.handle(make_key(KeyCode::Char('e')), &InputContext::default()), InputResult::Export);
        assert_eq!(handler.handle(make_key(KeyCode::Char('e')), &busy), InputResult::Ignored);
    }

    #[test]
    fn test_global_handler_esc() {
        let mut handler = GlobalHandler;
        let with_message = InputContext { has_message: true, ..InputContext::default() };
        assert_eq!(handler.handle(make_key(KeyCode::Esc), &with_message), InputResult::Dismiss);
        assert_eq!(handler.handle(make_key(KeyCode::Esc), &InputContext::default()), InputResult::Quit);
        assert_eq!(handler.handle(make_key(KeyCode::Char('q')), &with_message), InputResult::Quit);
    }

    #[test]
    fn test_dispatch_first_match_wins() {
        let mut handlers: Vec<Box<dyn InputHandler>> = vec![Box::new(GlobalHandler), Box::new(NavigationHandler)];
        let ctx = InputContext::default();
        assert_eq!(dispatch(&mut handlers, make_key(KeyCode::Char('q')), &ctx), InputResult::Quit);
        assert_eq!(dispatch(&mut handlers, make_key(KeyCode::Left), &ctx), InputResult::Navigate(NavAction::Previous));
        assert_eq!(dispatch(&mut handlers, make_key(KeyCode::Tab), &ctx), InputResult::Ignored);
    }

    #[test]
    fn test_hit_test() {
        let controls = [
            (Rect::new(2, 10, 5, 3), NavAction::Previous),
            (Rect::new(73, 10, 5, 3), NavAction::Next),
        ];
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(hit_test(&controls, &click(down, 3, 11)), Some(NavAction::Previous));
        assert_eq!(hit_test(&controls, &click(down, 77, 12)), Some(NavAction::Next));
        assert_eq!(hit_test(&controls, &click(down, 78, 12)), None);
        assert_eq!(hit_test(&controls, &click(MouseEventKind::Moved, 3, 11)), None);
    }
}
