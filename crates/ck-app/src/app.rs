//! Application Shell
//!
//! Window creation and the event loop. All computation runs synchronously
//! on this thread in response to input events.

use std::error::Error;
use std::num::NonZeroU32;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use ck_color::Color;

use crate::form::{ContrastForm, Field};
use crate::ui::{colors, Layout, Panel, PanelAction};

/// Contrast checker application
pub struct ContrastChecker {
    background: Color,
    text: Color,
}

impl ContrastChecker {
    /// Create a checker with the given initial pair.
    pub fn new(background: Color, text: Color) -> Self {
        Self { background, text }
    }

    /// Run the window until closed.
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = CheckerApp::new(self.background, self.text);
        event_loop.run_app(&mut app)?;

        Ok(())
    }
}

/// Event-loop state
struct CheckerApp {
    /// Window handle
    window: Option<Arc<Window>>,
    /// Surface for rendering
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    /// Reactive form state
    form: ContrastForm,
    /// Widget renderer
    panel: Panel,
    /// Current modifier state
    modifiers: winit::keyboard::ModifiersState,
    /// Current mouse position
    mouse_x: i32,
    mouse_y: i32,
}

impl CheckerApp {
    fn new(background: Color, text: Color) -> Self {
        Self {
            window: None,
            surface: None,
            form: ContrastForm::new(background, text),
            panel: Panel::new(),
            modifiers: winit::keyboard::ModifiersState::default(),
            mouse_x: 0,
            mouse_y: 0,
        }
    }

    /// Render the form into the window surface.
    fn render(&mut self) {
        let Some(window) = &self.window else { return };

        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return;
        }

        let Some(surface) = &mut self.surface else { return };

        let _ = surface.resize(
            NonZeroU32::new(size.width).unwrap(),
            NonZeroU32::new(size.height).unwrap(),
        );

        let mut buffer = match surface.buffer_mut() {
            Ok(b) => b,
            Err(_) => return,
        };

        let buffer_width = size.width as usize;
        let buffer_height = size.height as usize;

        buffer.fill(colors::WINDOW_BG);
        self.panel.render(&mut buffer, buffer_width, buffer_height, &self.form);

        let _ = buffer.present();
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, event: KeyEvent, modifiers: &winit::keyboard::ModifiersState) {
        if event.state != ElementState::Pressed {
            return;
        }

        let ctrl = modifiers.control_key();

        match event.physical_key {
            PhysicalKey::Code(KeyCode::KeyS) if ctrl => {
                self.form.swap();
                self.request_redraw();
                return;
            }
            PhysicalKey::Code(KeyCode::Tab) => {
                // Commit the focused field and move focus to the other one
                let next = self.form.focus().map_or(Field::Background, Field::other);
                self.form.set_focus(next);
                self.request_redraw();
                return;
            }
            _ => {}
        }

        if self.form.focus().is_none() {
            return;
        }

        match event.physical_key {
            PhysicalKey::Code(KeyCode::Enter) | PhysicalKey::Code(KeyCode::Escape) => {
                self.form.blur();
            }
            PhysicalKey::Code(KeyCode::Backspace) => {
                self.form.backspace();
            }
            _ => {
                if let Some(text) = &event.text {
                    for c in text.chars() {
                        if c.is_ascii_graphic() || c == ' ' {
                            self.form.push_char(c);
                        }
                    }
                }
            }
        }
        self.request_redraw();
    }

    /// Handle a mouse click at the tracked cursor position.
    fn handle_click(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        let size = match &self.window {
            Some(window) => window.inner_size(),
            None => return,
        };
        let layout = Layout::compute(size.width as usize, size.height as usize);

        match layout.hit_test(self.mouse_x, self.mouse_y) {
            Some(PanelAction::Focus(field)) => self.form.set_focus(field),
            Some(PanelAction::Swap) => {
                log::debug!("Swapping colors");
                self.form.swap();
            }
            None => self.form.blur(),
        }
        self.request_redraw();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for CheckerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Contrast Checker")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

        let window = Arc::new(event_loop.create_window(attrs).unwrap());

        let context = softbuffer::Context::new(window.clone()).unwrap();
        let surface = softbuffer::Surface::new(&context, window.clone()).unwrap();

        self.window = Some(window);
        self.surface = Some(surface);

        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            WindowEvent::Resized(_) => {
                self.request_redraw();
            }
            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let modifiers = self.modifiers;
                self.handle_key(event, &modifiers);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if state == ElementState::Pressed {
                    self.handle_click(button);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_x = position.x as i32;
                self.mouse_y = position.y as i32;
            }
            _ => {}
        }
    }
}
