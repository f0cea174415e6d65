use tracing::trace;

use crate::core::Point;
use crate::interaction::{BrushState, BrushStep, SelectionReleaseBehavior, SelectionUpdate};
use crate::render::Renderer;

use super::{BrushEngine, BrushEvent};

impl<R: Renderer> BrushEngine<R> {
    /// Handles a press in plot-local coordinates.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let step = self.core.state.on_pointer_down(
            Point::new(x, y),
            &self.core.geometry,
            self.core.config.tuning,
        );
        if !self.apply_step(step) {
            return;
        }
        if let BrushState::Selecting(selection) = self.core.state {
            trace!(axis = selection.axis_index, x, y, "pointer down on axis");
            self.emit_plugin_event(BrushEvent::SelectionStarted {
                axis_index: selection.axis_index,
            });
            self.emit_selection_changed();
        }
    }

    /// Handles pointer motion in plot-local coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let step = self.core.state.on_pointer_move(
            Point::new(x, y),
            &self.core.geometry,
            self.core.config.tuning,
        );
        if self.apply_step(step) {
            self.emit_selection_changed();
        }
    }

    /// Handles pointer release.
    pub fn pointer_up(&mut self) {
        let step = self.core.state.on_pointer_up();
        let released = step.update == SelectionUpdate::Released;
        let selected_before = self.core.selected.len();
        self.apply_step(step);
        if released {
            if selected_before != self.core.selected.len() {
                self.emit_selection_changed();
            }
            self.emit_plugin_event(BrushEvent::SelectionEnded {
                retained_count: self.core.selected.len(),
            });
        }
    }

    /// Stores the step's state and applies its selection update. Returns
    /// `true` when the selected set was replaced.
    fn apply_step(&mut self, step: BrushStep) -> bool {
        self.core.state = step.state;
        match step.update {
            SelectionUpdate::Unchanged => false,
            SelectionUpdate::Replace(selected) => {
                self.core.selected = selected;
                true
            }
            SelectionUpdate::Released => {
                if self.core.config.release_behavior == SelectionReleaseBehavior::Clear {
                    self.core.selected.clear();
                }
                false
            }
        }
    }

    fn emit_selection_changed(&mut self) {
        self.emit_plugin_event(BrushEvent::SelectionChanged {
            selected_count: self.core.selected.len(),
        });
    }
}
