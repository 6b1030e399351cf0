//! Trip form: mode, model selectors, and raw numeric fields.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use fuelbud_core::catalog::{self, VehicleModel, DEFAULT_COMPARE_MODEL, DEFAULT_MODEL, MODELS};
use fuelbud_core::trip::TripInput;

use crate::styles::ColorTheme;

const MAX_FIELD_LEN: usize = 16;

/// Which request the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Predict,
    Compare,
}

impl Mode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Predict => "Predict",
            Self::Compare => "Compare",
        }
    }
}

/// Focusable form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ModelA,
    ModelB,
    Distance,
    FuelUsed,
    FuelPrice,
}

impl Field {
    const ORDER: [Field; 5] = [
        Field::ModelA,
        Field::ModelB,
        Field::Distance,
        Field::FuelUsed,
        Field::FuelPrice,
    ];

    #[must_use]
    pub fn label(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Self::ModelA, Mode::Predict) => "Model",
            (Self::ModelA, Mode::Compare) => "Model A",
            (Self::ModelB, _) => "Model B",
            (Self::Distance, _) => "Distance (mi)",
            (Self::FuelUsed, _) => "Fuel used (gal)",
            (Self::FuelPrice, _) => "Fuel price ($/gal)",
        }
    }

    fn is_model(self) -> bool {
        matches!(self, Self::ModelA | Self::ModelB)
    }
}

/// Form state.
#[derive(Debug, Clone)]
pub struct FormState {
    pub mode: Mode,
    pub focus: Field,
    model_a: usize,
    model_b: usize,
    pub distance: String,
    pub fuel_used: String,
    pub fuel_price: String,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Predict,
            focus: Field::Distance,
            model_a: catalog::position(DEFAULT_MODEL).unwrap_or(0),
            model_b: catalog::position(DEFAULT_COMPARE_MODEL).unwrap_or(0),
            distance: String::new(),
            fuel_used: String::new(),
            fuel_price: String::new(),
        }
    }

    /// Fields visible in the current mode, in tab order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ORDER
            .into_iter()
            .filter(move |f| self.mode == Mode::Compare || *f != Field::ModelB)
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let fields: Vec<Field> = self.fields().collect();
        let len = fields.len();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.focus = fields[next];
    }

    /// Switch between predict and compare.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Predict => Mode::Compare,
            Mode::Compare => Mode::Predict,
        };
        if self.mode == Mode::Predict && self.focus == Field::ModelB {
            self.focus = Field::ModelA;
        }
    }

    /// Cycle the focused model selector. No effect on numeric fields.
    pub fn cycle_model(&mut self, forward: bool) {
        let slot = match self.focus {
            Field::ModelA => &mut self.model_a,
            Field::ModelB => &mut self.model_b,
            _ => return,
        };
        let len = MODELS.len();
        *slot = if forward {
            (*slot + 1) % len
        } else {
            (*slot + len - 1) % len
        };
    }

    /// Append a typed character to the focused numeric field.
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.focused_text_mut() {
            if field.len() < MAX_FIELD_LEN && !c.is_control() {
                field.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            field.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            field.clear();
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Distance => Some(&mut self.distance),
            Field::FuelUsed => Some(&mut self.fuel_used),
            Field::FuelPrice => Some(&mut self.fuel_price),
            Field::ModelA | Field::ModelB => None,
        }
    }

    #[must_use]
    pub fn model_a(&self) -> &'static VehicleModel {
        &MODELS[self.model_a % MODELS.len()]
    }

    #[must_use]
    pub fn model_b(&self) -> &'static VehicleModel {
        &MODELS[self.model_b % MODELS.len()]
    }

    /// Raw trip fields for validation.
    #[must_use]
    pub fn trip_input(&self) -> TripInput {
        TripInput::new(
            self.distance.clone(),
            self.fuel_used.clone(),
            self.fuel_price.clone(),
        )
    }

    fn display_value(&self, field: Field) -> String {
        match field {
            Field::ModelA => format!("< {} >", self.model_a().label),
            Field::ModelB => format!("< {} >", self.model_b().label),
            Field::Distance => self.distance.clone(),
            Field::FuelUsed => self.fuel_used.clone(),
            Field::FuelPrice => self.fuel_price.clone(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the form panel.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormState, loading: bool) {
    let theme = ColorTheme::default();
    let lines: Vec<Line> = form
        .fields()
        .map(|field| {
            let focused = field == form.focus;
            let marker = if focused { "> " } else { "  " };
            let mut value_style = if field.is_model() {
                theme.accent_style()
            } else {
                theme.text_style()
            };
            if focused {
                value_style = value_style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::styled(marker, theme.header_style()),
                Span::styled(
                    format!("{:<20}", field.label(form.mode)),
                    theme.muted_style(),
                ),
                Span::styled(form.display_value(field), value_style),
            ])
        })
        .collect();

    let title = if loading {
        format!(" {} (calculating...) ", form.mode.label())
    } else {
        format!(" {} ", form.mode.label())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
