//! Customization screen cursor over the unlocked colors.

use super::registry::ColorRegistry;
use super::types::ShipColor;
use crate::menu::MenuAction;

/// Outcome of a palette action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCommand {
    None,
    Selected(ShipColor),
    Close,
}

/// Snapshot of the unlocked colors with a wrap-around cursor.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<ShipColor>,
    cursor: usize,
}

impl Palette {
    /// Open on the currently selected color.
    pub fn open(registry: &ColorRegistry) -> Self {
        let colors = registry.unlocked_colors();
        let cursor = colors
            .iter()
            .position(|c| *c == registry.selected())
            .unwrap_or(0);
        Self { colors, cursor }
    }

    /// Re-read the unlocked list, keeping the cursor on the same color if possible.
    pub fn refresh(&mut self, registry: &ColorRegistry) {
        let current = self.highlighted();
        self.colors = registry.unlocked_colors();
        self.cursor = current
            .and_then(|c| self.colors.iter().position(|x| *x == c))
            .unwrap_or(0);
    }

    pub fn colors(&self) -> &[ShipColor] {
        &self.colors
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> Option<ShipColor> {
        self.colors.get(self.cursor).copied()
    }

    pub fn handle(&mut self, action: MenuAction, registry: &mut ColorRegistry) -> PaletteCommand {
        if self.colors.is_empty() {
            return match action {
                MenuAction::Back => PaletteCommand::Close,
                _ => PaletteCommand::None,
            };
        }
        let len = self.colors.len();
        match action {
            MenuAction::Up => {
                self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
                PaletteCommand::None
            }
            MenuAction::Down => {
                self.cursor = (self.cursor + 1) % len;
                PaletteCommand::None
            }
            MenuAction::Confirm => {
                let color = self.colors[self.cursor];
                registry.select(color);
                PaletteCommand::Selected(color)
            }
            MenuAction::Back => PaletteCommand::Close,
            MenuAction::Left | MenuAction::Right => PaletteCommand::None,
        }
    }
}
