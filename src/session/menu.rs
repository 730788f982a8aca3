//! Menu buttons for pack choice, size choice and the end screen.

use crate::core::config::IconPack;
use crate::layout::{Geometry, Rect};

/// What a button does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Bind the pack at this index of the configured packs.
    Pack(usize),
    /// Play with this many icons per card.
    Size(usize),
    Replay,
    Quit,
}

/// A clickable button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub rect: Rect,
    pub action: MenuAction,
}

/// A vertical stack of buttons centered in the window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    buttons: Vec<Button>,
}

impl Menu {
    /// Menu with no buttons (during play).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// One button per icon pack.
    #[must_use]
    pub fn packs(packs: &[IconPack], geometry: &Geometry) -> Self {
        let entries = packs
            .iter()
            .enumerate()
            .map(|(i, pack)| (pack.name.clone(), MenuAction::Pack(i)));
        Self::stacked(entries, geometry, 5)
    }

    /// One button per icon count.
    #[must_use]
    pub fn sizes(sizes: &[usize], geometry: &Geometry) -> Self {
        let entries = sizes
            .iter()
            .map(|&n| (format!("{} icons", n), MenuAction::Size(n)));
        Self::stacked(entries, geometry, 5)
    }

    /// Replay and quit, below the final results.
    #[must_use]
    pub fn game_over(geometry: &Geometry) -> Self {
        let entries = [
            ("Replay".to_string(), MenuAction::Replay),
            ("Quit".to_string(), MenuAction::Quit),
        ];
        Self::stacked(entries, geometry, 8)
    }

    /// Stack buttons from `top_lines` font lines below the window top.
    fn stacked(
        entries: impl IntoIterator<Item = (String, MenuAction)>,
        geometry: &Geometry,
        top_lines: u32,
    ) -> Self {
        let font = geometry.font_size;
        let width = geometry.width / 2;
        let height = 2 * font;
        let pitch = (height + font / 2) as i32;
        let x = (geometry.width / 4) as i32;
        let top = (top_lines * font) as i32;

        let buttons = entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, action))| Button {
                label,
                rect: Rect::new(x, top + i as i32 * pitch, width, height),
                action,
            })
            .collect();
        Self { buttons }
    }

    /// Index of the button under `(x, y)`.
    #[must_use]
    pub fn hit(&self, x: i32, y: i32) -> Option<usize> {
        self.buttons.iter().position(|b| b.rect.contains(x, y))
    }

    /// Action of the button under `(x, y)`.
    #[must_use]
    pub fn action_at(&self, x: i32, y: i32) -> Option<MenuAction> {
        self.hit(x, y).map(|i| self.buttons[i].action)
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Find the button for an action.
    #[must_use]
    pub fn button(&self, action: MenuAction) -> Option<&Button> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GameConfig, WindowConfig};

    fn geometry() -> Geometry {
        Geometry::from_config(&WindowConfig::default())
    }

    #[test]
    fn test_pack_menu() {
        let packs = vec![
            IconPack::new("classic", "a.png", 8, 10),
            IconPack::new("animals", "b.png", 4, 4),
        ];
        let menu = Menu::packs(&packs, &geometry());
        assert_eq!(menu.buttons().len(), 2);
        assert_eq!(menu.buttons()[1].label, "animals");

        let (x, y) = menu.buttons()[1].rect.center();
        assert_eq!(menu.action_at(x, y), Some(MenuAction::Pack(1)));
        assert_eq!(menu.action_at(0, 0), None);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let config = GameConfig::default();
        let menu = Menu::sizes(&config.sizes, &geometry());
        for pair in menu.buttons().windows(2) {
            let a = pair[0].rect;
            let b = pair[1].rect;
            assert!(a.y + a.height as i32 <= b.y);
        }
    }

    #[test]
    fn test_size_labels() {
        let menu = Menu::sizes(&[3, 8], &geometry());
        assert_eq!(menu.buttons()[0].label, "3 icons");
        assert_eq!(menu.button(MenuAction::Size(8)).map(|b| b.label.as_str()), Some("8 icons"));
    }

    #[test]
    fn test_game_over_menu() {
        let menu = Menu::game_over(&geometry());
        let replay = menu.button(MenuAction::Replay).unwrap().rect;
        let (x, y) = replay.center();
        assert_eq!(menu.action_at(x, y), Some(MenuAction::Replay));
        assert!(menu.button(MenuAction::Quit).is_some());
    }

    #[test]
    fn test_empty_menu() {
        assert_eq!(Menu::empty().hit(350, 350), None);
    }
}
