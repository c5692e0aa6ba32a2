//! Shop screen navigation.
//!
//! The shop has three focus modes. `Tabs` picks between the upgrade list and
//! the gacha machine, `Items` walks the upgrade list (plus a trailing Exit
//! slot that leads back to the tabs), and `Levels` picks which level of the highlighted item to buy.

use super::logic::purchase;
use super::types::{ShopItemId, UpgradeLevels};
use crate::achievements::{AchievementLedger, AchievementStore};
use crate::config::EconomyConfig;
use crate::menu::MenuAction;
use crate::utils::TimedMessage;
use crate::wallet::CoinBalance;
use tracing::debug;

/// Number of purchasable items. The Exit slot sits at this index.
pub const TOTAL_ITEMS: usize = ShopItemId::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopMode {
    Tabs,
    Items,
    Levels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopTab {
    Items,
    Gacha,
}

/// What the caller should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCommand {
    None,
    OpenGacha,
    Close,
}

#[derive(Debug, Clone)]
pub struct ShopMenu {
    pub mode: ShopMode,
    pub tab: ShopTab,
    /// `0..TOTAL_ITEMS` are items, `TOTAL_ITEMS` is Exit.
    pub selected_item: usize,
    pub selected_level: u8,
    feedback: TimedMessage,
    popup: TimedMessage,
    feedback_frames: u32,
    popup_frames: u32,
}

impl Default for ShopMenu {
    fn default() -> Self {
        Self::new(&EconomyConfig::default())
    }
}

impl ShopMenu {
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            mode: ShopMode::Tabs,
            tab: ShopTab::Items,
            selected_item: 0,
            selected_level: 1,
            feedback: TimedMessage::default(),
            popup: TimedMessage::default(),
            feedback_frames: config.purchase_feedback_frames,
            popup_frames: config.achievement_popup_frames,
        }
    }

    /// Open the shop, picking up any achievement unlocked since the last visit.
    pub fn open<S: AchievementStore>(
        ledger: &mut AchievementLedger<S>,
        config: &EconomyConfig,
    ) -> Self {
        let mut menu = Self::new(config);
        if let Some(name) = ledger.consume_recent_unlock() {
            debug!(achievement = name, "achievement popup queued");
            menu.popup.show(name, menu.popup_frames);
        }
        menu
    }

    /// Advance feedback and popup timers by one frame.
    pub fn tick(&mut self) {
        self.feedback.tick();
        self.popup.tick();
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.visible()
    }

    pub fn achievement_popup(&self) -> Option<&str> {
        self.popup.visible()
    }

    pub fn is_exit_selected(&self) -> bool {
        self.selected_item == TOTAL_ITEMS
    }

    /// The highlighted item, None on the Exit slot.
    pub fn highlighted_item(&self) -> Option<ShopItemId> {
        ShopItemId::ALL.get(self.selected_item).copied()
    }

    pub fn handle<W, U>(
        &mut self,
        action: MenuAction,
        wallet: &mut W,
        upgrades: &mut U,
    ) -> ShopCommand
    where
        W: CoinBalance + ?Sized,
        U: UpgradeLevels + ?Sized,
    {
        match self.mode {
            ShopMode::Tabs => self.handle_tabs(action),
            ShopMode::Items => {
                self.handle_items(action, &*upgrades);
                ShopCommand::None
            }
            ShopMode::Levels => {
                self.handle_levels(action, wallet, upgrades);
                ShopCommand::None
            }
        }
    }

    fn handle_tabs(&mut self, action: MenuAction) -> ShopCommand {
        match action {
            MenuAction::Left => {
                self.tab = ShopTab::Items;
                ShopCommand::None
            }
            MenuAction::Right => {
                self.tab = ShopTab::Gacha;
                ShopCommand::None
            }
            MenuAction::Confirm => match self.tab {
                ShopTab::Items => {
                    self.mode = ShopMode::Items;
                    ShopCommand::None
                }
                ShopTab::Gacha => ShopCommand::OpenGacha,
            },
            MenuAction::Back => ShopCommand::Close,
            MenuAction::Up | MenuAction::Down => ShopCommand::None,
        }
    }

    fn handle_items<U: UpgradeLevels + ?Sized>(&mut self, action: MenuAction, upgrades: &U) {
        match action {
            MenuAction::Up => {
                self.selected_item = if self.selected_item == 0 {
                    TOTAL_ITEMS
                } else {
                    self.selected_item - 1
                };
            }
            MenuAction::Down => {
                self.selected_item = (self.selected_item + 1) % (TOTAL_ITEMS + 1);
            }
            MenuAction::Confirm => match self.highlighted_item() {
                Some(item) => {
                    let next = upgrades.level(item).saturating_add(1);
                    self.selected_level = next.min(item.max_level());
                    self.mode = ShopMode::Levels;
                }
                None => self.mode = ShopMode::Tabs,
            },
            MenuAction::Back => self.mode = ShopMode::Tabs,
            MenuAction::Left | MenuAction::Right => {}
        }
    }

    fn handle_levels<W, U>(&mut self, action: MenuAction, wallet: &mut W, upgrades: &mut U)
    where
        W: CoinBalance + ?Sized,
        U: UpgradeLevels + ?Sized,
    {
        let Some(item) = self.highlighted_item() else {
            self.mode = ShopMode::Items;
            return;
        };

        match action {
            MenuAction::Left => {
                self.selected_level = self.selected_level.saturating_sub(1).max(1);
            }
            MenuAction::Right => {
                self.selected_level = self.selected_level.saturating_add(1).min(item.max_level());
            }
            MenuAction::Confirm => match purchase(item, self.selected_level, wallet, upgrades) {
                Ok(receipt) => {
                    self.feedback.show(receipt.message(), self.feedback_frames);
                    self.mode = ShopMode::Items;
                }
                Err(e) => self.feedback.show(e.to_string(), self.feedback_frames),
            },
            MenuAction::Back => self.mode = ShopMode::Items,
            MenuAction::Up | MenuAction::Down => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::InMemoryStore;
    use crate::shop::types::ShipUpgrades;
    use crate::wallet::CoinPurse;

    fn press(
        menu: &mut ShopMenu,
        wallet: &mut CoinPurse,
        up: &mut ShipUpgrades,
        a: MenuAction,
    ) -> ShopCommand {
        menu.handle(a, wallet, up)
    }

    #[test]
    fn test_tabs_pick_side_and_open_gacha() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();

        assert_eq!(menu.tab, ShopTab::Items);
        press(&mut menu, &mut wallet, &mut up, MenuAction::Right);
        press(&mut menu, &mut wallet, &mut up, MenuAction::Right);
        assert_eq!(menu.tab, ShopTab::Gacha);
        assert_eq!(
            press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm),
            ShopCommand::OpenGacha
        );
        press(&mut menu, &mut wallet, &mut up, MenuAction::Left);
        press(&mut menu, &mut wallet, &mut up, MenuAction::Left);
        assert_eq!(menu.tab, ShopTab::Items);
    }

    #[test]
    fn test_down_on_tabs_does_not_enter_items() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        assert_eq!(
            press(&mut menu, &mut wallet, &mut up, MenuAction::Down),
            ShopCommand::None
        );
        assert_eq!(menu.mode, ShopMode::Tabs);
    }

    #[test]
    fn test_back_from_tabs_closes() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        assert_eq!(
            press(&mut menu, &mut wallet, &mut up, MenuAction::Back),
            ShopCommand::Close
        );
    }

    #[test]
    fn test_item_cursor_wraps_through_exit() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);
        assert_eq!(menu.mode, ShopMode::Items);

        press(&mut menu, &mut wallet, &mut up, MenuAction::Up);
        assert!(menu.is_exit_selected());
        assert_eq!(menu.highlighted_item(), None);

        press(&mut menu, &mut wallet, &mut up, MenuAction::Down);
        assert_eq!(menu.selected_item, 0);
        assert_eq!(menu.highlighted_item(), Some(ShopItemId::MultiShot));
    }

    #[test]
    fn test_confirm_on_exit_returns_to_tabs() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        menu.mode = ShopMode::Items;
        menu.selected_item = TOTAL_ITEMS;
        assert_eq!(
            press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm),
            ShopCommand::None
        );
        assert_eq!(menu.mode, ShopMode::Tabs);
        assert_eq!(
            press(&mut menu, &mut wallet, &mut up, MenuAction::Back),
            ShopCommand::Close
        );
    }

    #[test]
    fn test_level_cursor_saturates_at_u8_max() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        menu.mode = ShopMode::Levels;
        menu.selected_level = u8::MAX;
        press(&mut menu, &mut wallet, &mut up, MenuAction::Right);
        assert_eq!(menu.selected_level, ShopItemId::MultiShot.max_level());
    }

    #[test]
    fn test_level_selection_preselects_next_and_clamps() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        up.set_level(ShopItemId::MultiShot, 1).unwrap();
        menu.mode = ShopMode::Items;

        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);
        assert_eq!(menu.mode, ShopMode::Levels);
        assert_eq!(menu.selected_level, 2);

        for _ in 0..5 {
            press(&mut menu, &mut wallet, &mut up, MenuAction::Right);
        }
        assert_eq!(menu.selected_level, 3);
        for _ in 0..5 {
            press(&mut menu, &mut wallet, &mut up, MenuAction::Left);
        }
        assert_eq!(menu.selected_level, 1);
    }

    #[test]
    fn test_maxed_item_preselects_max() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        up.set_level(ShopItemId::MultiShot, 3).unwrap();
        menu.mode = ShopMode::Items;
        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);
        assert_eq!(menu.selected_level, 3);
    }

    #[test]
    fn test_successful_purchase_returns_to_items() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(30);
        let mut up = ShipUpgrades::new();
        menu.mode = ShopMode::Items;

        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);
        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);

        assert_eq!(menu.mode, ShopMode::Items);
        assert_eq!(wallet.coins, 0);
        assert_eq!(menu.feedback(), Some("Purchased Multi Shot Level 1!"));
    }

    #[test]
    fn test_failed_purchase_stays_in_levels() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(10);
        let mut up = ShipUpgrades::new();
        menu.mode = ShopMode::Items;

        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);
        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);

        assert_eq!(menu.mode, ShopMode::Levels);
        assert_eq!(menu.feedback(), Some("Not enough coins!"));
        assert_eq!(wallet.coins, 10);
    }

    #[test]
    fn test_already_owned_feedback() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(500);
        let mut up = ShipUpgrades::new();
        up.set_level(ShopItemId::MultiShot, 2).unwrap();
        menu.mode = ShopMode::Levels;
        menu.selected_level = 1;

        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);
        assert_eq!(menu.feedback(), Some("Already owned!"));
        assert_eq!(wallet.coins, 500);
    }

    #[test]
    fn test_back_steps_out_one_mode() {
        let mut menu = ShopMenu::default();
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        menu.mode = ShopMode::Levels;

        press(&mut menu, &mut wallet, &mut up, MenuAction::Back);
        assert_eq!(menu.mode, ShopMode::Items);
        press(&mut menu, &mut wallet, &mut up, MenuAction::Back);
        assert_eq!(menu.mode, ShopMode::Tabs);
    }

    #[test]
    fn test_feedback_expires() {
        let config = EconomyConfig {
            purchase_feedback_frames: 2,
            ..EconomyConfig::default()
        };
        let mut menu = ShopMenu::new(&config);
        let mut wallet = CoinPurse::new(0);
        let mut up = ShipUpgrades::new();
        menu.mode = ShopMode::Levels;
        press(&mut menu, &mut wallet, &mut up, MenuAction::Confirm);
        assert!(menu.feedback().is_some());

        menu.tick();
        menu.tick();
        assert_eq!(menu.feedback(), None);
    }

    #[test]
    fn test_open_consumes_recent_unlock() {
        let mut ledger = AchievementLedger::new(InMemoryStore::new());
        ledger.unlock("Boss Slayer");
        let config = EconomyConfig::default();

        let menu = ShopMenu::open(&mut ledger, &config);
        assert_eq!(menu.achievement_popup(), Some("Boss Slayer"));
        assert_eq!(menu.mode, ShopMode::Tabs);

        let menu = ShopMenu::open(&mut ledger, &config);
        assert_eq!(menu.achievement_popup(), None);
    }
}
