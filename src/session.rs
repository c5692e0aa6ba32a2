//! Progression session: the context object owning the achievement ledger,
//! the color registry and the gacha machine for one run of the game.

use crate::achievements::{AchievementLedger, AchievementStore, JsonFileStore};
use crate::config::EconomyConfig;
use crate::cosmetics::{ColorRegistry, Palette, PaletteCommand};
use crate::error::{PurchaseError, RollError, StorageError};
use crate::gacha::{GachaCommand, GachaMachine, GachaResult};
use crate::menu::MenuAction;
use crate::shop::{purchase, PurchaseReceipt, ShopItemId, ShopMenu, UpgradeLevels};
use crate::wallet::CoinBalance;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

pub struct ProgressionSession<S: AchievementStore> {
    pub id: Uuid,
    pub config: EconomyConfig,
    pub achievements: AchievementLedger<S>,
    pub colors: ColorRegistry,
    pub gacha: GachaMachine,
}

impl<S: AchievementStore> ProgressionSession<S> {
    /// Start a session: restore achievements and grant their reward colors.
    pub fn start(config: EconomyConfig, store: S) -> Self {
        let id = Uuid::new_v4();
        let achievements = AchievementLedger::load(store);
        let gacha = GachaMachine::new(&config);
        let mut session = Self {
            id,
            config,
            achievements,
            colors: ColorRegistry::new(),
            gacha,
        };
        session.sync_rewards();
        info!(
            session = %id,
            unlocked = session.achievements.unlocked_count(),
            total = session.achievements.total_count(),
            colors = session.colors.unlocked_count(),
            "progression session started"
        );
        session
    }

    /// End the session. The color registry goes with it; the store is handed back.
    pub fn end(self) -> S {
        info!(session = %self.id, "progression session ended");
        self.achievements.into_store()
    }

    /// Grant the reward color of every unlocked achievement. Idempotent.
    pub fn sync_rewards(&mut self) {
        for achievement in self.achievements.achievements() {
            if !achievement.is_unlocked() {
                continue;
            }
            if let Some(color) = achievement.reward {
                if self.colors.unlock(color) {
                    debug!(
                        achievement = achievement.name,
                        color = ColorRegistry::name_of(color),
                        "reward color granted"
                    );
                }
            }
        }
    }

    // =========================================================================
    // Gameplay events
    // =========================================================================

    pub fn on_shot_fired(&mut self) {
        self.achievements.on_shot_fired();
    }

    pub fn on_enemy_defeated(&mut self) {
        self.achievements.on_enemy_defeated();
        self.sync_rewards();
    }

    pub fn on_time_elapsed_seconds(&mut self, elapsed_seconds: u32) {
        self.achievements.on_time_elapsed_seconds(elapsed_seconds);
        self.sync_rewards();
    }

    pub fn on_level_cleared(&mut self, level: u32) {
        self.achievements.on_level_cleared(level, self.config.final_level);
        self.sync_rewards();
    }

    pub fn on_boss_defeated(&mut self) {
        self.achievements.on_boss_defeated();
        self.sync_rewards();
    }

    pub fn on_coin_balance(&mut self, balance: u32) {
        self.achievements.on_coin_balance(balance);
        self.sync_rewards();
    }

    // =========================================================================
    // Economy
    // =========================================================================

    pub fn roll_gacha<W, R>(&mut self, wallet: &mut W, rng: &mut R) -> Result<(), RollError>
    where
        W: CoinBalance + ?Sized,
        R: Rng,
    {
        self.gacha.roll(wallet, rng)
    }

    /// Advance one frame.
    pub fn update(&mut self) -> Option<GachaResult> {
        self.gacha.update(&mut self.colors)
    }

    pub fn handle_gacha<W, R>(
        &mut self,
        action: MenuAction,
        wallet: &mut W,
        rng: &mut R,
    ) -> GachaCommand
    where
        W: CoinBalance + ?Sized,
        R: Rng,
    {
        self.gacha.handle(action, wallet, rng)
    }

    pub fn purchase<W, U>(
        &mut self,
        item: ShopItemId,
        level: u8,
        wallet: &mut W,
        upgrades: &mut U,
    ) -> Result<PurchaseReceipt, PurchaseError>
    where
        W: CoinBalance + ?Sized,
        U: UpgradeLevels + ?Sized,
    {
        purchase(item, level, wallet, upgrades)
    }

    // =========================================================================
    // Screens
    // =========================================================================

    pub fn open_shop(&mut self) -> ShopMenu {
        ShopMenu::open(&mut self.achievements, &self.config)
    }

    pub fn open_palette(&self) -> Palette {
        Palette::open(&self.colors)
    }

    pub fn handle_palette(&mut self, palette: &mut Palette, action: MenuAction) -> PaletteCommand {
        palette.handle(action, &mut self.colors)
    }
}

impl ProgressionSession<JsonFileStore> {
    /// Start with the on-disk store in `config.save_dir`, or ~/.arcade_progress.
    pub fn open(config: EconomyConfig) -> Result<Self, StorageError> {
        let store = match &config.save_dir {
            Some(dir) => JsonFileStore::in_dir(dir),
            None => JsonFileStore::default_location()?,
        };
        Ok(Self::start(config, store))
    }
}
