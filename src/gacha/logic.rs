//! Gacha roulette: commit the outcome up front, then animate toward it.

use super::types::{GachaCommand, GachaPhase, GachaResult};
use crate::config::EconomyConfig;
use crate::cosmetics::{color_name, ColorRegistry, ShipColor, GACHA_POOL};
use crate::error::RollError;
use crate::menu::MenuAction;
use crate::utils::Countdown;
use crate::wallet::CoinBalance;
use rand::Rng;
use tracing::info;

const POOL_SIZE: usize = GACHA_POOL.len();

/// The gacha machine.
///
/// A roll draws its target the moment it is paid for. The spin that follows
/// is cosmetic: it runs at full speed until `slowdown_start`, decelerates,
/// and is clamped onto the target at `duration` no matter where the
/// animation ended up.
#[derive(Debug, Clone)]
pub struct GachaMachine {
    price: u32,
    duration: u32,
    slowdown_start: u32,
    result_display_frames: u32,
    phase: GachaPhase,
    target_index: usize,
    display_index: usize,
    frame: u32,
    result: Option<GachaResult>,
    message: String,
    reveal: Countdown,
}

impl Default for GachaMachine {
    fn default() -> Self {
        Self::new(&EconomyConfig::default())
    }
}

impl GachaMachine {
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            price: config.gacha_price,
            duration: config.spin_duration_frames,
            slowdown_start: config.spin_slowdown_start,
            result_display_frames: config.result_display_frames,
            phase: GachaPhase::Idle,
            target_index: 0,
            display_index: 0,
            frame: 0,
            result: None,
            message: String::new(),
            reveal: Countdown::new(),
        }
    }

    /// Pay for a roll and start spinning.
    ///
    /// Rejected without touching the balance while a spin is running or when
    /// the player cannot pay.
    pub fn roll<W, R>(&mut self, wallet: &mut W, rng: &mut R) -> Result<(), RollError>
    where
        W: CoinBalance + ?Sized,
        R: Rng,
    {
        if self.phase == GachaPhase::Spinning {
            return Err(RollError::AlreadySpinning);
        }

        let balance = wallet.coins();
        if balance < self.price {
            let err = RollError::InsufficientFunds {
                price: self.price,
                balance,
            };
            self.message = err.to_string();
            self.result = None;
            self.reveal.start(self.result_display_frames);
            info!(
                price = self.price,
                balance, "not enough coins for gacha roll"
            );
            return Err(err);
        }

        wallet.deduct_coins(self.price);
        let target = rng.gen_range(0..POOL_SIZE);
        let start = rng.gen_range(0..POOL_SIZE);
        self.start_spin(target, start);

        info!(
            target = GACHA_POOL[target].name,
            remaining = wallet.coins(),
            "starting gacha roll"
        );
        Ok(())
    }

    pub(crate) fn start_spin(&mut self, target: usize, start: usize) {
        self.target_index = target % POOL_SIZE;
        self.display_index = start % POOL_SIZE;
        self.frame = 0;
        self.phase = GachaPhase::Spinning;
        self.result = None;
        self.message.clear();
        self.reveal.clear();
    }

    /// Advance one frame. Returns the result on the frame the spin completes.
    pub fn update(&mut self, registry: &mut ColorRegistry) -> Option<GachaResult> {
        match self.phase {
            GachaPhase::Idle => {
                self.reveal.tick();
                None
            }
            GachaPhase::Spinning => self.advance_spin(registry),
        }
    }

    fn advance_spin(&mut self, registry: &mut ColorRegistry) -> Option<GachaResult> {
        self.frame += 1;

        if self.frame < self.slowdown_start {
            self.step();
        } else if self.frame < self.duration {
            let slowdown_frames = self.frame - self.slowdown_start;
            let frames_remaining = (self.duration - self.frame) as usize;
            let distance = (self.target_index + POOL_SIZE - self.display_index) % POOL_SIZE;
            let slow_factor = (slowdown_frames / 3 + 2).max(2);

            if frames_remaining <= distance && distance > 0 {
                if self.frame % 2 == 0 {
                    self.step();
                }
            } else if self.frame % slow_factor == 0 {
                self.step();
            }
        } else {
            return Some(self.finish(registry));
        }
        None
    }

    fn step(&mut self) {
        self.display_index = (self.display_index + 1) % POOL_SIZE;
    }

    fn finish(&mut self, registry: &mut ColorRegistry) -> GachaResult {
        self.phase = GachaPhase::Idle;
        self.display_index = self.target_index;

        let color = GACHA_POOL[self.target_index].color;
        let name = color_name(color);
        let already_owned = registry.is_unlocked(color);
        registry.unlock(color);
        registry.select(color);

        self.message = if already_owned {
            format!("You got {}! (Already owned)", name)
        } else {
            format!("NEW COLOR: {}!", name)
        };
        self.reveal.start(self.result_display_frames);
        info!(color = name, new = !already_owned, "gacha roll result");

        let result = GachaResult {
            color,
            color_name: name,
            is_new: !already_owned,
            message: self.message.clone(),
        };
        self.result = Some(result.clone());
        result
    }

    /// Gacha screen input. Everything is ignored while spinning.
    pub fn handle<W, R>(&mut self, action: MenuAction, wallet: &mut W, rng: &mut R) -> GachaCommand
    where
        W: CoinBalance + ?Sized,
        R: Rng,
    {
        if self.is_spinning() {
            return GachaCommand::None;
        }
        match action {
            MenuAction::Confirm => match self.roll(wallet, rng) {
                Ok(()) => GachaCommand::RollStarted,
                Err(_) => GachaCommand::RollRejected,
            },
            MenuAction::Back => GachaCommand::Close,
            _ => GachaCommand::None,
        }
    }

    // =========================================================================
    // Display state
    // =========================================================================

    pub fn phase(&self) -> GachaPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == GachaPhase::Spinning
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Pool index currently under the roulette pointer.
    pub fn display_index(&self) -> usize {
        self.display_index
    }

    pub fn display_color(&self) -> ShipColor {
        GACHA_POOL[self.display_index].color
    }

    /// The outcome drawn for the current or last roll.
    pub fn committed_target(&self) -> usize {
        self.target_index
    }

    pub fn last_result(&self) -> Option<&GachaResult> {
        self.result.as_ref()
    }

    /// Result or error message while its reveal window is open.
    pub fn visible_message(&self) -> Option<&str> {
        if self.reveal.is_active() && !self.message.is_empty() {
            Some(&self.message)
        } else {
            None
        }
    }

    /// Whether the roulette should be drawn: while spinning, and while a
    /// result is being revealed.
    pub fn show_roulette(&self) -> bool {
        self.is_spinning() || (self.result.is_some() && self.reveal.is_active())
    }
}
