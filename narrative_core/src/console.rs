//! Console driver - shows hints, reads tokens and narrates what happened.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use game_rules::{BattleOutcome, Inventory, PotionOutcome, RandomEventOutcome};

use crate::events::{Encounter, StepOutcome};
use crate::navigator::Navigator;

pub const END_MESSAGE: &str = "=== End of the game ===";

/// How a console session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The hero reached a node with no choices.
    Ended,
    /// Input ran out before the story ended.
    InputClosed,
}

/// Run the story until it ends or `input` runs dry.
///
/// The current hint is printed before every prompt. Tokens are separated by
/// whitespace; a line holding several tokens feeds several steps.
pub fn play<R: BufRead, W: Write>(
    navigator: &mut Navigator,
    input: R,
    output: &mut W,
) -> io::Result<PlayOutcome> {
    let mut tokens = TokenReader::new(input);

    loop {
        writeln!(output, "{}", navigator.current().hint)?;

        if navigator.is_finished() {
            writeln!(output, "{END_MESSAGE}")?;
            output.flush()?;
            log::info!(
                "story ended at {} with hero health {}",
                navigator.path(),
                navigator.hero().health
            );
            return Ok(PlayOutcome::Ended);
        }
        output.flush()?;

        let Some(token) = tokens.next_token()? else {
            log::warn!("input closed at {} before the story ended", navigator.path());
            return Ok(PlayOutcome::InputClosed);
        };

        let outcome = navigator.step(&token);
        narrate(&outcome, navigator.inventory(), output)?;
    }
}

/// Write the player-facing text for one step.
pub fn narrate<W: Write>(
    outcome: &StepOutcome,
    inventory: &Inventory,
    output: &mut W,
) -> io::Result<()> {
    match outcome {
        StepOutcome::Moved { encounter, .. } => narrate_encounter(encounter, output),
        StepOutcome::Potion(PotionOutcome::Used { .. }) => {
            writeln!(output, "You used a health potion and restored some health!")
        }
        StepOutcome::Potion(PotionOutcome::NoPotion) => {
            writeln!(output, "You don't have any health potions!")
        }
        StepOutcome::InventoryShown => write!(output, "{inventory}"),
        StepOutcome::Invalid { .. } => writeln!(output, "Invalid choice. Please try again."),
        StepOutcome::Finished => Ok(()),
    }
}

fn narrate_encounter<W: Write>(encounter: &Encounter, output: &mut W) -> io::Result<()> {
    match encounter {
        Encounter::Battle(report) => {
            writeln!(output, "Engaging in battle with the enemy!")?;
            for round in &report.rounds {
                writeln!(
                    output,
                    "You attacked the enemy and dealt {} damage.",
                    round.player_damage
                )?;
                writeln!(
                    output,
                    "The enemy attacked you and dealt {} damage.",
                    round.enemy_damage
                )?;
                writeln!(output, "Your health: {}", round.hero_health)?;
            }
            match report.outcome {
                BattleOutcome::Defeat => writeln!(output, "You lost the battle!"),
                BattleOutcome::Victory => writeln!(output, "Enemy defeated!"),
            }
        }
        Encounter::Stalemate { .. } => {
            writeln!(output, "Engaging in battle with the enemy!")?;
            writeln!(output, "You cannot hurt this enemy!")
        }
        Encounter::RandomEvent(RandomEventOutcome::FoundItem(item)) => writeln!(
            output,
            "You found a {} and added it to your inventory!",
            item.name.to_lowercase()
        ),
        Encounter::RandomEvent(RandomEventOutcome::LostItem(_)) => {
            writeln!(output, "You lost a random item from your inventory!")
        }
        Encounter::RandomEvent(RandomEventOutcome::NothingToLose) => Ok(()),
        Encounter::RandomEvent(RandomEventOutcome::NothingHappens) => {
            writeln!(output, "Nothing happens.")
        }
    }
}

/// Splits buffered input into whitespace-separated tokens, line by line.
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
