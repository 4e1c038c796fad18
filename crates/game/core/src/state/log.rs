//! Append-only battle log.
//!
//! Entries are structured [`BattleEvent`]s so frontends can style them, and
//! every event renders to a description string through `Display`. Rendered
//! messages use a small fixed vocabulary ("dodged", "critical", "deals",
//! "Health") that frontends key their styling on.

use core::fmt;

use super::battle::Outcome;
use super::combatant::Side;
use crate::combat::HitKind;

/// Something that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    BattleStarted {
        player: String,
        enemy: String,
        enemy_level: u32,
    },
    Attack {
        actor: Side,
        attacker: String,
        defender: String,
        special: bool,
        hit: HitKind,
        damage: u32,
        /// Damage was reduced because the defender was defending.
        mitigated: bool,
    },
    Health {
        side: Side,
        name: String,
        current: u32,
        max: u32,
    },
    Defend {
        actor: Side,
        name: String,
    },
    ItemUsed {
        actor: Side,
        name: String,
        healed: u32,
        remaining: u32,
    },
    NoItems {
        actor: Side,
        name: String,
    },
    Fainted {
        side: Side,
        name: String,
    },
    TurnLimitReached {
        turns: u32,
    },
    Resolved {
        outcome: Outcome,
        winner: String,
    },
}

impl BattleEvent {
    /// Hit classification for attack events.
    pub fn hit_kind(&self) -> Option<HitKind> {
        match self {
            Self::Attack { hit, .. } => Some(*hit),
            _ => None,
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BattleStarted {
                player,
                enemy,
                enemy_level,
            } => write!(f, "{player} faces a wild {enemy} (Lv. {enemy_level})!"),
            Self::Attack {
                attacker,
                defender,
                special,
                hit,
                damage,
                mitigated,
                ..
            } => {
                let attack = if *special { "special attack" } else { "attack" };
                match hit {
                    HitKind::Dodged => write!(f, "{defender} dodged {attacker}'s {attack}!")?,
                    HitKind::Critical => write!(
                        f,
                        "A critical {attack}! {attacker} deals {damage} damage to {defender}!"
                    )?,
                    HitKind::Normal if *special => write!(
                        f,
                        "{attacker} unleashes a special attack and deals {damage} damage to {defender}!"
                    )?,
                    HitKind::Normal => {
                        write!(f, "{attacker} deals {damage} damage to {defender}!")?
                    }
                }
                if *mitigated {
                    write!(f, " {defender} blocked part of the blow.")?;
                }
                Ok(())
            }
            Self::Health {
                name, current, max, ..
            } => write!(f, "{name} Health: {current}/{max}"),
            Self::Defend { name, .. } => write!(f, "{name} takes a defensive stance!"),
            Self::ItemUsed {
                name,
                healed,
                remaining,
                ..
            } => write!(
                f,
                "{name} drinks a potion and recovers {healed} HP ({remaining} left)."
            ),
            Self::NoItems { name, .. } => {
                write!(f, "{name} reaches for a potion, but no items remain!")
            }
            Self::Fainted { name, .. } => write!(f, "{name} fainted!"),
            Self::TurnLimitReached { turns } => write!(
                f,
                "The battle reaches its climax after {turns} turns! Remaining health decides the winner."
            ),
            Self::Resolved { winner, .. } => write!(f, "{winner} won the battle!"),
        }
    }
}

/// One log line: the turn it happened on and the event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub turn: u32,
    pub event: BattleEvent,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.event.fmt(f)
    }
}

/// Ordered, append-only sequence of battle events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, turn: u32, event: BattleEvent) {
        self.entries.push(LogEntry { turn, event });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries appended after the first `from` entries.
    pub fn since(&self, from: usize) -> &[LogEntry] {
        self.entries.get(from..).unwrap_or(&[])
    }

    /// Rendered description strings, in order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack(hit: HitKind, damage: u32) -> BattleEvent {
        BattleEvent::Attack {
            actor: Side::Player,
            attacker: "Ember".into(),
            defender: "Rex".into(),
            special: false,
            hit,
            damage,
            mitigated: false,
        }
    }

    #[test]
    fn messages_are_classifiable() {
        let dodged = attack(HitKind::Dodged, 0).to_string();
        let critical = attack(HitKind::Critical, 30).to_string();
        let normal = attack(HitKind::Normal, 20).to_string();

        assert!(dodged.contains("dodged"));
        assert!(!dodged.contains("critical"));
        assert!(critical.contains("critical"));
        assert!(critical.contains("deals 30 damage"));
        assert!(normal.contains("deals 20 damage"));
        assert!(!normal.contains("critical") && !normal.contains("dodged"));
    }

    #[test]
    fn health_line_format() {
        let event = BattleEvent::Health {
            side: Side::Enemy,
            name: "Rex".into(),
            current: 45,
            max: 115,
        };
        assert_eq!(event.to_string(), "Rex Health: 45/115");
    }

    #[test]
    fn log_preserves_order() {
        let mut log = BattleLog::new();
        log.push(0, attack(HitKind::Normal, 1));
        log.push(1, attack(HitKind::Dodged, 0));
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].turn, 0);
        assert_eq!(log.since(1).len(), 1);
        assert!(log.since(5).is_empty());
        assert_eq!(log.last().and_then(|e| e.event.hit_kind()), Some(HitKind::Dodged));
    }
}
