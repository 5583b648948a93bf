//! Monster templates and random story events.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::reward::Reward;

/// A monster template. Encounters copy the template; it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Display name.
    pub name: String,
    /// Starting health.
    pub health: u32,
    /// Attack strength.
    pub attack: u32,
    /// Defense, subtracted from incoming damage.
    pub defense: u32,
    /// Experience granted when defeated.
    pub experience_reward: u32,
    /// Flavour text.
    pub description: String,
    /// Suggested player level.
    pub level: u32,
}

impl Monster {
    /// Create a level 1 monster with no description.
    pub fn new(
        name: impl Into<String>,
        health: u32,
        attack: u32,
        defense: u32,
        experience_reward: u32,
    ) -> Self {
        Self {
            name: name.into(),
            health,
            attack,
            defense,
            experience_reward,
            description: String::new(),
            level: 1,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the suggested level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Every built-in monster, weakest first.
    pub fn bestiary() -> &'static [Monster] {
        &BESTIARY
    }

    /// Find a built-in monster by name, ignoring case.
    pub fn find(name: &str) -> CoreResult<&'static Monster> {
        let needle = name.trim();
        BESTIARY
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownMonster(needle.to_string()))
    }
}

static BESTIARY: LazyLock<Vec<Monster>> = LazyLock::new(|| {
    vec![
        Monster::new("Pod Fiend", 50, 8, 2, 100)
            .with_description("A runaway pod turned fiend, devouring every resource in reach.")
            .with_level(2),
        Monster::new("Deployment Behemoth", 120, 15, 5, 250)
            .with_description("A rogue deployment that keeps splitting off new pod fiends.")
            .with_level(5),
        Monster::new("Service Wraith", 80, 12, 3, 200)
            .with_description("A broken service haunting the network, scrambling every call.")
            .with_level(8),
    ]
});

/// What resolving an event leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Choosing applies the choice's reward, if any.
    Normal,
    /// Choosing the first option starts a fight with the named monster.
    Combat {
        /// Name of a built-in monster.
        monster: String,
    },
}

/// One option offered by a story event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoice {
    /// What the player picks.
    pub label: String,
    /// What happens afterwards.
    pub consequence: String,
    /// Reward for picking it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<Reward>,
}

impl EventChoice {
    fn new(label: &str, consequence: &str) -> Self {
        Self {
            label: label.to_string(),
            consequence: consequence.to_string(),
            reward: None,
        }
    }

    fn rewarding(mut self, reward: Reward) -> Self {
        self.reward = Some(reward);
        self
    }
}

/// A random event that can interrupt play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryEvent {
    /// Stable identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Scene description.
    pub description: String,
    /// Options, in display order.
    pub choices: Vec<EventChoice>,
    /// Minimum player level for the event to trigger.
    pub required_level: u32,
    /// Normal or combat.
    pub kind: EventKind,
}

impl StoryEvent {
    /// Every built-in event.
    pub fn all() -> &'static [StoryEvent] {
        &EVENTS
    }

    /// Events that can trigger for a player of `level`.
    pub fn eligible(level: u32) -> Vec<&'static StoryEvent> {
        EVENTS.iter().filter(|e| e.required_level <= level).collect()
    }

    /// Look up an event by id.
    pub fn find(id: &str) -> Option<&'static StoryEvent> {
        EVENTS.iter().find(|e| e.id == id)
    }

    /// The monster this event pits the player against, if it is a combat event.
    pub fn monster(&self) -> Option<CoreResult<&'static Monster>> {
        match &self.kind {
            EventKind::Normal => None,
            EventKind::Combat { monster } => Some(Monster::find(monster)),
        }
    }

    fn normal(id: &str, title: &str, description: &str, required_level: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            choices: Vec::new(),
            required_level,
            kind: EventKind::Normal,
        }
    }

    fn combat(id: &str, title: &str, description: &str, monster: &str) -> Self {
        let required_level = Monster::find(monster).map(|m| m.level).unwrap_or(1);
        Self {
            kind: EventKind::Combat {
                monster: monster.to_string(),
            },
            ..Self::normal(id, title, description, required_level)
        }
    }

    fn choice(mut self, choice: EventChoice) -> Self {
        self.choices.push(choice);
        self
    }
}

static EVENTS: LazyLock<Vec<StoryEvent>> = LazyLock::new(|| {
    vec![
        StoryEvent::normal(
            "treasure_found",
            "Hidden Treasure",
            "Training on the back mountain, you stumble on a hidden chest.",
            1,
        )
        .choice(
            EventChoice::new("Open the chest", "Inside lies a cultivation manual.")
                .rewarding(Reward::experience(100)),
        )
        .choice(
            EventChoice::new("Report it to the sect", "The sect master praises your honesty.")
                .rewarding(Reward::experience(50)),
        )
        .choice(EventChoice::new("Walk away", "You decide not to invite trouble.")),
        StoryEvent::normal(
            "disciple_quarrel",
            "Quarrelling Disciples",
            "Two disciples argue over whose kubectl incantation is correct.",
            3,
        )
        .choice(
            EventChoice::new("Mediate", "Both thank you for settling the matter.")
                .rewarding(Reward::experience(80)),
        )
        .choice(
            EventChoice::new("Side with the eldest brother", "The eldest brother warms to you.")
                .rewarding(Reward::experience(50)),
        )
        .choice(
            EventChoice::new("Side with the second brother", "The second brother warms to you.")
                .rewarding(Reward::experience(50)),
        ),
        StoryEvent::normal(
            "mysterious_visitor",
            "Mysterious Visitor",
            "A masked visitor arrives to test your knowledge of the cluster.",
            5,
        )
        .choice(
            EventChoice::new("Accept the challenge", "You best the visitor in every exchange.")
                .rewarding(Reward::experience(150)),
        )
        .choice(EventChoice::new("Decline", "The visitor leaves, disappointed."))
        .choice(
            EventChoice::new("Ask for teaching", "The visitor shares a few secrets.")
                .rewarding(Reward::experience(30)),
        ),
        StoryEvent::combat(
            "monster_attack_pod",
            "Pod Fiend Attack",
            "A Pod Fiend tears out of the void, swallowing everything around it.",
            "Pod Fiend",
        )
        .choice(EventChoice::new("Fight", "You engage the Pod Fiend."))
        .choice(EventChoice::new("Run", "You flee while the fiend gives chase.")),
        StoryEvent::combat(
            "monster_deployment",
            "Deployment Behemoth",
            "A towering Deployment Behemoth is wrecking the sect's rollouts.",
            "Deployment Behemoth",
        )
        .choice(EventChoice::new("Fight", "You face the behemoth head on."))
        .choice(EventChoice::new(
            "Seek help",
            "By the time help arrives, more deployments lie in ruins.",
        )),
        StoryEvent::combat(
            "monster_service",
            "Service Wraith",
            "A Service Wraith is scrambling traffic between the halls.",
            "Service Wraith",
        )
        .choice(EventChoice::new("Fight", "You turn to face the wraith."))
        .choice(EventChoice::new(
            "Repair the network",
            "The wraith keeps undoing your repairs.",
        )),
        StoryEvent::normal(
            "sword_dojo",
            "Sword Tomb Trial",
            "Manuals of kubectl technique wait to be challenged in the sword tomb.",
            7,
        )
        .choice(
            EventChoice::new("Novice manual", "You clear the novice manual with ease.")
                .rewarding(Reward::experience(50)),
        )
        .choice(
            EventChoice::new("Adept manual", "After some effort, the adept manual yields.")
                .rewarding(Reward::experience(120)),
        )
        .choice(
            EventChoice::new("Master manual", "You barely pass, and earn a rare title.")
                .rewarding(Reward::experience(200).with_title("Sword Manual Master")),
        ),
        StoryEvent::normal(
            "crisis_at_gate",
            "Crisis at the Gate",
            "Demonic disciples storm the mountain gate. You must act now.",
            9,
        )
        .choice(
            EventChoice::new("Meet them head on", "Wounded but victorious, you drive them off.")
                .rewarding(Reward::experience(100)),
        )
        .choice(
            EventChoice::new("Flank them", "Your ambush earns the eldest brother's praise.")
                .rewarding(Reward::experience(80)),
        )
        .choice(
            EventChoice::new("Warn the seniors", "Together you repel the attack easily.")
                .rewarding(Reward::experience(50)),
        ),
    ]
});
