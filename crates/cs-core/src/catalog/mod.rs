//! The kubectl command catalog.
//!
//! A read-only lookup table from command name to descriptive metadata. The
//! built-in catalog is assembled once per process and shared by reference;
//! custom catalogs can be built with [`Catalog::from_commands`].

mod table;

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Lowest valid command difficulty.
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest valid command difficulty.
pub const MAX_DIFFICULTY: u8 = 5;

/// Functional grouping of kubectl commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandCategory {
    /// Creating, listing and removing pods.
    Basic,
    /// Deployment lifecycle and scaling.
    Deployment,
    /// Services and endpoints.
    Service,
    /// ConfigMaps and Secrets.
    Config,
    /// Volumes, claims and storage classes.
    Storage,
    /// Nodes, scheduling and resource usage.
    Resource,
    /// Logs, exec and troubleshooting.
    Debug,
    /// Patching, rollbacks and in-place edits.
    Advanced,
    /// Cluster-wide information and configuration.
    Cluster,
    /// Network policies and ingress.
    Network,
    /// RBAC, service accounts and credentials.
    Security,
    /// Tooling around kubectl itself.
    Utility,
}

impl CommandCategory {
    /// All categories in display order.
    pub const ALL: [CommandCategory; 12] = [
        Self::Basic,
        Self::Deployment,
        Self::Service,
        Self::Config,
        Self::Storage,
        Self::Resource,
        Self::Debug,
        Self::Advanced,
        Self::Cluster,
        Self::Network,
        Self::Security,
        Self::Utility,
    ];

    /// Short machine key (e.g. `"deployment"`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Deployment => "deployment",
            Self::Service => "service",
            Self::Config => "config",
            Self::Storage => "storage",
            Self::Resource => "resource",
            Self::Debug => "debug",
            Self::Advanced => "advanced",
            Self::Cluster => "cluster",
            Self::Network => "network",
            Self::Security => "security",
            Self::Utility => "utility",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Operations",
            Self::Deployment => "Deployment Management",
            Self::Service => "Service Discovery",
            Self::Config => "Configuration",
            Self::Storage => "Storage",
            Self::Resource => "Resource Management",
            Self::Debug => "Troubleshooting",
            Self::Advanced => "Advanced Operations",
            Self::Cluster => "Cluster Management",
            Self::Network => "Networking",
            Self::Security => "Security",
            Self::Utility => "Utilities",
        }
    }
}

impl std::fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CommandCategory {
    type Err = CoreError;

    /// Parse either the short key or the display label, case-insensitively.
    fn from_str(s: &str) -> CoreResult<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.key().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Descriptive metadata for one kubectl command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    /// Full command name, e.g. `"kubectl get pods"`.
    pub name: String,
    /// Functional category.
    pub category: CommandCategory,
    /// What the command does.
    pub description: String,
    /// Syntax template.
    pub syntax: String,
    /// A concrete usage example.
    pub example: String,
    /// The Kubernetes concept the command exercises.
    pub concept: String,
    /// Commands worth learning alongside this one.
    pub related_commands: Vec<String>,
    /// Difficulty in 1..=5.
    pub difficulty: u8,
}

impl CommandInfo {
    /// Create a command entry. The difficulty is clamped to 1..=5.
    pub fn new(name: impl Into<String>, category: CommandCategory, difficulty: u8) -> Self {
        Self {
            name: name.into(),
            category,
            description: String::new(),
            syntax: String::new(),
            example: String::new(),
            concept: String::new(),
            related_commands: Vec::new(),
            difficulty: difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the syntax template.
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = syntax.into();
        self
    }

    /// Set the usage example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Set the Kubernetes concept.
    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = concept.into();
        self
    }

    /// Set the related commands.
    pub fn with_related(mut self, related: &[&str]) -> Self {
        self.related_commands = related.iter().map(|s| (*s).to_string()).collect();
        self
    }
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_commands(table::builtin()));

/// An immutable set of commands keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    commands: BTreeMap<String, CommandInfo>,
}

impl Catalog {
    /// The built-in kubectl catalog, shared for the whole process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from a list of commands. A later entry with the same
    /// name replaces an earlier one.
    pub fn from_commands(commands: impl IntoIterator<Item = CommandInfo>) -> Self {
        Self {
            commands: commands
                .into_iter()
                .map(|cmd| (cmd.name.clone(), cmd))
                .collect(),
        }
    }

    /// Look up a command by its full name.
    pub fn lookup(&self, name: &str) -> Option<&CommandInfo> {
        self.commands.get(name)
    }

    /// Whether a command with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the catalog has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate all commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandInfo> {
        self.commands.values()
    }

    /// All commands in a category, in name order.
    pub fn by_category(&self, category: CommandCategory) -> Vec<&CommandInfo> {
        self.iter().filter(|c| c.category == category).collect()
    }

    /// All commands of a given difficulty, in name order.
    pub fn by_difficulty(&self, difficulty: u8) -> CoreResult<Vec<&CommandInfo>> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(CoreError::InvalidDifficulty(difficulty));
        }
        Ok(self.iter().filter(|c| c.difficulty == difficulty).collect())
    }

    /// Every command name, sorted.
    pub fn all_names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Categories that have at least one command, in display order.
    pub fn categories(&self) -> Vec<CommandCategory> {
        CommandCategory::ALL
            .into_iter()
            .filter(|cat| self.iter().any(|c| c.category == *cat))
            .collect()
    }

    /// Summarize how much of the catalog a player has mastered.
    ///
    /// Names in `mastered` that are not in the catalog are ignored.
    pub fn mastery_report<'a>(
        &self,
        mastered: impl IntoIterator<Item = &'a str>,
    ) -> MasteryReport {
        let mut mastered_list: Vec<String> = mastered
            .into_iter()
            .filter(|name| self.contains(name))
            .map(str::to_string)
            .collect();
        mastered_list.sort();
        mastered_list.dedup();

        let is_mastered = |name: &str| {
            mastered_list
                .binary_search_by(|m| m.as_str().cmp(name))
                .is_ok()
        };

        let by_category = self
            .categories()
            .into_iter()
            .map(|category| {
                let cmds = self.by_category(category);
                let tally = Tally {
                    total: cmds.len(),
                    mastered: cmds.iter().filter(|c| is_mastered(&c.name)).count(),
                };
                (category, tally)
            })
            .collect();

        let by_difficulty = (MIN_DIFFICULTY..=MAX_DIFFICULTY)
            .filter_map(|d| {
                let cmds: Vec<&CommandInfo> = self.iter().filter(|c| c.difficulty == d).collect();
                if cmds.is_empty() {
                    return None;
                }
                let tally = Tally {
                    total: cmds.len(),
                    mastered: cmds.iter().filter(|c| is_mastered(&c.name)).count(),
                };
                Some((d, tally))
            })
            .collect();

        let remaining = self
            .commands
            .keys()
            .filter(|name| !is_mastered(name))
            .cloned()
            .collect();

        MasteryReport {
            overall: Tally {
                total: self.len(),
                mastered: mastered_list.len(),
            },
            by_category,
            by_difficulty,
            remaining,
            mastered: mastered_list,
        }
    }
}

/// A mastered-out-of-total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    /// Number of commands in the group.
    pub total: usize,
    /// Number of those the player has mastered.
    pub mastered: usize,
}

impl Tally {
    /// Mastered share as a percentage rounded to one decimal (0 when empty).
    pub fn percentage(&self) -> f64 {
        percentage(self.mastered, self.total)
    }
}

/// Round `part / whole` to a percentage with one decimal. Empty wholes give 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 1000.0).round() / 10.0
}

/// Command mastery broken down by category and difficulty.
#[derive(Debug, Clone, Serialize)]
pub struct MasteryReport {
    /// Whole-catalog tally.
    pub overall: Tally,
    /// Per-category tallies, in display order.
    pub by_category: Vec<(CommandCategory, Tally)>,
    /// Per-difficulty tallies, for difficulties that have commands.
    pub by_difficulty: Vec<(u8, Tally)>,
    /// Commands not yet mastered, sorted.
    pub remaining: Vec<String>,
    /// Mastered commands that exist in the catalog, sorted.
    pub mastered: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tiny() -> Catalog {
        Catalog::from_commands([
            CommandInfo::new("kubectl run", CommandCategory::Basic, 1),
            CommandInfo::new("kubectl get pods", CommandCategory::Basic, 1),
            CommandInfo::new("kubectl scale", CommandCategory::Deployment, 2),
        ])
    }

    #[test]
    fn difficulty_clamped_on_creation() {
        assert_eq!(CommandInfo::new("a", CommandCategory::Basic, 0).difficulty, 1);
        assert_eq!(CommandInfo::new("b", CommandCategory::Basic, 9).difficulty, 5);
        assert_eq!(CommandInfo::new("c", CommandCategory::Basic, 3).difficulty, 3);
    }

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() >= 70);
        let run = catalog.lookup("kubectl run").unwrap();
        assert_eq!(run.category, CommandCategory::Basic);
        assert_eq!(run.difficulty, 1);
        assert!(!run.description.is_empty());
        assert!(!run.syntax.is_empty());
    }

    #[test]
    fn builtin_difficulties_in_range() {
        for cmd in Catalog::builtin().iter() {
            assert!((1..=5).contains(&cmd.difficulty), "{}", cmd.name);
        }
    }

    #[test]
    fn all_names_sorted() {
        let names = Catalog::builtin().all_names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn lookup_missing() {
        assert!(tiny().lookup("kubectl nope").is_none());
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let catalog = Catalog::from_commands([
            CommandInfo::new("kubectl get secrets", CommandCategory::Config, 2),
            CommandInfo::new("kubectl get secrets", CommandCategory::Security, 4),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.lookup("kubectl get secrets").unwrap().category,
            CommandCategory::Security
        );
    }

    #[test]
    fn filter_by_category() {
        let catalog = tiny();
        assert_eq!(catalog.by_category(CommandCategory::Basic).len(), 2);
        assert!(catalog.by_category(CommandCategory::Storage).is_empty());
    }

    #[test]
    fn filter_by_difficulty() {
        let catalog = tiny();
        assert_eq!(catalog.by_difficulty(2).unwrap().len(), 1);
        assert!(catalog.by_difficulty(5).unwrap().is_empty());
    }

    #[test]
    fn difficulty_filter_out_of_range() {
        let catalog = tiny();
        assert!(matches!(
            catalog.by_difficulty(0),
            Err(CoreError::InvalidDifficulty(0))
        ));
        assert!(catalog.by_difficulty(6).is_err());
    }

    #[test]
    fn categories_only_populated() {
        assert_eq!(
            tiny().categories(),
            vec![CommandCategory::Basic, CommandCategory::Deployment]
        );
    }

    #[test]
    fn category_parse() {
        assert_eq!(
            "deployment".parse::<CommandCategory>().unwrap(),
            CommandCategory::Deployment
        );
        assert_eq!(
            "troubleshooting".parse::<CommandCategory>().unwrap(),
            CommandCategory::Debug
        );
        assert!("gardening".parse::<CommandCategory>().is_err());
    }

    #[test]
    fn mastery_report_counts() {
        let catalog = tiny();
        let report = catalog.mastery_report(["kubectl run", "kubectl bogus", "kubectl run"]);
        assert_eq!(report.overall.total, 3);
        assert_eq!(report.overall.mastered, 1);
        assert_eq!(report.overall.percentage(), 33.3);
        assert_eq!(report.mastered, vec!["kubectl run"]);
        assert_eq!(report.remaining, vec!["kubectl get pods", "kubectl scale"]);

        let (cat, basic) = report.by_category[0];
        assert_eq!(cat, CommandCategory::Basic);
        assert_eq!(basic.mastered, 1);
        assert_eq!(basic.percentage(), 50.0);
        assert_eq!(report.by_difficulty.len(), 2);
    }

    #[test]
    fn percentage_of_empty_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(2, 3), 66.7);
    }

    proptest! {
        #[test]
        fn percentage_stays_in_bounds(whole in 1usize..500, part in 0usize..500) {
            let part = part.min(whole);
            let p = percentage(part, whole);
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn mastery_tallies_add_up(picks in proptest::collection::vec(0usize..200, 0..40)) {
            let catalog = Catalog::builtin();
            let names = catalog.all_names();
            let mastered: Vec<&str> = picks.iter().map(|i| names[i % names.len()]).collect();
            let report = catalog.mastery_report(mastered);
            prop_assert_eq!(
                report.mastered.len() + report.remaining.len(),
                report.overall.total
            );
            let by_category: usize = report.by_category.iter().map(|(_, t)| t.mastered).sum();
            prop_assert_eq!(by_category, report.overall.mastered);
        }
    }
}
