//! Rule set data structures and schema normalization
//!
//! The persisted/transmitted entity is a [`Config`]: an ordered list of
//! [`Group`]s, each bound to a network interface and holding an ordered list
//! of [`Rule`]s. Order is significant in both lists and is preserved verbatim
//! except through the explicit reorder operations.
//!
//! # Normalization policy
//!
//! [`Config::parse`] accepts an untrusted JSON document. Two fields are
//! *lenient*: a missing or malformed `id` is silently replaced with a fresh
//! random 8-char lowercase-hex identifier, and a missing or non-string `name`
//! becomes the empty string. Everything structural is *strict*: a missing
//! `groups` array, a non-array `rules`, a non-bool `enable`, or a rule `type`
//! outside the four recognized kinds fails the whole parse. The kind drives
//! which validator applies later, so an unrecognized kind has no safe
//! default.
//!
//! # Example
//!
//! ```
//! use routedit::core::model::{Config, RuleKind};
//!
//! let raw = r##"{"groups": [{
//!     "id": "03187af4",
//!     "name": "Streaming",
//!     "color": "#ff0000",
//!     "interface": "wg0",
//!     "enable": true,
//!     "rules": [
//!         {"id": "0a1b2c3d", "name": "", "rule": ".example.com",
//!          "type": "namespace", "enable": true}
//!     ]
//! }]}"##;
//!
//! let config = Config::parse(raw).unwrap();
//! assert_eq!(config.groups[0].rules[0].kind, RuleKind::Namespace);
//! ```

use crate::core::error::Result;
use crate::utils::random_id;
use serde::{Deserialize, Deserializer, Serialize};

/// The four-way classification of a rule's pattern syntax
///
/// Serialized lowercase on the wire. Unknown kind strings fail
/// deserialization; there is no fallback kind.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RuleKind {
    /// Hierarchical suffix match (`.example.com` covers all subdomains)
    Namespace,
    /// Glob match with `*`/`?` metacharacters
    Wildcard,
    /// Regular-expression match
    Regex,
    /// Exact domain match
    Domain,
}

/// A single pattern-matching entry belonging to a group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    /// 8-char lowercase-hex identifier; regenerated when malformed
    #[serde(default = "random_id", deserialize_with = "lenient_id")]
    pub id: String,
    /// Display name, empty when the user has not set one
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    /// The pattern body, interpreted according to `kind`
    pub rule: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub enable: bool,
}

impl Rule {
    /// Creates a fresh empty rule with a random id, the way the editor seeds
    /// a newly added row.
    pub fn new() -> Self {
        Rule {
            id: random_id(),
            name: String::new(),
            rule: String::new(),
            kind: RuleKind::Namespace,
            enable: true,
        }
    }

    /// Whether the pattern body is syntactically legal for the declared kind.
    pub fn is_valid(&self) -> bool {
        crate::validators::validate(self.kind, &self.rule)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::new()
    }
}

/// A named collection of ordered rules bound to one network interface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    #[serde(default = "random_id", deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    pub color: String,
    /// Identifier of the network interface traffic is routed through
    pub interface: String,
    pub enable: bool,
    /// Evaluation/display order, preserved verbatim
    pub rules: Vec<Rule>,
}

impl Group {
    /// Creates a fresh empty group bound to `interface` (typically the first
    /// interface id reported by the backend).
    pub fn new(interface: &str) -> Self {
        Group {
            id: random_id(),
            name: String::new(),
            color: "#ffffff".to_string(),
            interface: interface.to_string(),
            enable: true,
            rules: Vec::new(),
        }
    }
}

/// Position of a rule inside a config: group index, then rule index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulePos {
    pub group: usize,
    pub index: usize,
}

/// The root persisted/transmitted entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    pub groups: Vec<Group>,
}

impl Config {
    /// Parses and normalizes an untrusted JSON document.
    ///
    /// Lenient on `id`/`name` (see module docs), strict on everything else.
    /// Returns the schema error without touching any existing config; the
    /// caller keeps whatever it had on failure.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serializes the config for transport or file output.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Moves one rule from `from` to `to`, possibly across groups.
    ///
    /// The rule is removed first and the destination index clamped to the
    /// post-removal length, so a same-group move lands where the user dropped
    /// it. Out-of-range source positions are a no-op returning `false`.
    pub fn move_rule(&mut self, from: RulePos, to: RulePos) -> bool {
        if to.group >= self.groups.len() {
            return false;
        }
        let Some(source_group) = self.groups.get_mut(from.group) else {
            return false;
        };
        if from.index >= source_group.rules.len() {
            return false;
        }
        let rule = source_group.rules.remove(from.index);
        tracing::debug!(
            rule_id = %rule.id,
            from_group = from.group,
            to_group = to.group,
            "moving rule"
        );
        let dest = &mut self.groups[to.group].rules;
        let insert_pos = to.index.min(dest.len());
        dest.insert(insert_pos, rule);
        true
    }

    /// Moves one group from position `from` to position `to`.
    pub fn move_group(&mut self, from: usize, to: usize) -> bool {
        if from >= self.groups.len() {
            return false;
        }
        let group = self.groups.remove(from);
        let insert_pos = to.min(self.groups.len());
        self.groups.insert(insert_pos, group);
        true
    }
}

/// Read-only reference data: the interface ids known to the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Interfaces {
    pub interfaces: Vec<Interface>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interface {
    pub id: String,
}

impl Interfaces {
    /// First known interface id, used to seed a new group's binding.
    pub fn first_id(&self) -> Option<&str> {
        self.interfaces.first().map(|i| i.id.as_str())
    }
}

/// Whether a string satisfies the id invariant `^[0-9a-f]{8}$`.
pub fn is_well_formed_id(id: &str) -> bool {
    id.len() == 8 && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Lenient id field: any malformed value (wrong type, wrong length, non-hex)
/// is replaced with a fresh random id. Never an error.
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if is_well_formed_id(&s) => s,
        _ => random_id(),
    })
}

/// Lenient name field: any non-string value becomes the empty string.
fn lenient_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}
