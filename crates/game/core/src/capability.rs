//! Resolvable actions advertised by furniture.
//!
//! Every placed object carries a [`CapabilitySet`] that is filled while the
//! object is built and frozen afterwards. External systems (player input, AI,
//! the ranged-attack solver) ask [`ResolvableActions::supports_capability`]
//! without knowing which furniture type they are looking at.

use bitflags::bitflags;
use strum::IntoEnumIterator;

use crate::furniture::Furniture;

/// Interaction verb a piece of furniture may support.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// Attack the object in melee. Present on every instance.
    MeleeAttack,
    Grab,
    Push,
    Open,
    Close,
    /// Use the object as a target (or cover) for ranged attacks.
    RangedAttack,
}

impl Capability {
    /// Capability registered on every instance regardless of type.
    pub const BASELINE: Self = Self::MeleeAttack;

    /// Returns all capabilities in declaration order.
    pub fn all() -> impl Iterator<Item = Capability> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the single-bit set for this capability.
    pub const fn flag(self) -> CapabilitySet {
        match self {
            Capability::MeleeAttack => CapabilitySet::MELEE_ATTACK,
            Capability::Grab => CapabilitySet::GRAB,
            Capability::Push => CapabilitySet::PUSH,
            Capability::Open => CapabilitySet::OPEN,
            Capability::Close => CapabilitySet::CLOSE,
            Capability::RangedAttack => CapabilitySet::RANGED_ATTACK,
        }
    }
}

bitflags! {
    /// Set of capabilities owned by one furniture instance.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CapabilitySet: u8 {
        const MELEE_ATTACK  = 1 << 0;
        const GRAB          = 1 << 1;
        const PUSH          = 1 << 2;
        const OPEN          = 1 << 3;
        const CLOSE         = 1 << 4;
        const RANGED_ATTACK = 1 << 5;
    }
}

impl CapabilitySet {
    /// Set holding only the baseline capability.
    pub const fn baseline() -> Self {
        Capability::BASELINE.flag()
    }

    /// Adds a capability. Returns true if it was not present before.
    pub fn register(&mut self, capability: Capability) -> bool {
        let flag = capability.flag();
        let added = !self.contains(flag);
        self.insert(flag);
        added
    }

    #[inline]
    pub fn supports(&self, capability: Capability) -> bool {
        self.contains(capability.flag())
    }

    /// Iterates the capabilities in this set in declaration order.
    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::all().filter(move |capability| self.supports(*capability))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = CapabilitySet::empty();
        for capability in iter {
            set.register(capability);
        }
        set
    }
}

/// Query interface shared by everything that advertises resolvable actions.
pub trait ResolvableActions {
    /// The frozen capability set of this object.
    fn capabilities(&self) -> CapabilitySet;

    fn supports_capability(&self, capability: Capability) -> bool {
        self.capabilities().supports(capability)
    }

    /// Query by action identifier (e.g. `"open"`).
    ///
    /// Identifiers that do not name a known capability are never supported.
    fn supports_action(&self, action_id: &str) -> bool {
        action_id
            .parse::<Capability>()
            .is_ok_and(|capability| self.supports_capability(capability))
    }
}

/// Attribute of a freshly built instance that a conditional rule can test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Condition {
    Passable,
    Impassable,
    BlocksLos,
    Wall,
}

impl Condition {
    pub fn holds(self, furniture: &Furniture) -> bool {
        match self {
            Condition::Passable => furniture.is_passable(),
            Condition::Impassable => !furniture.is_passable(),
            Condition::BlocksLos => furniture.blocks_los(),
            Condition::Wall => furniture.is_wall(),
        }
    }
}

/// One step of a template initializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapabilityRule {
    /// Always register the capability.
    Grant(Capability),
    /// Register the capability only when the condition holds for the instance.
    GrantIf {
        capability: Capability,
        when: Condition,
    },
}

impl CapabilityRule {
    /// Capability this rule contributes to `furniture`, if any.
    pub fn resolve(&self, furniture: &Furniture) -> Option<Capability> {
        match *self {
            CapabilityRule::Grant(capability) => Some(capability),
            CapabilityRule::GrantIf { capability, when } => {
                when.holds(furniture).then_some(capability)
            }
        }
    }
}

/// Declarative one-shot initializer attached to a type template.
///
/// Applied exactly once by the factory, after the baseline capability has been
/// registered. An empty initializer is allowed and leaves the set untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Initializer {
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: Vec<CapabilityRule>,
}

impl Initializer {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Initializer granting each capability unconditionally.
    pub fn grant(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            rules: capabilities
                .into_iter()
                .map(CapabilityRule::Grant)
                .collect(),
        }
    }

    pub fn with_rule(mut self, rule: CapabilityRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[CapabilityRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_ids_use_snake_case() {
        assert_eq!(Capability::MeleeAttack.as_ref(), "melee_attack");
        assert_eq!(Capability::RangedAttack.to_string(), "ranged_attack");
        assert_eq!("open".parse::<Capability>(), Ok(Capability::Open));
        assert!("fly".parse::<Capability>().is_err());
    }

    #[test]
    fn register_is_idempotent() {
        let mut once = CapabilitySet::baseline();
        once.register(Capability::Grab);

        let mut twice = CapabilitySet::baseline();
        assert!(twice.register(Capability::Grab));
        assert!(!twice.register(Capability::Grab));

        assert_eq!(once, twice);
    }

    #[test]
    fn capabilities_iterate_in_declaration_order() {
        let set: CapabilitySet = [Capability::Close, Capability::MeleeAttack, Capability::Open]
            .into_iter()
            .collect();

        let listed: Vec<_> = set.capabilities().collect();
        assert_eq!(
            listed,
            vec![Capability::MeleeAttack, Capability::Open, Capability::Close]
        );
    }

    #[test]
    fn every_capability_has_a_distinct_flag() {
        let all: CapabilitySet = Capability::all().collect();
        assert_eq!(all, CapabilitySet::all());
        assert_eq!(
            all.bits().count_ones() as usize,
            <Capability as strum::EnumCount>::COUNT
        );
        assert_eq!(Capability::all().count(), CapabilitySet::all().iter().count());
    }

    #[test]
    fn grant_builds_unconditional_rules() {
        let init = Initializer::grant([Capability::Open, Capability::Close]);
        assert_eq!(
            init.rules(),
            &[
                CapabilityRule::Grant(Capability::Open),
                CapabilityRule::Grant(Capability::Close)
            ]
        );
        assert!(Initializer::empty().rules().is_empty());
    }
}
