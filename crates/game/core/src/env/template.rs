//! Furniture type templates.
//!
//! A [`TypeTemplate`] enumerates every attribute a furniture type may declare.
//! Fields left unset fall back to the built-in defaults when the factory
//! builds an instance (`hit_points` falls back to
//! [`FurnitureConfig::default_hit_points`](crate::FurnitureConfig)).

use crate::capability::{Capability, CapabilityRule, Initializer};
use crate::env::Color;
use crate::furniture::HitPoints;

/// Immutable description of one kind of furniture.
///
/// Templates can be deserialized directly from RON catalogs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeTemplate {
    /// Display name (e.g. "Glass Door").
    pub name: String,

    /// Character drawn for this type. `None` means the glyph is not rendered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub glyph: Option<char>,

    /// Glyph color. `None` means not rendered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<Color>,

    /// Tile background color. `None` means not rendered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bg_color: Option<Color>,

    /// Color used when the name is printed to the message console.
    #[cfg_attr(feature = "serde", serde(default))]
    pub console_color: Option<Color>,

    /// Whether entities can move through the tile.
    #[cfg_attr(feature = "serde", serde(default))]
    pub passable: bool,

    /// Whether the object blocks line of sight.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocks_los: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub hit_points: Option<HitPoints>,

    /// Wall segments (windows, cubicle walls) are placed as furniture too.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_wall: bool,

    /// One-shot initializer applied by the factory after the baseline capability.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initializer: Option<Initializer>,
}

impl TypeTemplate {
    /// Create a builder for a template with the given display name.
    pub fn builder(name: impl Into<String>) -> TypeTemplateBuilder {
        TypeTemplateBuilder::new(name)
    }
}

/// Builder for constructing type templates.
pub struct TypeTemplateBuilder {
    template: TypeTemplate,
}

impl TypeTemplateBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            template: TypeTemplate {
                name: name.into(),
                glyph: None,
                color: None,
                bg_color: None,
                console_color: None,
                passable: false,
                blocks_los: false,
                hit_points: None,
                is_wall: false,
                initializer: None,
            },
        }
    }

    pub fn glyph(mut self, glyph: char) -> Self {
        self.template.glyph = Some(glyph);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.template.color = Some(color);
        self
    }

    pub fn bg_color(mut self, color: Color) -> Self {
        self.template.bg_color = Some(color);
        self
    }

    pub fn console_color(mut self, color: Color) -> Self {
        self.template.console_color = Some(color);
        self
    }

    pub fn passable(mut self, passable: bool) -> Self {
        self.template.passable = passable;
        self
    }

    pub fn blocks_los(mut self, blocks_los: bool) -> Self {
        self.template.blocks_los = blocks_los;
        self
    }

    pub fn hit_points(mut self, hit_points: HitPoints) -> Self {
        self.template.hit_points = Some(hit_points);
        self
    }

    /// Mark the type as a wall segment.
    pub fn wall(mut self) -> Self {
        self.template.is_wall = true;
        self
    }

    /// Declare an initializer that grants each capability unconditionally.
    pub fn grants(mut self, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        self.template.initializer = Some(Initializer::grant(capabilities));
        self
    }

    /// Append a rule to the initializer, declaring one if needed.
    pub fn rule(mut self, rule: CapabilityRule) -> Self {
        self.template.initializer = Some(
            self.template
                .initializer
                .take()
                .unwrap_or_default()
                .with_rule(rule),
        );
        self
    }

    /// Declare an initializer that registers nothing.
    pub fn empty_initializer(mut self) -> Self {
        self.template.initializer = Some(Initializer::empty());
        self
    }

    pub fn build(self) -> TypeTemplate {
        self.template
    }
}
