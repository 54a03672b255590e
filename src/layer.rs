//! Layer-based collision filtering.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;

/// Small integer collision layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer(pub u32);

impl Layer {
    /// Layer of bodies that never picked one.
    pub const DEFAULT: Layer = Layer(0);
}

impl From<u32> for Layer {
    fn from(index: u32) -> Self {
        Layer(index)
    }
}

/// A layer with a human-readable name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcreteLayer {
    pub name: String,
    pub layer: Layer,
}

impl ConcreteLayer {
    /// Name `layer`.
    pub fn new(name: impl Into<String>, layer: Layer) -> Self {
        ConcreteLayer { name: name.into(), layer }
    }

    /// The default layer, named "Default".
    pub fn default_layer() -> Self {
        ConcreteLayer::new("Default", Layer::DEFAULT)
    }
}

/// Declares that bodies on `first` collide with bodies on `second`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerCollisionSetting {
    pub first: ConcreteLayer,
    pub second: ConcreteLayer,
}

impl LayerCollisionSetting {
    /// Let `first` collide with `second`.
    pub fn new(first: ConcreteLayer, second: ConcreteLayer) -> Self {
        LayerCollisionSetting { first, second }
    }
}

/// Immutable table of which layers may collide, built once from settings.
///
/// The table is directional (`first -> second`). The world asks in both
/// directions, so a single setting is enough for a pair to collide.
#[derive(Clone, Debug)]
pub struct PhysicLayerSystem {
    collision_table: BTreeMap<Layer, BTreeSet<Layer>>,
    layer_names: BTreeMap<String, Layer>,
}

impl PhysicLayerSystem {
    /// Build from settings. An empty list means the default layer collides
    /// with itself and nothing else exists.
    pub fn new(settings: &[LayerCollisionSetting]) -> Self {
        if settings.is_empty() {
            let default = ConcreteLayer::default_layer();
            return Self::new(&[LayerCollisionSetting::new(default.clone(), default)]);
        }

        let mut collision_table: BTreeMap<Layer, BTreeSet<Layer>> = BTreeMap::new();
        let mut layer_names = BTreeMap::new();
        for setting in settings {
            collision_table
                .entry(setting.first.layer)
                .or_default()
                .insert(setting.second.layer);
            layer_names.entry(setting.first.name.clone()).or_insert(setting.first.layer);
            layer_names.entry(setting.second.name.clone()).or_insert(setting.second.layer);
        }

        log::debug!(
            "layer system built: {} named layers, {} source layers",
            layer_names.len(),
            collision_table.len()
        );

        PhysicLayerSystem { collision_table, layer_names }
    }

    /// Whether `first` is declared to collide with `second`.
    pub fn layers_colliding(&self, first: Layer, second: Layer) -> bool {
        self.collision_table
            .get(&first)
            .is_some_and(|targets| targets.contains(&second))
    }

    /// Either direction allowed.
    pub fn pair_colliding(&self, first: Layer, second: Layer) -> bool {
        self.layers_colliding(first, second) || self.layers_colliding(second, first)
    }

    /// Both layers must be known by name.
    pub fn concrete_layers_colliding(&self, first: &ConcreteLayer, second: &ConcreteLayer) -> bool {
        self.layer_names.contains_key(&first.name)
            && self.layer_names.contains_key(&second.name)
            && self.layers_colliding(first.layer, second.layer)
    }

    /// Directional query by layer name; unknown names never collide.
    pub fn named_layers_colliding(&self, first: &str, second: &str) -> bool {
        match (self.layer_names.get(first), self.layer_names.get(second)) {
            (Some(&a), Some(&b)) => self.layers_colliding(a, b),
            _ => false,
        }
    }

    /// Layer registered under `name`.
    pub fn layer_by_name(&self, name: &str) -> Option<Layer> {
        self.layer_names.get(name).copied()
    }
}

impl Default for PhysicLayerSystem {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, index: u32) -> ConcreteLayer {
        ConcreteLayer::new(name, Layer(index))
    }

    #[test]
    fn empty_settings_default_collides_with_itself() {
        let layers = PhysicLayerSystem::new(&[]);
        assert!(layers.layers_colliding(Layer::DEFAULT, Layer::DEFAULT));
        assert!(!layers.layers_colliding(Layer::DEFAULT, Layer(1)));
        assert_eq!(layers.layer_by_name("Default"), Some(Layer::DEFAULT));
    }

    #[test]
    fn table_is_directional() {
        let layers = PhysicLayerSystem::new(&[LayerCollisionSetting::new(named("Player", 1), named("Wall", 2))]);
        assert!(layers.layers_colliding(Layer(1), Layer(2)));
        assert!(!layers.layers_colliding(Layer(2), Layer(1)));
        assert!(layers.pair_colliding(Layer(2), Layer(1)));
    }

    #[test]
    fn lookup_by_name() {
        let layers = PhysicLayerSystem::new(&[
            LayerCollisionSetting::new(named("Player", 1), named("Wall", 2)),
            LayerCollisionSetting::new(named("Wall", 2), named("Wall", 2)),
        ]);
        assert!(layers.named_layers_colliding("Player", "Wall"));
        assert!(layers.named_layers_colliding("Wall", "Wall"));
        assert!(!layers.named_layers_colliding("Player", "Ghost"));
        assert!(!layers.concrete_layers_colliding(&named("Ghost", 1), &named("Wall", 2)));
    }
}
