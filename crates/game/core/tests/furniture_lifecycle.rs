use furniture_core::{
    Capability, CapabilitySet, Catalog, CatalogOracle, Destructible, EntityId, Furniture,
    FurnitureConfig, FurnitureError, FurnitureFactory, FurnitureManager, FurnitureStore, Position,
    ResolvableActions, palette,
};

fn create(type_key: &str, x: i32, y: i32) -> Result<Furniture, FurnitureError> {
    let catalog = Catalog::builtin();
    let config = FurnitureConfig::default();
    FurnitureFactory::new(&catalog, &config).create(EntityId(1), type_key, Position::new(x, y))
}

#[test]
fn every_builtin_type_is_destructible() {
    let catalog = Catalog::builtin();
    let config = FurnitureConfig::default();
    let factory = FurnitureFactory::new(&catalog, &config);

    assert_eq!(catalog.len(), 22);
    for (index, key) in catalog.type_keys().into_iter().enumerate() {
        let furniture = factory
            .create(EntityId(index as u32), key, Position::ORIGIN)
            .unwrap();
        assert!(
            furniture.supports_capability(Capability::MeleeAttack),
            "{key} must support melee_attack"
        );
        assert!(furniture.supports_action("melee_attack"));
    }
}

#[test]
fn capability_queries_are_stable() {
    let shelves = create("shelves", 0, 0).unwrap();
    let first: Vec<bool> = Capability::all()
        .map(|capability| shelves.supports_capability(capability))
        .collect();
    let second: Vec<bool> = Capability::all()
        .map(|capability| shelves.supports_capability(capability))
        .collect();

    assert_eq!(first, second);
    assert_eq!(first, vec![true, true, true, false, false, true]);
}

#[test]
fn door_scenario() {
    let door = create("door", 3, 4).unwrap();

    assert_eq!(door.position(), Position::new(3, 4));
    assert_eq!(door.type_key(), "door");
    assert!(door.blocks_los());
    assert!(!door.is_passable());
    assert_eq!(door.hit_points(), 5);
    assert!(door.supports_action("open"));
    assert!(door.supports_action("close"));
    assert!(door.supports_action("melee_attack"));
    assert!(!door.supports_action("grab"));
}

#[test]
fn chair_destroyed_by_exact_damage() {
    let mut chair = create("chair", 0, 0).unwrap();
    chair.take_damage(4);

    assert_eq!(chair.hit_points(), 0);
    assert!(chair.is_destroyed());
}

#[test]
fn repeated_damage_is_cumulative() {
    let mut door = create("door", 0, 0).unwrap();

    door.take_damage(2);
    assert_eq!(door.hit_points(), 3);
    assert!(!door.is_destroyed());

    door.take_damage(2);
    assert_eq!(door.hit_points(), 1);
    assert!(!door.is_destroyed());

    door.take_damage(2);
    assert_eq!(door.hit_points(), -1);
    assert!(door.is_destroyed());
}

#[test]
fn microscope_has_only_the_baseline() {
    let microscope = create("microscope", 1, 1).unwrap();

    assert_eq!(microscope.capabilities(), CapabilitySet::MELEE_ATTACK);
    assert_eq!(
        microscope.capabilities().capabilities().collect::<Vec<_>>(),
        vec![Capability::MeleeAttack]
    );
    assert_eq!(microscope.hit_points(), FurnitureConfig::DEFAULT_HIT_POINTS);
}

#[test]
fn empty_initializers_add_nothing() {
    for key in ["table", "desk", "computer", "cubicle_wall"] {
        let furniture = create(key, 0, 0).unwrap();
        assert_eq!(furniture.capabilities(), CapabilitySet::baseline(), "{key}");
    }
}

#[test]
fn unknown_type_produces_no_instance() {
    assert_eq!(
        create("sofa", 0, 0),
        Err(FurnitureError::UnknownType("sofa".into()))
    );
}

#[test]
fn unknown_action_ids_are_unsupported() {
    let chest = create("chest", 0, 0).unwrap();
    assert!(!chest.supports_action("teleport"));
    assert!(!chest.supports_action(""));
    assert!(!chest.supports_action("Open"));
}

#[test]
fn walls_and_display_attributes_are_copied() {
    let window = create("window", 0, 0).unwrap();
    assert!(window.is_wall());
    assert_eq!(window.hit_points(), 10);
    assert_eq!(window.bg_color(), Some(palette::SLATE_ALT));
    assert_eq!(window.glyph(), Some('/'));

    let placeholder = create("placeholder", 0, 0).unwrap();
    assert!(placeholder.is_passable());
    assert_eq!(placeholder.glyph(), None);
    assert_eq!(placeholder.color(), None);
    assert_eq!(placeholder.bg_color(), None);
}

#[derive(Default)]
struct RecordingManager {
    calls: Vec<(EntityId, Position)>,
}

impl FurnitureManager for RecordingManager {
    type Error = std::convert::Infallible;

    fn move_furniture(&mut self, id: EntityId, to: Position) -> Result<(), Self::Error> {
        self.calls.push((id, to));
        Ok(())
    }
}

#[test]
fn move_to_calls_manager_once_per_call_unchecked() {
    let chair = create("chair", 0, 0).unwrap();
    let mut manager = RecordingManager::default();

    chair.move_to(&mut manager, Position::new(5, 6)).unwrap();
    chair.move_to(&mut manager, Position::new(5, 6)).unwrap();

    assert_eq!(
        manager.calls,
        vec![
            (EntityId(1), Position::new(5, 6)),
            (EntityId(1), Position::new(5, 6))
        ]
    );
    // The instance itself never moves on its own.
    assert_eq!(chair.position(), Position::ORIGIN);
}

#[test]
fn store_round_trip_through_damage_and_reap() {
    let catalog = Catalog::builtin();
    let config = FurnitureConfig::default();
    let factory = FurnitureFactory::new(&catalog, &config);
    let mut store = FurnitureStore::new();

    let trashcan = store
        .spawn(&factory, "trashcan", Position::new(2, 2))
        .unwrap();
    let box_id = store.spawn(&factory, "box", Position::new(2, 2)).unwrap();

    let world = |furniture: &Furniture, to: Position| {
        furniture.supports_capability(Capability::Push) && to.x >= 0 && to.y >= 0
    };
    store.try_move(&world, box_id, Position::new(3, 2)).unwrap();
    assert!(store.try_move(&world, box_id, Position::new(-1, 2)).is_err());
    assert!(store.try_move(&world, trashcan, Position::new(2, -1)).is_err());

    assert_eq!(store.damage(trashcan, 1), Ok(true));
    let reaped = store.reap_destroyed();

    assert_eq!(reaped.len(), 1);
    assert_eq!(reaped[0].id(), trashcan);
    assert_eq!(store.at(Position::new(2, 2)).count(), 0);
    assert_eq!(
        store.get(box_id).map(Furniture::position),
        Some(Position::new(3, 2))
    );
}
