use bevy::prelude::*;
use fruit_cat::interaction::inputmap::plugin::InputActionsPlugin;
use fruit_cat::interaction::inputmap::types::{Action, KeyBindings};
use fruit_cat::interaction::inputmap::parse::parse_input_toml;
use fruit_cat::{Cat, CatDirection, GameConfig};

fn app_with_cat() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.add_plugins(InputActionsPlugin);
    let cat = app.world_mut().spawn(Cat::default()).id();
    app.update();
    (app, cat)
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    // No InputPlugin here, so transitions are cleared by hand.
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

fn direction(app: &App, cat: Entity) -> CatDirection {
    app.world().get::<Cat>(cat).unwrap().direction
}

#[test]
fn presses_steer_and_direction_sticks() {
    let (mut app, cat) = app_with_cat();
    assert_eq!(direction(&app, cat), CatDirection::None);

    press(&mut app, KeyCode::ArrowUp);
    assert_eq!(direction(&app, cat), CatDirection::Up);

    release(&mut app, KeyCode::ArrowUp);
    assert_eq!(direction(&app, cat), CatDirection::Up, "release is ignored");

    press(&mut app, KeyCode::KeyX);
    assert_eq!(direction(&app, cat), CatDirection::Up, "unbound key is ignored");

    press(&mut app, KeyCode::ArrowDown);
    assert_eq!(direction(&app, cat), CatDirection::Down);

    // Holding a key does not re-trigger; only fresh presses count.
    app.update();
    assert_eq!(direction(&app, cat), CatDirection::Down);
}

#[test]
fn custom_table_replaces_defaults() {
    let (mut app, cat) = app_with_cat();
    let mut table = KeyBindings::empty();
    table.bind(KeyCode::KeyI, Action::Up);
    table.bind(KeyCode::KeyK, Action::Down);
    app.insert_resource(table);

    press(&mut app, KeyCode::ArrowUp);
    assert_eq!(direction(&app, cat), CatDirection::None);
    press(&mut app, KeyCode::KeyK);
    assert_eq!(direction(&app, cat), CatDirection::Down);
    press(&mut app, KeyCode::KeyI);
    assert_eq!(direction(&app, cat), CatDirection::Up);
}

#[test]
fn shipped_input_file_matches_defaults() {
    let raw = std::fs::read_to_string("assets/config/input.toml").expect("input.toml");
    let parsed = parse_input_toml(&raw);
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    assert_eq!(parsed.key_bindings, KeyBindings::default());
}
