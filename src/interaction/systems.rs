use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use super::entities::{InteractionState, PlotHighlight, PlotMesh};
use crate::UiFocus;

/// Pointer entered a plot tile (or one of its children, via bubbling).
pub fn on_plot_over(
    over: On<Pointer<Over>>,
    meshes: Query<&PlotMesh>,
    mut state: ResMut<InteractionState>,
) {
    let Ok(plot) = meshes.get(over.event().event_target()) else {
        return;
    };
    if state.hovered() != Some(plot.id) {
        debug!("Hovering plot {}", plot.id);
        state.pointer_enter(plot.id);
    }
}

/// Pointer left a plot tile.
pub fn on_plot_out(
    out: On<Pointer<Out>>,
    meshes: Query<&PlotMesh>,
    mut state: ResMut<InteractionState>,
) {
    let Ok(plot) = meshes.get(out.event().event_target()) else {
        return;
    };
    if state.hovered() == Some(plot.id) {
        state.pointer_leave(plot.id);
    }
}

/// Primary click on a plot selects it. Any click stops here so nothing
/// beneath the plot reacts to it; clicks landing on a UI panel select nothing.
pub fn on_plot_click(
    mut click: On<Pointer<Click>>,
    meshes: Query<&PlotMesh>,
    focus: Res<UiFocus>,
    mut state: ResMut<InteractionState>,
) {
    let Ok(plot) = meshes.get(click.event().event_target()) else {
        return;
    };
    click.propagate(false);
    if click.event().button != PointerButton::Primary || focus.pointer {
        return;
    }

    if state.selected() != Some(plot.id) {
        info!("Selected plot {}", plot.id);
        state.click(plot.id);
    }
}

/// Copies the resolved highlight from [`InteractionState`] onto every plot mesh.
pub fn sync_plot_highlight(
    state: Res<InteractionState>,
    mut meshes: Query<(&PlotMesh, &mut PlotHighlight)>,
) {
    for (plot, mut highlight) in &mut meshes {
        highlight.set_if_neq(state.highlight(plot.id));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::camera::NormalizedRenderTarget;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::picking::backend::HitData;
    use bevy::picking::pointer::{Location, PointerId};
    use bevy::window::WindowRef;

    use super::*;
    use crate::plots::{Category, PlotId};

    fn spawn_plot(world: &mut World, x: i32) -> Entity {
        world
            .spawn(PlotMesh {
                id: PlotId::Grid { x, z: 0 },
                category: Category::Unsold,
            })
            .id()
    }

    fn highlight(world: &World, entity: Entity) -> PlotHighlight {
        *world.get::<PlotHighlight>(entity).unwrap()
    }

    #[test]
    fn plot_meshes_start_unhighlighted() {
        let mut world = World::new();
        let a = spawn_plot(&mut world, 0);
        assert_eq!(highlight(&world, a), PlotHighlight::Base);
    }

    #[test]
    fn sync_applies_selection_and_hover() {
        let mut world = World::new();
        let a = spawn_plot(&mut world, 0);
        let b = spawn_plot(&mut world, 1);
        let c = spawn_plot(&mut world, 2);

        let mut state = InteractionState::default();
        state.click(PlotId::Grid { x: 0, z: 0 });
        state.pointer_enter(PlotId::Grid { x: 1, z: 0 });
        world.insert_resource(state);

        world.run_system_once(sync_plot_highlight).unwrap();

        assert_eq!(highlight(&world, a), PlotHighlight::Selected);
        assert_eq!(highlight(&world, b), PlotHighlight::Hovered);
        assert_eq!(highlight(&world, c), PlotHighlight::Base);
    }

    #[test]
    fn moving_selection_clears_previous_plot() {
        let mut world = World::new();
        let a = spawn_plot(&mut world, 0);
        let b = spawn_plot(&mut world, 1);

        let mut state = InteractionState::default();
        state.click(PlotId::Grid { x: 0, z: 0 });
        world.insert_resource(state);
        world.run_system_once(sync_plot_highlight).unwrap();

        world
            .resource_mut::<InteractionState>()
            .click(PlotId::Grid { x: 1, z: 0 });
        world.run_system_once(sync_plot_highlight).unwrap();

        assert_eq!(highlight(&world, a), PlotHighlight::Base);
        assert_eq!(highlight(&world, b), PlotHighlight::Selected);
    }

    // ── observers ───────────────────────────────────────────────────

    const TILE_PLOT: PlotId = PlotId::Grid { x: 2, z: 5 };

    /// Clicks that reached the scene root.
    #[derive(Resource, Default)]
    struct RootClicks(usize);

    struct PlotScene {
        world: World,
        building: Entity,
    }

    /// Root with a click counter, one observed plot tile under it, and a
    /// building on the tile.
    fn plot_scene() -> PlotScene {
        let mut world = World::new();
        world.init_resource::<InteractionState>();
        world.init_resource::<UiFocus>();
        world.init_resource::<RootClicks>();
        // PointerTraversal queries `Window`; WindowPlugin registers it in the app.
        world.register_component::<Window>();

        let root = world
            .spawn_empty()
            .observe(|_: On<Pointer<Click>>, mut clicks: ResMut<RootClicks>| {
                clicks.0 += 1;
            })
            .id();
        let plot = PlotMesh {
            id: TILE_PLOT,
            category: Category::Commercial,
        };
        let tile = world
            .spawn((plot, ChildOf(root)))
            .observe(on_plot_over)
            .observe(on_plot_out)
            .observe(on_plot_click)
            .id();
        let building = world.spawn((plot, ChildOf(tile))).id();
        world.flush();

        PlotScene { world, building }
    }

    fn location() -> Location {
        let window = WindowRef::Primary
            .normalize(Some(Entity::PLACEHOLDER))
            .unwrap();
        Location {
            target: NormalizedRenderTarget::Window(window),
            position: Vec2::ZERO,
        }
    }

    fn hit() -> HitData {
        HitData::new(Entity::PLACEHOLDER, 1.0, None, None)
    }

    fn click(scene: &mut PlotScene, button: PointerButton) {
        let event = Click {
            button,
            hit: hit(),
            duration: Duration::from_millis(80),
        };
        let target = scene.building;
        scene
            .world
            .trigger(Pointer::new(PointerId::Mouse, location(), event, target));
    }

    fn state(scene: &PlotScene) -> &InteractionState {
        scene.world.resource::<InteractionState>()
    }

    #[test]
    fn click_on_building_selects_its_plot_and_stops_at_the_tile() {
        let mut scene = plot_scene();
        click(&mut scene, PointerButton::Primary);
        assert_eq!(state(&scene).selected(), Some(TILE_PLOT));
        assert_eq!(scene.world.resource::<RootClicks>().0, 0);
    }

    #[test]
    fn secondary_click_selects_nothing() {
        let mut scene = plot_scene();
        click(&mut scene, PointerButton::Secondary);
        assert_eq!(state(&scene).selected(), None);
        assert_eq!(scene.world.resource::<RootClicks>().0, 0);
    }

    #[test]
    fn click_through_a_ui_panel_selects_nothing() {
        let mut scene = plot_scene();
        scene.world.resource_mut::<UiFocus>().pointer = true;
        click(&mut scene, PointerButton::Primary);
        assert_eq!(state(&scene).selected(), None);
    }

    #[test]
    fn hover_on_building_bubbles_to_its_tile() {
        let mut scene = plot_scene();
        let target = scene.building;

        scene.world.trigger(Pointer::new(
            PointerId::Mouse,
            location(),
            Over { hit: hit() },
            target,
        ));
        assert_eq!(state(&scene).hovered(), Some(TILE_PLOT));

        scene.world.trigger(Pointer::new(
            PointerId::Mouse,
            location(),
            Out { hit: hit() },
            target,
        ));
        assert_eq!(state(&scene).hovered(), None);
    }
}
