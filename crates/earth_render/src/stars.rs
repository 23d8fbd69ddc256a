use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use earth_stars::{StarFieldParams, StarPoint};
use earth_state::{ViewSettings, ViewState};

/// World-space radius of a star per unit of generated size
const STAR_SIZE_SCALE: f32 = 0.05;

/// Marker for the merged star-field mesh
#[derive(Component)]
pub struct StarField {
    /// (count, depth) the current mesh was built from
    pub built: (u32, u32),
}

/// Spawn the star field with the configured defaults
pub fn spawn_star_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    view: Res<ViewState>,
    settings: Res<ViewSettings>,
) {
    let count = view.effective_star_count();
    let params = StarFieldParams::from_config(&settings, count, view.star_depth);
    let stars = earth_stars::generate(&params);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(star_mesh(&stars))),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        visibility_for(&stars),
        StarField {
            built: (count, view.star_depth),
        },
    ));

    info!("Star field spawned: {} stars, depth {}", count, view.star_depth);
}

/// Rebuild the mesh when the star count or depth moved
pub fn update_star_field(
    view: Res<ViewState>,
    settings: Res<ViewSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut query: Query<(&Mesh3d, &mut StarField, &mut Visibility)>,
) {
    let Ok((mesh_handle, mut field, mut visibility)) = query.get_single_mut() else {
        return;
    };
    let wanted = (view.effective_star_count(), view.star_depth);
    if field.built == wanted {
        return;
    }
    field.built = wanted;

    let params = StarFieldParams::from_config(&settings, wanted.0, wanted.1);
    let stars = earth_stars::generate(&params);
    *visibility = visibility_for(&stars);
    // an empty mesh is never uploaded, the old one just stays hidden
    if !stars.is_empty() {
        if let Some(mesh) = meshes.get_mut(&mesh_handle.0) {
            *mesh = star_mesh(&stars);
        }
    }

    debug!("Star field rebuilt: {} stars, depth {}", wanted.0, wanted.1);
}

fn visibility_for(stars: &[StarPoint]) -> Visibility {
    if stars.is_empty() {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    }
}

/// One small octahedron per star, merged into a single mesh
pub fn star_mesh(stars: &[StarPoint]) -> Mesh {
    const CORNERS: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    const FACES: [[u32; 3]; 8] = [
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    let mut positions = Vec::with_capacity(stars.len() * CORNERS.len());
    let mut colors = Vec::with_capacity(stars.len() * CORNERS.len());
    let mut indices = Vec::with_capacity(stars.len() * FACES.len() * 3);

    for (i, star) in stars.iter().enumerate() {
        let base = (i * CORNERS.len()) as u32;
        let center = Vec3::from_array(star.position);
        let r = star.size * STAR_SIZE_SCALE;
        let color = Color::srgb(star.color[0], star.color[1], star.color[2])
            .to_linear()
            .to_f32_array();

        for corner in CORNERS {
            positions.push((center + Vec3::from_array(corner) * r).to_array());
            colors.push(color);
        }
        for face in FACES {
            indices.extend(face.iter().map(|v| base + v));
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(position: [f32; 3], size: f32) -> StarPoint {
        StarPoint {
            position,
            color: [0.9; 3],
            size,
        }
    }

    #[test]
    fn test_mesh_sizes() {
        let stars = vec![star([100.0, 0.0, 0.0], 4.0), star([0.0, -120.0, 0.0], 2.0)];
        let mesh = star_mesh(&stars);
        assert_eq!(mesh.count_vertices(), 12);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(48));
    }

    #[test]
    fn test_corners_surround_star() {
        let mesh = star_mesh(&[star([100.0, 0.0, 0.0], 4.0)]);
        let Some(bevy::render::mesh::VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        for p in positions {
            let d = Vec3::from_array(*p).distance(Vec3::new(100.0, 0.0, 0.0));
            assert!((d - 4.0 * STAR_SIZE_SCALE).abs() < 1e-4);
        }
    }

    #[test]
    fn test_field_follows_view_state() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_resource::<ViewState>()
            .init_resource::<ViewSettings>()
            .add_systems(Startup, spawn_star_field)
            .add_systems(Update, update_star_field);
        app.update();

        let vertices = |app: &mut App| {
            let handle = app
                .world_mut()
                .query_filtered::<&Mesh3d, With<StarField>>()
                .single(app.world())
                .0
                .clone();
            app.world().resource::<Assets<Mesh>>().get(&handle).map(|m| m.count_vertices())
        };
        assert_eq!(vertices(&mut app), Some(5000 * 6));

        app.world_mut()
            .resource_mut::<ViewState>()
            .apply(earth_state::ViewAction::SetStarCount(1200.0));
        app.update();
        assert_eq!(vertices(&mut app), Some(1200 * 6));

        app.world_mut()
            .resource_mut::<ViewState>()
            .apply(earth_state::ViewAction::SetStarCount(0.0));
        app.update();
        let visibility = *app
            .world_mut()
            .query_filtered::<&Visibility, With<StarField>>()
            .single(app.world());
        assert_eq!(visibility, Visibility::Hidden);
    }
}
